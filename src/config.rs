use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

const SETTINGS_FILE_NAME: &str = "settings.json";

/* ------------------------------ enums ------------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    German,
    Spanish,
    French,
    Italian,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "German",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Italian => "Italian",
        }
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Self::English),
            "german" => Ok(Self::German),
            "spanish" => Ok(Self::Spanish),
            "french" => Ok(Self::French),
            "italian" => Ok(Self::Italian),
            _ => Err(()),
        }
    }
}

/// How multiple singers sharing one voice are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreMode {
    #[default]
    Individual,
    CommonAverage,
}

impl ScoreMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::CommonAverage => "CommonAverage",
        }
    }
}

impl FromStr for ScoreMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "commonaverage" => Ok(Self::CommonAverage),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PitchDetectionAlgorithm {
    /// Dynamic wavelet pitch detection.
    #[default]
    Dywa,
    /// Circular average magnitude difference function.
    Camdf,
}

impl PitchDetectionAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dywa => "Dywa",
            Self::Camdf => "Camdf",
        }
    }
}

impl FromStr for PitchDetectionAlgorithm {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dywa" => Ok(Self::Dywa),
            "camdf" => Ok(Self::Camdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoteDisplayMode {
    #[default]
    SentenceBySentence,
    ScrollingNoteStream,
}

impl NoteDisplayMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SentenceBySentence => "SentenceBySentence",
            Self::ScrollingNoteStream => "ScrollingNoteStream",
        }
    }

    /// Cycle order used by the design options picker.
    pub const fn next(&self) -> Self {
        match self {
            Self::SentenceBySentence => Self::ScrollingNoteStream,
            Self::ScrollingNoteStream => Self::SentenceBySentence,
        }
    }
}

impl FromStr for NoteDisplayMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentencebysentence" => Ok(Self::SentenceBySentence),
            "scrollingnotestream" => Ok(Self::ScrollingNoteStream),
            _ => Err(()),
        }
    }
}

/* ---------------------------- settings ----------------------------- */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub language: Language,
    pub song_dirs: Vec<PathBuf>,
    pub score_mode: ScoreMode,
    pub common_score_name_separator: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            song_dirs: Vec::new(),
            score_mode: ScoreMode::Individual,
            common_score_name_separator: " & ".to_string(),
        }
    }
}

// Volume fields are percentages in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub preview_volume_percent: u8,
    pub volume_percent: u8,
    pub background_music_volume_percent: u8,
    pub scene_change_sound_volume_percent: u8,
    pub pitch_detection_algorithm: PitchDetectionAlgorithm,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            preview_volume_percent: 50,
            volume_percent: 100,
            background_music_volume_percent: 70,
            scene_change_sound_volume_percent: 100,
            pitch_detection_algorithm: PitchDetectionAlgorithm::Dywa,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicSettings {
    pub note_display_mode: NoteDisplayMode,
    pub show_lyrics_on_notes: bool,
    pub show_static_lyrics: bool,
    pub show_pitch_indicator: bool,
    pub use_image_as_cursor: bool,
    pub animate_scene_change: bool,
    pub theme_name: String,
}

impl Default for GraphicSettings {
    fn default() -> Self {
        Self {
            note_display_mode: NoteDisplayMode::SentenceBySentence,
            show_lyrics_on_notes: false,
            show_static_lyrics: true,
            show_pitch_indicator: false,
            use_image_as_cursor: true,
            animate_scene_change: true,
            theme_name: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameSettings,
    pub audio: AudioSettings,
    pub graphics: GraphicSettings,
}

// Global, mutable settings instance.
static SETTINGS: LazyLock<Mutex<Settings>> = LazyLock::new(|| Mutex::new(Settings::default()));

/* ---------------------------- file I/O ----------------------------- */

pub fn settings_path() -> PathBuf {
    ProjectDirs::from("", "", "melisma")
        .map(|dirs| dirs.data_dir().join(SETTINGS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

fn create_default_settings_file(path: &std::path::Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(&Settings::default()).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Read settings from `path`. A missing file is created with defaults; a
/// malformed file is replaced with a fresh default file so the next run
/// starts clean. Either way the returned settings are usable.
fn read_settings_file(path: &std::path::Path) -> Settings {
    if !path.exists() {
        info!("'{}' not found, creating with default values.", path.display());
        if let Err(e) = create_default_settings_file(path) {
            warn!("Failed to create default settings file: {e}");
        }
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<Settings>(&content) {
            Ok(loaded) => {
                info!("Loaded settings from '{}'", path.display());
                loaded
            }
            Err(e) => {
                warn!(
                    "Malformed settings file '{}', restoring defaults: {e}",
                    path.display()
                );
                if let Err(e) = create_default_settings_file(path) {
                    warn!("Failed to restore default settings file: {e}");
                }
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Could not read '{}', using defaults: {e}", path.display());
            Settings::default()
        }
    }
}

pub fn load() {
    *SETTINGS.lock().unwrap() = read_settings_file(&settings_path());
}

fn save() {
    let path = settings_path();
    let settings = SETTINGS.lock().unwrap().clone();
    let json = match serde_json::to_string_pretty(&settings) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize settings: {e}");
            return;
        }
    };
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("Failed to create settings directory: {e}");
        return;
    }
    if let Err(e) = std::fs::write(&path, json) {
        warn!("Failed to write '{}': {e}", path.display());
    }
}

pub fn get() -> Settings {
    SETTINGS.lock().unwrap().clone()
}

/* -------------------------- field updates -------------------------- */

pub fn update_note_display_mode(mode: NoteDisplayMode) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.note_display_mode == mode {
            return;
        }
        settings.graphics.note_display_mode = mode;
    }
    save();
}

pub fn update_show_lyrics_on_notes(enabled: bool) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.show_lyrics_on_notes == enabled {
            return;
        }
        settings.graphics.show_lyrics_on_notes = enabled;
    }
    save();
}

pub fn update_show_static_lyrics(enabled: bool) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.show_static_lyrics == enabled {
            return;
        }
        settings.graphics.show_static_lyrics = enabled;
    }
    save();
}

pub fn update_show_pitch_indicator(enabled: bool) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.show_pitch_indicator == enabled {
            return;
        }
        settings.graphics.show_pitch_indicator = enabled;
    }
    save();
}

pub fn update_use_image_as_cursor(enabled: bool) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.use_image_as_cursor == enabled {
            return;
        }
        settings.graphics.use_image_as_cursor = enabled;
    }
    save();
}

pub fn update_animate_scene_change(enabled: bool) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.animate_scene_change == enabled {
            return;
        }
        settings.graphics.animate_scene_change = enabled;
    }
    save();
}

pub fn update_theme_name(name: &str) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.graphics.theme_name == name {
            return;
        }
        settings.graphics.theme_name = name.to_string();
    }
    save();
}

pub fn update_score_mode(mode: ScoreMode) {
    {
        let mut settings = SETTINGS.lock().unwrap();
        if settings.game.score_mode == mode {
            return;
        }
        settings.game.score_mode = mode;
    }
    save();
}
