use std::path::{Path, PathBuf};

use crate::config;
use crate::ui::dialog::{DialogAction, MessageDialog};

const HELP_DIALOG_TITLE: &str = "Design Options";
const CUSTOM_THEMES_URL: &str = "https://melisma.readthedocs.io/themes";

/* ------------------------------ themes ------------------------------ */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMeta {
    pub name: String,
    pub file_path: PathBuf,
}

impl ThemeMeta {
    pub fn new(name: &str, file_path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            file_path,
        }
    }

    /// Human-readable picker label: separators become spaces, words are
    /// capitalized ("dark_neon" -> "Dark Neon").
    pub fn display_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut at_word_start = true;
        for ch in self.name.chars() {
            if ch == '_' || ch == '-' {
                out.push(' ');
                at_word_start = true;
            } else if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/* ------------------------------- rows ------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionRow {
    Theme,
    NoteDisplayMode,
    LyricsOnNotes,
    StaticLyrics,
    PitchIndicator,
    ImageAsCursor,
    AnimateSceneChange,
}

pub const ROWS: &[OptionRow] = &[
    OptionRow::Theme,
    OptionRow::NoteDisplayMode,
    OptionRow::LyricsOnNotes,
    OptionRow::StaticLyrics,
    OptionRow::PitchIndicator,
    OptionRow::ImageAsCursor,
    OptionRow::AnimateSceneChange,
];

impl OptionRow {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::NoteDisplayMode => "Note Display",
            Self::LyricsOnNotes => "Lyrics on Notes",
            Self::StaticLyrics => "Static Lyrics",
            Self::PitchIndicator => "Pitch Indicator",
            Self::ImageAsCursor => "Image as Cursor",
            Self::AnimateSceneChange => "Animate Scene Change",
        }
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::Theme => "Switch between the built-in and user-defined visual themes.",
            Self::NoteDisplayMode => {
                "Show notes one sentence at a time or as a continuous scrolling stream."
            }
            Self::LyricsOnNotes => "Draw the lyric syllables directly on their notes.",
            Self::StaticLyrics => "Show the full lyric line at the bottom of the screen.",
            Self::PitchIndicator => "Show an indicator for the currently detected pitch.",
            Self::ImageAsCursor => "Replace the system cursor with a themed image.",
            Self::AnimateSceneChange => "Play a short animation when switching scenes.",
        }
    }
}

/* ------------------------------- scene ------------------------------ */

#[derive(Debug, Clone)]
pub struct State {
    pub themes: Vec<ThemeMeta>,
    pub theme_index: usize,
    pub selected: usize,
}

/// The theme list comes from the host's theme scanner; the current theme is
/// matched against the settings by name.
pub fn init(themes: Vec<ThemeMeta>) -> State {
    let current = config::get().graphics.theme_name;
    let theme_index = themes
        .iter()
        .position(|theme| theme.name == current)
        .unwrap_or(0);
    State {
        themes,
        theme_index,
        selected: 0,
    }
}

pub fn move_selection(state: &mut State, delta: i32) {
    let len = ROWS.len() as i32;
    state.selected = ((state.selected as i32 + delta).rem_euclid(len)) as usize;
}

pub fn selected_row(state: &State) -> OptionRow {
    ROWS[state.selected]
}

/// Cycle the selected row's value. Every change writes through to the
/// global settings immediately, like the original pickers' two-way binding.
pub fn adjust(state: &mut State, direction: i32) {
    let settings = config::get();
    match selected_row(state) {
        OptionRow::Theme => {
            if state.themes.is_empty() {
                return;
            }
            let len = state.themes.len() as i32;
            state.theme_index =
                ((state.theme_index as i32 + direction).rem_euclid(len)) as usize;
            config::update_theme_name(&state.themes[state.theme_index].name);
        }
        OptionRow::NoteDisplayMode => {
            // Two variants, so direction only matters for symmetry.
            config::update_note_display_mode(settings.graphics.note_display_mode.next());
        }
        OptionRow::LyricsOnNotes => {
            config::update_show_lyrics_on_notes(!settings.graphics.show_lyrics_on_notes);
        }
        OptionRow::StaticLyrics => {
            config::update_show_static_lyrics(!settings.graphics.show_static_lyrics);
        }
        OptionRow::PitchIndicator => {
            config::update_show_pitch_indicator(!settings.graphics.show_pitch_indicator);
        }
        OptionRow::ImageAsCursor => {
            config::update_use_image_as_cursor(!settings.graphics.use_image_as_cursor);
        }
        OptionRow::AnimateSceneChange => {
            config::update_animate_scene_change(!settings.graphics.animate_scene_change);
        }
    }
}

pub fn value_label(state: &State, row: OptionRow) -> String {
    let settings = config::get();
    let on_off = |enabled: bool| if enabled { "On" } else { "Off" }.to_string();
    match row {
        OptionRow::Theme => state
            .themes
            .get(state.theme_index)
            .map(ThemeMeta::display_name)
            .unwrap_or_else(|| "None".to_string()),
        OptionRow::NoteDisplayMode => settings.graphics.note_display_mode.as_str().to_string(),
        OptionRow::LyricsOnNotes => on_off(settings.graphics.show_lyrics_on_notes),
        OptionRow::StaticLyrics => on_off(settings.graphics.show_static_lyrics),
        OptionRow::PitchIndicator => on_off(settings.graphics.show_pitch_indicator),
        OptionRow::ImageAsCursor => on_off(settings.graphics.use_image_as_cursor),
        OptionRow::AnimateSceneChange => on_off(settings.graphics.animate_scene_change),
    }
}

/// Help dialog with the custom-themes chapter, shown from the options bar.
pub fn help_dialog(themes_folder: &Path) -> MessageDialog {
    let mut dialog = MessageDialog::new(HELP_DIALOG_TITLE);
    dialog.add_chapter(
        "Custom Themes",
        &format!(
            "Place theme files in '{}' to add them to the theme picker.",
            themes_folder.display()
        ),
    );
    dialog.add_button("Close", DialogAction::Close);
    dialog.add_button("View More", DialogAction::OpenUrl(CUSTOM_THEMES_URL.to_string()));
    dialog.add_button(
        "Themes Folder",
        DialogAction::OpenFolder(themes_folder.to_path_buf()),
    );
    dialog
}
