use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub difficulty: Difficulty,
    /// Relative path into the player profile image folders, resolved through
    /// `ui::images`. Empty means "use the fallback image".
    pub image_path: String,
}

impl PlayerProfile {
    pub fn new(name: &str, difficulty: Difficulty) -> Self {
        Self {
            name: name.to_string(),
            difficulty,
            image_path: String::new(),
        }
    }
}

/// Microphone device profile assigned to a player for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicProfile {
    pub name: String,
    pub color_rgba: [f32; 4],
    pub channel_index: usize,
}

/// Score components accumulated during one song, as produced by the scoring
/// subsystem. Components are non-negative; the maximum total is 10000.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerScore {
    pub normal_notes_score: f64,
    pub golden_notes_score: f64,
    pub perfect_sentence_bonus_score: f64,
}

impl PlayerScore {
    pub fn total(&self) -> f64 {
        self.normal_notes_score + self.golden_notes_score + self.perfect_sentence_bonus_score
    }
}

/// One player's outcome for a single scene visit. Built from session data
/// when the singing-results scene is entered and discarded with the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResult {
    pub profile: PlayerProfile,
    pub mic_profile: Option<MicProfile>,
    pub score: PlayerScore,
}
