pub mod design_options;
pub mod singing_results;

use crate::game::player::{Difficulty, PlayerResult};
use crate::game::song::SongMeta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SingingResults,
    Highscore,
    SongSelect,
    Sing,
    DesignOptions,
}

/* ---------------------------- scene data ---------------------------- */

#[derive(Debug, Clone)]
pub struct SingingResultsSceneData {
    pub song: SongMeta,
    pub player_results: Vec<PlayerResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HighscoreSceneData {
    pub song: SongMeta,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SongSelectSceneData {
    pub song: SongMeta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingSceneData {
    pub song: SongMeta,
}

/// A tagged destination plus the payload the target scene needs. The host's
/// navigator performs the actual transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneTarget {
    Highscore(HighscoreSceneData),
    SongSelect(SongSelectSceneData),
    Sing(SingSceneData),
}

impl SceneTarget {
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Highscore(_) => Screen::Highscore,
            Self::SongSelect(_) => Screen::SongSelect,
            Self::Sing(_) => Screen::Sing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    None,
    Navigate(SceneTarget),
}
