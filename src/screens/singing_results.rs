use log::info;
use thiserror::Error;

use crate::game::player::PlayerResult;
use crate::game::rating::SongRating;
use crate::game::song::SongMeta;
use crate::game::stats::Statistics;
use crate::screens::{
    HighscoreSceneData, SceneTarget, ScreenAction, SingSceneData, SingingResultsSceneData,
    SongSelectSceneData,
};

/* ------------------------------ layout ------------------------------ */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Single,
    Dual,
    Grid(GridDimensions),
}

/// Position of one result slot inside the grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPosition {
    pub column: u32,
    pub row: u32,
}

/// Grid result slots shrink as rows pile up, mirroring the style ladder the
/// renderer applies to crowded layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotScale {
    Small,
    Smaller,
    Smallest,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("player count must be at least 1, got {0}")]
    InvalidPlayerCount(usize),
}

pub fn select_layout(player_count: usize) -> Result<Layout, LayoutError> {
    match player_count {
        0 => Err(LayoutError::InvalidPlayerCount(player_count)),
        1 => Ok(Layout::Single),
        2 => Ok(Layout::Dual),
        n => Ok(Layout::Grid(compute_grid(n))),
    }
}

/// Near-square grid packing for `player_count >= 1`: columns = floor(sqrt(n)),
/// rows = ceil(n / columns), so columns <= rows and columns * rows >= n.
/// Exactly three players get a single wide row instead.
pub fn compute_grid(player_count: usize) -> GridDimensions {
    if player_count == 3 {
        return GridDimensions { columns: 3, rows: 1 };
    }

    let columns = ((player_count as f64).sqrt().floor() as u32).max(1);
    let rows = (player_count as u32).div_ceil(columns);
    GridDimensions { columns, rows }
}

/// Column-major slot positions for the grid layout: column 0 fills top to
/// bottom, then column 1, stopping once every player has a slot. Trailing
/// grid cells are never materialized.
pub fn grid_slots(player_count: usize) -> Vec<SlotPosition> {
    let grid = compute_grid(player_count);
    let mut slots = Vec::with_capacity(player_count);
    'columns: for column in 0..grid.columns {
        for row in 0..grid.rows {
            if slots.len() >= player_count {
                break 'columns;
            }
            slots.push(SlotPosition { column, row });
        }
    }
    slots
}

pub const fn slot_scale(rows: u32) -> SlotScale {
    if rows > 3 {
        SlotScale::Smallest
    } else if rows > 2 {
        SlotScale::Smaller
    } else {
        SlotScale::Small
    }
}

/* ------------------------------- scene ------------------------------ */

/// One filled result slot: the player's outcome, the rating tier their
/// total score earned, and (for the grid layout) where the slot sits.
#[derive(Debug, Clone)]
pub struct PlayerSlot {
    pub result: PlayerResult,
    pub rating: SongRating,
    pub position: Option<SlotPosition>,
}

#[derive(Debug, Clone)]
pub struct State {
    pub song: SongMeta,
    pub song_label: String,
    pub layout: Layout,
    pub slots: Vec<PlayerSlot>,
}

impl State {
    /// Scale class shared by all grid slots; `None` for Single/Dual.
    pub const fn grid_slot_scale(&self) -> Option<SlotScale> {
        match self.layout {
            Layout::Grid(grid) => Some(slot_scale(grid.rows)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsInput {
    Continue,
    Restart,
}

pub fn init(data: SingingResultsSceneData) -> Result<State, LayoutError> {
    let layout = select_layout(data.player_results.len())?;

    let positions: Vec<Option<SlotPosition>> = match layout {
        Layout::Grid(_) => grid_slots(data.player_results.len())
            .into_iter()
            .map(Some)
            .collect(),
        _ => vec![None; data.player_results.len()],
    };

    let slots: Vec<PlayerSlot> = data
        .player_results
        .into_iter()
        .zip(positions)
        .map(|(result, position)| PlayerSlot {
            rating: SongRating::for_score(result.score.total()),
            result,
            position,
        })
        .collect();

    info!(
        "Singing results for '{}': {} player(s), layout {:?}",
        data.song.display_label(),
        slots.len(),
        layout
    );

    Ok(State {
        song_label: data.song.display_label(),
        song: data.song,
        layout,
        slots,
    })
}

/// Leaving the scene: show the highscore scene when the song has records,
/// otherwise return to song select.
pub fn finish(state: &State, statistics: &Statistics) -> ScreenAction {
    if statistics.has_highscore(&state.song) {
        let difficulty = state
            .slots
            .first()
            .map(|slot| slot.result.profile.difficulty)
            .unwrap_or_default();
        ScreenAction::Navigate(SceneTarget::Highscore(HighscoreSceneData {
            song: state.song.clone(),
            difficulty,
        }))
    } else {
        ScreenAction::Navigate(SceneTarget::SongSelect(SongSelectSceneData {
            song: state.song.clone(),
        }))
    }
}

/// Restart singing the same song.
pub fn restart(state: &State) -> ScreenAction {
    ScreenAction::Navigate(SceneTarget::Sing(SingSceneData {
        song: state.song.clone(),
    }))
}

pub fn handle_input(state: &State, input: ResultsInput, statistics: &Statistics) -> ScreenAction {
    match input {
        ResultsInput::Continue => finish(state, statistics),
        ResultsInput::Restart => restart(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::player::{Difficulty, PlayerProfile, PlayerScore};
    use crate::game::stats::HighscoreEntry;
    use crate::screens::Screen;

    fn result_with_score(name: &str, total: f64) -> PlayerResult {
        PlayerResult {
            profile: PlayerProfile::new(name, Difficulty::Medium),
            mic_profile: None,
            score: PlayerScore {
                normal_notes_score: total,
                golden_notes_score: 0.0,
                perfect_sentence_bonus_score: 0.0,
            },
        }
    }

    fn scene_data(player_count: usize) -> SingingResultsSceneData {
        SingingResultsSceneData {
            song: SongMeta::new("Song", "Artist"),
            player_results: (0..player_count)
                .map(|i| result_with_score(&format!("P{}", i + 1), 5000.0))
                .collect(),
        }
    }

    #[test]
    fn layout_by_player_count() {
        assert_eq!(select_layout(1), Ok(Layout::Single));
        assert_eq!(select_layout(2), Ok(Layout::Dual));
        for n in 3..=16 {
            assert!(matches!(select_layout(n), Ok(Layout::Grid(_))), "n = {n}");
        }
    }

    #[test]
    fn zero_players_is_invalid() {
        assert_eq!(select_layout(0), Err(LayoutError::InvalidPlayerCount(0)));
    }

    #[test]
    fn three_players_use_one_wide_row() {
        // Explicit override; the general formula would give 1x3.
        assert_eq!(compute_grid(3), GridDimensions { columns: 3, rows: 1 });
    }

    #[test]
    fn grid_dimensions_for_small_counts() {
        assert_eq!(compute_grid(4), GridDimensions { columns: 2, rows: 2 });
        assert_eq!(compute_grid(5), GridDimensions { columns: 2, rows: 3 });
        assert_eq!(compute_grid(9), GridDimensions { columns: 3, rows: 3 });
        assert_eq!(compute_grid(12), GridDimensions { columns: 3, rows: 4 });
    }

    #[test]
    fn grid_always_holds_every_player() {
        for n in 1..=50 {
            let grid = compute_grid(n);
            assert!(grid.columns >= 1 && grid.rows >= 1, "n = {n}");
            assert!(
                grid.columns as usize * grid.rows as usize >= n,
                "{}x{} cannot hold {n}",
                grid.columns,
                grid.rows
            );
        }
    }

    #[test]
    fn grid_is_near_square_with_columns_at_most_rows() {
        for n in 4..=50 {
            let grid = compute_grid(n);
            assert!(grid.columns <= grid.rows, "n = {n}: {grid:?}");
        }
    }

    #[test]
    fn grid_slots_fill_column_major() {
        // 5 players on a 2x3 grid: column 0 top to bottom, then column 1.
        let slots = grid_slots(5);
        assert_eq!(
            slots,
            vec![
                SlotPosition { column: 0, row: 0 },
                SlotPosition { column: 0, row: 1 },
                SlotPosition { column: 0, row: 2 },
                SlotPosition { column: 1, row: 0 },
                SlotPosition { column: 1, row: 1 },
            ]
        );
    }

    #[test]
    fn grid_slots_exactly_one_per_player() {
        for n in 3..=50 {
            let grid = compute_grid(n);
            let slots = grid_slots(n);
            assert_eq!(slots.len(), n);
            for slot in &slots {
                assert!(slot.column < grid.columns);
                assert!(slot.row < grid.rows);
            }
        }
    }

    #[test]
    fn slot_scale_shrinks_with_row_count() {
        assert_eq!(slot_scale(1), SlotScale::Small);
        assert_eq!(slot_scale(2), SlotScale::Small);
        assert_eq!(slot_scale(3), SlotScale::Smaller);
        assert_eq!(slot_scale(4), SlotScale::Smallest);
        assert_eq!(slot_scale(7), SlotScale::Smallest);
    }

    #[test]
    fn init_resolves_ratings_and_positions() {
        let mut data = scene_data(4);
        data.player_results[0].score.normal_notes_score = 9900.0;
        data.player_results[1].score.normal_notes_score = 100.0;

        let state = init(data).unwrap();
        assert_eq!(state.song_label, "Song - Artist");
        assert_eq!(state.slots.len(), 4);
        assert_eq!(state.slots[0].rating, SongRating::Ultrastar);
        assert_eq!(state.slots[1].rating, SongRating::ToneDeaf);
        assert_eq!(
            state.slots[3].position,
            Some(SlotPosition { column: 1, row: 1 })
        );
        assert_eq!(state.grid_slot_scale(), Some(SlotScale::Small));
    }

    #[test]
    fn init_single_and_dual_have_no_grid_positions() {
        let state = init(scene_data(2)).unwrap();
        assert_eq!(state.layout, Layout::Dual);
        assert!(state.slots.iter().all(|slot| slot.position.is_none()));
        assert_eq!(state.grid_slot_scale(), None);
    }

    #[test]
    fn init_rejects_empty_roster() {
        assert_eq!(
            init(scene_data(0)).unwrap_err(),
            LayoutError::InvalidPlayerCount(0)
        );
    }

    #[test]
    fn finish_prefers_highscore_scene_when_song_has_records() {
        let state = init(scene_data(1)).unwrap();
        let mut stats = Statistics::new();

        match finish(&state, &stats) {
            ScreenAction::Navigate(target) => assert_eq!(target.screen(), Screen::SongSelect),
            other => panic!("unexpected action: {other:?}"),
        }

        stats.record(
            &state.song,
            HighscoreEntry {
                player_name: "Ada".to_string(),
                score: 9100.0,
                difficulty: Difficulty::Hard,
            },
        );
        match finish(&state, &stats) {
            ScreenAction::Navigate(SceneTarget::Highscore(data)) => {
                assert_eq!(data.song, state.song);
                assert_eq!(data.difficulty, Difficulty::Medium);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn restart_returns_to_sing_scene_with_same_song() {
        let state = init(scene_data(3)).unwrap();
        let stats = Statistics::new();
        let action = handle_input(&state, ResultsInput::Restart, &stats);
        assert_eq!(
            action,
            ScreenAction::Navigate(SceneTarget::Sing(SingSceneData {
                song: state.song.clone()
            }))
        );

        // Continue routes through the finish branch.
        let action = handle_input(&state, ResultsInput::Continue, &stats);
        assert_eq!(
            action,
            ScreenAction::Navigate(SceneTarget::SongSelect(SongSelectSceneData {
                song: state.song.clone()
            }))
        );
    }
}
