use crate::game::player::Difficulty;
use crate::game::song::SongMeta;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct HighscoreEntry {
    pub player_name: String,
    pub score: f64,
    pub difficulty: Difficulty,
}

/// Per-song highscore records. Owned by the host session and passed to
/// screens explicitly; the singing-results scene only needs it to decide
/// whether the highscore scene is worth showing.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    entries: HashMap<String, Vec<HighscoreEntry>>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, song: &SongMeta, entry: HighscoreEntry) {
        self.entries.entry(song.cache_key()).or_default().push(entry);
    }

    pub fn has_highscore(&self, song: &SongMeta) -> bool {
        self.entries
            .get(&song.cache_key())
            .is_some_and(|entries| !entries.is_empty())
    }

    /// Best entries for a song, highest score first. Ties keep insertion
    /// order (earlier record wins).
    pub fn top_entries(&self, song: &SongMeta, limit: usize) -> Vec<&HighscoreEntry> {
        let Some(entries) = self.entries.get(&song.cache_key()) else {
            return Vec::new();
        };
        let mut sorted: Vec<&HighscoreEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        sorted.truncate(limit);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: f64) -> HighscoreEntry {
        HighscoreEntry {
            player_name: name.to_string(),
            score,
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn has_highscore_only_after_record() {
        let song = SongMeta::new("Song", "Artist");
        let other = SongMeta::new("Other", "Artist");
        let mut stats = Statistics::new();
        assert!(!stats.has_highscore(&song));

        stats.record(&song, entry("Ada", 8200.0));
        assert!(stats.has_highscore(&song));
        assert!(!stats.has_highscore(&other));
    }

    #[test]
    fn top_entries_sorted_descending_and_limited() {
        let song = SongMeta::new("Song", "Artist");
        let mut stats = Statistics::new();
        stats.record(&song, entry("Ada", 6100.0));
        stats.record(&song, entry("Grace", 9300.0));
        stats.record(&song, entry("Joan", 7800.0));

        let top = stats.top_entries(&song, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].player_name, "Grace");
        assert_eq!(top[1].player_name, "Joan");
    }
}
