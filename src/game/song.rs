use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SongMeta {
    pub title: String,
    pub artist: String,
}

impl SongMeta {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }

    /// Scene subtitle text: `"Title - Artist"`, eliding empty pieces.
    pub fn display_label(&self) -> String {
        let title = self.title.trim();
        let artist = self.artist.trim();
        match (title.is_empty(), artist.is_empty()) {
            (false, false) => format!("{title} - {artist}"),
            (false, true) => title.to_string(),
            (true, false) => artist.to_string(),
            (true, true) => String::new(),
        }
    }

    /// Stable lookup key for statistics and caches.
    pub fn cache_key(&self) -> String {
        format!(
            "{}\n{}",
            self.artist.trim().to_lowercase(),
            self.title.trim().to_lowercase()
        )
    }
}
