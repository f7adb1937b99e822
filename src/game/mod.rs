pub mod player;
pub mod rating;
pub mod song;
pub mod stats;
