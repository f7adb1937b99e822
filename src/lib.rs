//! UI and scene-control layer of a karaoke game: settings, notification and
//! dialog models, the player-profile image path cache, and the scene
//! controllers for design options and singing results. Rendering, audio,
//! and scene navigation live outside this crate; screens return plain data
//! and tagged scene transitions for the host to act on.

pub mod config;
pub mod game;
pub mod screens;
pub mod ui;
