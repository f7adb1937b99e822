pub mod dialog;
pub mod images;
pub mod notifications;
