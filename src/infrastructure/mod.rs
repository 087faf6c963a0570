pub mod content;
pub mod preferences;
pub mod time;
