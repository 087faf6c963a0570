// src/application/ports/mod.rs
pub mod preferences;
pub mod time;
