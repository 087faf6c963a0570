// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod responses;
pub mod routes;
pub mod state;
