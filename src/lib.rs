// src/lib.rs
pub mod config;
pub mod errors;
pub mod providers;
pub mod generator;
pub mod models;
pub mod banner;
pub mod api;
