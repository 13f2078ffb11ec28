// src/api/handlers/mod.rs
mod health;
mod testcases;

pub use health::health_check;
pub use testcases::generate_testcases;
