// src/utils/mod.rs
pub mod logger;
