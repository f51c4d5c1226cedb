// src/core.rs
pub mod config;
pub mod counter;
pub mod parser;
pub mod scanner;
