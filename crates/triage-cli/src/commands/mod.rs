pub mod config;
pub mod input;
pub mod rank;
pub mod strategies;
