pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
