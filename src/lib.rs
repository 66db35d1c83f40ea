pub mod category;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod gradient;
pub mod habits;
pub mod lifepath;
pub mod logging;
pub mod patient;
pub mod reporter;
pub mod ring;
