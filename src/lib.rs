pub mod config;
pub mod database;
pub mod error;
pub mod loader;
pub mod models;
pub mod service;
pub mod web;

pub use config::Config;
pub use database::WordStore;
pub use error::QuizError;
pub use models::*;
pub use service::QueryService;
