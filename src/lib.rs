pub mod config;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod image_classifier;
pub mod library;
