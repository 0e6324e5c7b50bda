//! Input processing module
//! Handles file detection, text extraction, sample data and input management

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod samples;

pub use manager::InputManager;
pub use text_extractor::{extract_text, DocumentSource};
