pub mod extract_service;

pub use extract_service::{ExtractService, Extraction};
