pub mod datetime;
pub mod error_helpers;
pub mod file;
pub mod text;
pub mod validation;
