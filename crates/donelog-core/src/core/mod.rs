pub mod filter;
pub mod pagination;
pub mod services;
pub mod source;
pub mod sources;
