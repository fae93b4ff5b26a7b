pub mod app;
pub mod errors;
