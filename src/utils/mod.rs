pub mod error;
pub mod escape;
pub mod logger;
pub mod validation;
