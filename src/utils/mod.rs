//! Shared helpers: ring arithmetic and logging setup.

pub mod logger;
pub mod modular;
