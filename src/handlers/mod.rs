//! Handler implementations

pub mod console;
pub mod rotating_file;

pub use console::ConsoleHandler;
pub use rotating_file::{OpenMode, RotatingFileHandler, RotationConfig};

// Re-export the trait next to its implementations
pub use crate::core::Handler;
