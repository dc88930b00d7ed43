/// Shared kernel: error types, exit codes and file-system guards
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
