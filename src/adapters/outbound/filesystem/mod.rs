/// Filesystem adapters for writing the rendered tree
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
