/// Platform-specific functionality — file size accounting per target.
pub mod file_size;

pub use file_size::{AllocatedSize, FileSizeResolver, LogicalSize, SizeMode};
