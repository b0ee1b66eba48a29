/// Data model for scan results.
///
/// Everything here is plain data: produced by the walker, read by the
/// frontend once the scan has joined.
pub mod file_entry;
pub mod size;
pub mod stats;

pub use file_entry::FileEntry;
pub use stats::{ScanReport, ScanStats};
