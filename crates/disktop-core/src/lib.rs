/// disktop Core — concurrent tree walk, statistics, and top-N selection.
///
/// This crate contains all scanning logic with zero console dependencies.
/// Rendering lives in `disktop-cli`.
///
/// # Modules
///
/// - [`model`] — File entries, scan statistics, and size formatting.
/// - [`scanner`] — Bounded-parallel directory walker and its configuration.
/// - [`analysis`] — The shared largest-files selector.
/// - [`platform`] — Per-target file size resolution.
/// - [`error`] — Library error type.
pub mod analysis;
pub mod error;
pub mod model;
pub mod platform;
pub mod scanner;

pub use error::ScanError;
pub use model::{FileEntry, ScanReport, ScanStats};
pub use scanner::{scan, scan_with_resolver, ScanConfig};
