use std::path::Path;

/// Trait for reporting indexing progress.
///
/// The CLI implements the dot protocol on stdout; embedded and test callers
/// use [`SilentReporter`]. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    fn on_index_start(&self) {}
    fn on_file_posted(&self, _files_posted: usize, _path: &Path) {}
    fn on_index_complete(&self, _total_files: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
