use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Sequential depth-first traversal of `root`, yielding every entry that is
/// not a directory. Symlinks are not followed, so a link to a directory comes
/// out as a single entry like any other file. No filtering beyond the
/// directory skip; zero-byte and hidden files are included. Order is whatever
/// the filesystem hands back.
///
/// IO errors encountered mid-walk are yielded as `Err` entries so the caller
/// decides whether they end the run.
pub fn files(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter(|entry| match entry {
            Ok(entry) => !entry.file_type().is_dir(),
            Err(_) => true,
        })
}
