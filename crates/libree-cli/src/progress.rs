use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

use libree_core::ProgressReporter;

/// Prints one dot per ten files posted, with a line break every thousand,
/// so large runs stay visible without drowning the terminal.
pub struct DotReporter<W: Write> {
    out: Mutex<W>,
}

impl DotReporter<Stdout> {
    pub fn new() -> Self {
        DotReporter::to_writer(io::stdout())
    }
}

impl<W: Write> DotReporter<W> {
    pub fn to_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> ProgressReporter for DotReporter<W> {
    fn on_file_posted(&self, files_posted: usize, _path: &Path) {
        let mut out = self.out.lock().unwrap();
        if files_posted % 10 == 0 {
            let _ = out.write_all(b".");
            let _ = out.flush();
        }
        if files_posted % 1000 == 0 {
            let _ = out.write_all(b"\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(file_count: usize) -> String {
        let reporter = DotReporter::to_writer(Vec::new());
        for posted in 1..=file_count {
            reporter.on_file_posted(posted, Path::new("file"));
        }
        let out = reporter.out.into_inner().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_silent_below_ten_files() {
        assert_eq!(output_for(9), "");
    }

    #[test]
    fn test_dot_on_every_tenth_file() {
        assert_eq!(output_for(10), ".");
        assert_eq!(output_for(35), "...");
    }

    #[test]
    fn test_line_break_on_the_thousandth_file() {
        let output = output_for(1000);
        assert_eq!(output.matches('.').count(), 100);
        assert!(output.ends_with(".\n"));
    }
}
