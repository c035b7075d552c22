use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::Error;
use crate::progress::ProgressReporter;
use crate::scanner;
use crate::stats::NameStats;
use crate::storage::models::FileDoc;
use crate::storage::{Service, SERVICE_NAME};

pub struct IndexEngine {
    service: Service,
    account: Option<String>,
}

#[derive(Debug)]
pub struct IndexReport {
    pub files_posted: usize,
    pub duplicate_names: usize,
    pub name_counts: HashMap<String, usize>,
    pub duration: Duration,
}

impl IndexEngine {
    pub fn new(service: Service) -> Self {
        Self {
            service,
            account: None,
        }
    }

    pub fn with_account(mut self, account: Option<String>) -> Self {
        self.account = account;
        self
    }

    /// Run the full indexing pipeline:
    /// 1. Walk the tree depth-first, skipping directories
    /// 2. Build and post one record per file, in walk order
    /// 3. Tally filename occurrences for the closing report
    ///
    /// The first walk or transport error ends the run; by then every file
    /// seen before it has already been posted.
    pub fn index(
        &self,
        root: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<IndexReport, Error> {
        if !root.exists() {
            return Err(Error::DirectoryNotFound(root.display().to_string()));
        }

        info!("Indexing {}", root.display());
        reporter.on_index_start();

        let start = Instant::now();
        let mut stats = NameStats::new();

        for entry in scanner::files(root) {
            let entry = entry?;
            let doc = FileDoc::from_path(SERVICE_NAME, self.account.as_deref(), entry.path());
            self.service.post(&doc)?;
            stats.record(&doc.filename);
            reporter.on_file_posted(stats.total(), entry.path());
        }

        let duration = start.elapsed();
        let files_posted = stats.total();
        let duplicate_names = stats.duplicates();
        debug!(
            "Index completed in {:.2}s, {} files, {} repeated names",
            duration.as_secs_f64(),
            files_posted,
            duplicate_names,
        );
        reporter.on_index_complete(files_posted, duration.as_secs_f64());

        Ok(IndexReport {
            files_posted,
            duplicate_names,
            name_counts: stats.into_counts(),
            duration,
        })
    }
}
