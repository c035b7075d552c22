use std::path::Path;

use serde::Serialize;

use crate::docid;

/// Storage backend name baked into every document and its identifier.
pub const SERVICE_NAME: &str = "mega";

/// Document type discriminator stored alongside each file record.
pub const DOC_TYPE_FILE: &str = "file";

/// Where the file content itself lives. Only metadata is indexed here.
#[derive(Debug, Clone, Serialize)]
pub struct Storage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    pub service: String,
}

/// One file's metadata record, shaped for the document store.
///
/// The `id` doubles as the store's primary key and is derived from the
/// service name and relative path, so re-indexing the same tree produces
/// the same identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct FileDoc {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "docType")]
    pub doc_type: String,
    #[serde(rename = "basePath")]
    pub base_path: String,
    pub filename: String,
    pub ext: String,
    pub storage: Storage,
}

impl FileDoc {
    /// Builds the record for one walked path. Non-UTF-8 path segments are
    /// replaced lossily, which keeps the identifier stable for a given
    /// byte sequence.
    pub fn from_path(service: &str, account: Option<&str>, path: &Path) -> Self {
        let full_path = path.to_string_lossy();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        FileDoc {
            id: docid::doc_id(service, &full_path),
            doc_type: DOC_TYPE_FILE.to_string(),
            base_path: base_path(path),
            filename,
            ext: file_extension(path),
            storage: Storage {
                account: account.map(str::to_string),
                service: service.to_string(),
            },
        }
    }
}

/// Directory portion of the path, or `.` when there is none.
fn base_path(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().into_owned()
        }
        _ => ".".to_string(),
    }
}

/// Extension including the leading dot, taken from the last dot in the
/// final path segment. A dotfile like `.bashrc` is all extension; a name
/// with no dot has none.
fn file_extension(path: &Path) -> String {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match filename.rfind('.') {
        Some(index) => filename[index..].to_string(),
        None => String::new(),
    }
}
