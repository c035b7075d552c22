pub mod models;
pub mod service;

pub use models::{FileDoc, Storage, DOC_TYPE_FILE, SERVICE_NAME};
pub use service::{Service, DEFAULT_SERVICE_URL, DEFAULT_USERNAME};
