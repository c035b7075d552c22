use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::storage::models::FileDoc;

/// Store endpoint used when neither the flag nor the environment names one.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5984/libree";

/// Username used when the environment does not name one.
pub const DEFAULT_USERNAME: &str = "admin";

/// Blocking client for the document store. One instance is shared for the
/// whole run; the URL is validated once at construction so a bad endpoint
/// fails before any file is touched.
#[derive(Debug, Clone)]
pub struct Service {
    url: Url,
    username: String,
    password: String,
    client: Client,
}

impl Service {
    pub fn new(url: &str, username: &str, password: &str) -> Result<Self, Error> {
        let url = Url::parse(url)?;
        let client = Client::builder().build()?;

        Ok(Service {
            url,
            username: username.to_string(),
            password: password.to_string(),
            client,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Posts one record to the store with basic auth. Transport failures
    /// surface as errors; HTTP-level rejections (a conflict for an already
    /// indexed file, for instance) are noted and the run continues.
    pub fn post(&self, doc: &FileDoc) -> Result<(), Error> {
        let body = serde_json::to_vec(doc)?;

        let response = self
            .client
            .post(self.url.clone())
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            debug!("store returned {} for {}", status, doc.id);
        }

        Ok(())
    }
}
