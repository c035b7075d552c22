use sha1::{Digest, Sha1};

/// Derive the document identifier for a path stored on a service: SHA-1 over
/// `"<service>/<path>"`, lower-case hex encoded.
///
/// Deterministic for a given (service, path string) pair. The path is used
/// exactly as the walk produced it, so the same tree reached through a
/// different path spelling yields different identifiers.
pub fn doc_id(service: &str, path: &str) -> String {
    hex_digest(&format!("{}/{}", service, path))
}

pub fn hex_digest(input: &str) -> String {
    let digest = Sha1::digest(input.as_bytes());
    hex::encode(digest)
}
