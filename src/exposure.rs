//! Breach-exposure lookup via a k-anonymity range query.
//!
//! Only the first 5 hex characters of the password's SHA-1 digest leave the
//! machine; the server answers with every known suffix under that prefix and
//! the match is confirmed locally.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

const RANGE_API_BASE: &str = "https://api.pwnedpasswords.com/range";

/// Length of the digest prefix sent to the range endpoint.
const PREFIX_LEN: usize = 5;

/// Bounded wait on the range query; a hung server must not stall an analysis.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub(crate) enum ExposureError {
    #[error("range query failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("range query returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Queries a breach corpus for how often a password has been exposed.
#[derive(Clone, Debug)]
pub struct ExposureChecker {
    client: reqwest::Client,
    base_url: String,
}

impl ExposureChecker {
    pub fn new() -> Self {
        Self::with_base_url(RANGE_API_BASE)
    }

    /// Builds a checker against a custom range endpoint.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_parts(base_url.into(), REQUEST_TIMEOUT)
    }

    fn with_parts(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }

    /// Returns how many times the password appears in the breach corpus.
    ///
    /// Fail-open: any network error, non-2xx status or unparseable response
    /// degrades to 0 so the caller is never blocked. A count of 0 therefore
    /// means "not found or lookup failed" and the two are indistinguishable.
    pub async fn check_exposure(&self, password: &SecretString) -> u64 {
        match self.lookup(password).await {
            Ok(count) => count,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("exposure lookup failed, treating as not exposed: {}", _e);
                0
            }
        }
    }

    async fn lookup(&self, password: &SecretString) -> Result<u64, ExposureError> {
        let digest = hash_password(password.expose_secret());
        let (prefix, suffix) = digest.split_at(PREFIX_LEN);

        let url = format!("{}/{}", self.base_url, prefix);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ExposureError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(scan_range(&body, suffix))
    }
}

impl Default for ExposureChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// SHA-1 digest of the password, rendered as uppercase hex.
fn hash_password(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// Scans `SUFFIX:COUNT` lines for an exact suffix match.
///
/// Malformed lines are skipped and the scan continues; no match yields 0.
fn scan_range(body: &str, suffix: &str) -> u64 {
    for line in body.lines() {
        let Some((candidate, count)) = line.split_once(':') else {
            continue;
        };
        if candidate.trim() == suffix {
            if let Ok(count) = count.trim().parse() {
                return count;
            }
        }
    }
    0
}
