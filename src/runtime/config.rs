//! Application configuration.

use crate::error::BlogError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const SERVER_URL_VAR: &str = "HYPERMEDIA_SERVER_URL";
pub const MEDIA_TYPE_VAR: &str = "HYPERMEDIA_MEDIA_TYPE";
pub const ERROR_MEDIA_TYPE_VAR: &str = "HYPERMEDIA_ERROR_MEDIA_TYPE";
pub const PER_PAGE_VAR: &str = "HYPERMEDIA_PER_PAGE";
pub const MAX_PER_PAGE_VAR: &str = "HYPERMEDIA_MAX_PER_PAGE";

/// Settings of the blog application.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base of every URL written into documents.
    pub server_url: String,
    /// Media type used when a request does not ask for one.
    pub default_media_type: String,
    /// Media type of error documents when the requested one has no error format.
    pub error_media_type: String,
    pub default_per_page: usize,
    pub max_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            default_media_type: "application/hal+json".to_string(),
            error_media_type: "application/problem+json".to_string(),
            default_per_page: 30,
            max_per_page: 100,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, BlogError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| BlogError::Config(format!("{} has an invalid value `{}`", name, raw))),
        Err(_) => Ok(default),
    }
}

impl Config {
    /// Reads `HYPERMEDIA_*` variables, keeping the default of any that is unset.
    pub fn from_env() -> Result<Self, BlogError> {
        let defaults = Self::default();
        Self {
            server_url: parse_var(SERVER_URL_VAR, defaults.server_url)?,
            default_media_type: parse_var(MEDIA_TYPE_VAR, defaults.default_media_type)?,
            error_media_type: parse_var(ERROR_MEDIA_TYPE_VAR, defaults.error_media_type)?,
            default_per_page: parse_var(PER_PAGE_VAR, defaults.default_per_page)?,
            max_per_page: parse_var(MAX_PER_PAGE_VAR, defaults.max_per_page)?,
        }
        .validate()
    }

    pub fn from_json(json: &str) -> Result<Self, BlogError> {
        serde_json::from_str::<Self>(json)
            .map_err(|e| BlogError::Config(e.to_string()))?
            .validate()
    }

    fn validate(self) -> Result<Self, BlogError> {
        if self.default_per_page == 0 || self.max_per_page == 0 {
            return Err(BlogError::Config("page sizes must be positive".to_string()));
        }
        if self.default_per_page > self.max_per_page {
            return Err(BlogError::Config(format!(
                "default page size {} exceeds the maximum {}",
                self.default_per_page, self.max_per_page
            )));
        }
        Ok(self)
    }
}
