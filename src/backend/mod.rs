pub mod api;
pub mod config;
pub mod controller;
pub mod model;

pub use api::{HttpApi, UserPageApi};
pub use config::ClientConfig;

use thiserror::Error;

pub const LOGIN_STATUS_PATH: &str = "/login-status";
pub const IMAGE_UPLOAD_URL_PATH: &str = "/image-upload-url";
pub const MESSAGES_PATH: &str = "/messages";
pub const PROFILE_PATH: &str = "/profile";

/// Everything that can go wrong between the page and its backend.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} answered with status {status}")]
    Status { endpoint: &'static str, status: u16 },

    /// Body arrived but is not what the endpoint promises
    #[error("could not decode {endpoint} response: {message}")]
    Decode { endpoint: &'static str, message: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl PageError {
    pub fn decode(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Decode {
            endpoint,
            message: message.into(),
        }
    }
}
