use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::model::{LoginStatus, Message, Profile};
use super::{
    ClientConfig, PageError, IMAGE_UPLOAD_URL_PATH, LOGIN_STATUS_PATH, MESSAGES_PATH, PROFILE_PATH,
};

/// The four endpoints the user page reads from.
#[allow(async_fn_in_trait)]
pub trait UserPageApi {
    async fn login_status(&self) -> Result<LoginStatus, PageError>;

    /// Raw `/image-upload-url` payload, see [`super::model::UploadUrls::parse`].
    async fn image_upload_url(&self) -> Result<String, PageError>;

    async fn messages(&self, user: &str) -> Result<Vec<Message>, PageError>;

    /// `None` when the server has no profile stored for `user`.
    async fn profile(&self, user: &str) -> Result<Option<Profile>, PageError>;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_text(&self, endpoint: &'static str, url: Url) -> Result<String, PageError> {
        debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| PageError::Request { endpoint, source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PageError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        resp.text()
            .await
            .map_err(|source| PageError::Request { endpoint, source })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<T, PageError> {
        let body = self.get_text(endpoint, url).await?;
        serde_json::from_str(&body).map_err(|e| PageError::decode(endpoint, e.to_string()))
    }
}

// Clients are interchangeable when they talk to the same backend.
impl PartialEq for HttpApi {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl UserPageApi for HttpApi {
    async fn login_status(&self) -> Result<LoginStatus, PageError> {
        let url = self.config.endpoint(LOGIN_STATUS_PATH)?;
        self.get_json(LOGIN_STATUS_PATH, url).await
    }

    async fn image_upload_url(&self) -> Result<String, PageError> {
        let url = self.config.endpoint(IMAGE_UPLOAD_URL_PATH)?;
        self.get_text(IMAGE_UPLOAD_URL_PATH, url).await
    }

    async fn messages(&self, user: &str) -> Result<Vec<Message>, PageError> {
        let url = self.config.endpoint_for_user(MESSAGES_PATH, user)?;
        self.get_json(MESSAGES_PATH, url).await
    }

    async fn profile(&self, user: &str) -> Result<Option<Profile>, PageError> {
        let url = self.config.endpoint_for_user(PROFILE_PATH, user)?;
        self.get_json(PROFILE_PATH, url).await
    }
}
