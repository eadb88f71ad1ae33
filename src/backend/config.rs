use url::Url;

use super::PageError;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Where the page finds `/login-status`, `/messages` and friends.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, PageError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| PageError::Config(format!("invalid backend url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(PageError::Config(format!("'{}' cannot be used as a base url", base_url)));
        }
        // endpoints are joined relative to the base, so it has to look like a directory
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Build-time override first, then the page origin in the browser, then localhost.
    pub async fn resolve() -> Result<Self, PageError> {
        if let Some(url) = option_env!("USER_PAGE_BACKEND_URL") {
            return Self::new(url);
        }

        #[cfg(target_arch = "wasm32")]
        {
            let origin = dioxus::prelude::document::eval("return window.location.origin;")
                .await
                .map_err(|e| PageError::Config(format!("failed to read page origin: {:?}", e)))?;
            if let Some(origin) = origin.as_str() {
                return Self::new(origin);
            }
        }

        Self::new(DEFAULT_BACKEND_URL)
    }

    /// Joins an endpoint path onto the base, keeping any path prefix of the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, PageError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    pub fn endpoint_for_user(&self, path: &str, user: &str) -> Result<Url, PageError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut().append_pair("user", user);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_onto_origin() {
        let config = ClientConfig::new("https://portfolio.example").unwrap();
        assert_eq!(
            config.endpoint("/login-status").unwrap().as_str(),
            "https://portfolio.example/login-status"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_prefix() {
        let config = ClientConfig::new("http://localhost:8080/app").unwrap();
        assert_eq!(
            config.endpoint("/profile").unwrap().as_str(),
            "http://localhost:8080/app/profile"
        );
    }

    #[test]
    fn test_user_query_is_encoded() {
        let config = ClientConfig::new(DEFAULT_BACKEND_URL).unwrap();
        let url = config.endpoint_for_user("/messages", "a b&c@example.com").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/messages?user=a+b%26c%40example.com"
        );
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(matches!(ClientConfig::new("not a url"), Err(PageError::Config(_))));
        assert!(matches!(ClientConfig::new("mailto:x@example.com"), Err(PageError::Config(_))));
    }
}
