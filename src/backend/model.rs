use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown in `message-container` when the user has not posted.
pub const NO_POSTS_TEXT: &str = "This user has no posts yet.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Avatar to show; an empty URL counts as missing.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginStatus {
    pub is_logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl LoginStatus {
    pub fn is_viewing_own_page(&self, parameter_user: &str) -> bool {
        self.is_logged_in && self.username.as_deref() == Some(parameter_user)
    }
}

/// Message markup as sent by the server.
///
/// The server sanitizes message text before storing it, so this is the one
/// string the page inserts as raw HTML. Everything else goes through normal
/// (escaped) text rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: Option<String>,
    pub user: String,
    #[serde(default)]
    pub recipient: Option<String>,
    pub timestamp: i64, // epoch millis
    pub text: TrustedHtml,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Message {
    /// Header line: `"<author> - <timestamp>"`.
    pub fn header_line(&self) -> String {
        format!("{} - {}", self.user, format_timestamp(self.timestamp))
    }

    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Formats epoch milliseconds the way a browser prints a `Date`, pinned to UTC.
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(time) => time.format("%a %b %d %Y %H:%M:%S GMT+0000").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// Form actions handed out by `/image-upload-url`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadUrls {
    pub message_form_action: String,
    pub avatar_form_action: Option<String>,
}

impl UploadUrls {
    /// Payload is `"<message url> <avatar url>"`. The first token always goes
    /// to the message form, the last one to the avatar form.
    pub fn parse(payload: &str) -> Option<Self> {
        let tokens: Vec<&str> = payload.split_whitespace().collect();
        let first = tokens.first()?;
        let avatar = if tokens.len() >= 2 {
            tokens.last().map(|url| url.to_string())
        } else {
            None
        };

        Some(Self {
            message_form_action: first.to_string(),
            avatar_form_action: avatar,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_urls_first_and_last_token() {
        let urls = UploadUrls::parse("https://a.example ignored https://b.example").unwrap();
        assert_eq!(urls.message_form_action, "https://a.example");
        assert_eq!(urls.avatar_form_action.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn test_upload_urls_two_tokens_with_messy_whitespace() {
        let urls = UploadUrls::parse("  /upload/msg \n\t /upload/avatar\n").unwrap();
        assert_eq!(urls.message_form_action, "/upload/msg");
        assert_eq!(urls.avatar_form_action.as_deref(), Some("/upload/avatar"));
    }

    #[test]
    fn test_upload_urls_single_or_empty() {
        let urls = UploadUrls::parse("/upload/msg").unwrap();
        assert_eq!(urls.avatar_form_action, None);
        assert!(UploadUrls::parse("   ").is_none());
    }

    #[test]
    fn test_message_from_server_json() {
        let json = r#"{
            "id": "8d1c",
            "user": "alice@example.com",
            "recipient": "bob@example.com",
            "timestamp": 1571227200000,
            "text": "<b>hi</b>",
            "imageUrl": "https://img.example/1.png"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.text.as_str(), "<b>hi</b>");
        assert_eq!(message.image(), Some("https://img.example/1.png"));
        assert_eq!(
            message.header_line(),
            "alice@example.com - Wed Oct 16 2019 12:00:00 GMT+0000"
        );
    }

    #[test]
    fn test_message_without_optional_fields() {
        let json = r#"{"user": "carol", "timestamp": 0, "text": "plain"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, None);
        assert_eq!(message.image(), None);
        assert_eq!(format_timestamp(0), "Thu Jan 01 1970 00:00:00 GMT+0000");
    }

    #[test]
    fn test_login_status_own_page() {
        let status: LoginStatus =
            serde_json::from_str(r#"{"isLoggedIn": true, "username": "dave"}"#).unwrap();
        assert!(status.is_viewing_own_page("dave"));
        assert!(!status.is_viewing_own_page("erin"));

        let logged_out: LoginStatus = serde_json::from_str(r#"{"isLoggedIn": false}"#).unwrap();
        assert!(!logged_out.is_viewing_own_page("dave"));
    }

    #[test]
    fn test_profile_empty_avatar_is_absent() {
        let profile: Profile = serde_json::from_str(r#"{"avatarUrl": ""}"#).unwrap();
        assert_eq!(profile.avatar(), None);
        let profile: Profile = serde_json::from_str(r#"{"avatarUrl": " "}"#).unwrap();
        assert_eq!(profile.avatar(), Some(" "));
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.avatar(), None);
    }
}
