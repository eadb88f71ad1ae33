use tracing::{info, warn};
use url::form_urlencoded;

use super::api::UserPageApi;
use super::model::{LoginStatus, Message, UploadUrls, NO_POSTS_TEXT};
use super::PageError;

/// The `?user=` parameter, parsed once when the page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    user: String,
}

impl PageContext {
    /// `None` means the page has no owner and must redirect to `/`.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.trim_start_matches('?');
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "user")
            .map(|(_, value)| value.into_owned())
            .filter(|user| !user.is_empty())
            .map(|user| Self { user })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn document_title(&self) -> String {
        format!("{} - User Page", self.user)
    }
}

/// Query string (without `?`) that opens `user`'s page.
pub fn user_page_query(user: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("user", user)
        .finish()
}

/// What the viewer may do on this page, known as soon as login status arrives.
/// Form actions come later through [`PageView::show_upload_urls`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageFormState {
    pub visible: bool,
    pub recipient: Option<String>,
    pub avatar_clickable: bool,
}

impl MessageFormState {
    pub fn for_viewer(status: &LoginStatus, ctx: &PageContext) -> Self {
        if !status.is_logged_in {
            return Self::default();
        }
        Self {
            visible: true,
            recipient: Some(ctx.user().to_string()),
            avatar_clickable: status.is_viewing_own_page(ctx.user()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageList {
    Empty,
    Messages(Vec<Message>),
}

impl MessageList {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            MessageList::Empty => Some(NO_POSTS_TEXT),
            MessageList::Messages(_) => None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        match self {
            MessageList::Empty => &[],
            MessageList::Messages(messages) => messages,
        }
    }
}

impl From<Vec<Message>> for MessageList {
    fn from(messages: Vec<Message>) -> Self {
        if messages.is_empty() {
            MessageList::Empty
        } else {
            MessageList::Messages(messages)
        }
    }
}

/// Where [`build_ui`] puts its results. Each method owns a separate region of the page.
pub trait PageView {
    fn show_avatar(&self, url: String);
    fn show_message_form(&self, form: MessageFormState);
    fn show_upload_urls(&self, urls: UploadUrls);
    fn show_messages(&self, messages: MessageList);
}

pub async fn fetch_profile<A: UserPageApi>(
    api: &A,
    ctx: &PageContext,
) -> Result<Option<String>, PageError> {
    let profile = api.profile(ctx.user()).await?;
    Ok(profile.and_then(|p| p.avatar().map(str::to_string)))
}

pub async fn fetch_upload_urls<A: UserPageApi>(api: &A) -> Result<Option<UploadUrls>, PageError> {
    let payload = api.image_upload_url().await?;
    let urls = UploadUrls::parse(&payload);
    if urls.is_none() {
        warn!("/image-upload-url returned no urls");
    }
    Ok(urls)
}

/// Login status decides everything the viewer may do on this page. The form
/// is shown as soon as it arrives; upload urls are only requested afterwards,
/// and only for logged-in viewers. Logged-out viewers leave the view untouched.
pub async fn show_message_form_if_logged_in<A: UserPageApi, V: PageView>(
    api: &A,
    ctx: &PageContext,
    view: &V,
) -> Result<(), PageError> {
    let status = api.login_status().await?;
    let form = MessageFormState::for_viewer(&status, ctx);
    if !form.visible {
        return Ok(());
    }
    view.show_message_form(form);

    match fetch_upload_urls(api).await {
        Ok(Some(urls)) => view.show_upload_urls(urls),
        Ok(None) => {}
        Err(e) => warn!("failed to fetch upload urls: {}", e),
    }
    Ok(())
}

pub async fn fetch_messages<A: UserPageApi>(
    api: &A,
    ctx: &PageContext,
) -> Result<MessageList, PageError> {
    let messages = api.messages(ctx.user()).await?;
    Ok(MessageList::from(messages))
}

/// Runs the three independent fetches concurrently and hands each result to
/// `view` as soon as it arrives. Failed regions keep their initial content.
pub async fn build_ui<A: UserPageApi, V: PageView>(api: &A, ctx: &PageContext, view: &V) {
    info!("building user page for {}", ctx.user());

    let profile = async {
        match fetch_profile(api, ctx).await {
            Ok(Some(url)) => view.show_avatar(url),
            Ok(None) => {}
            Err(e) => warn!("failed to fetch profile: {}", e),
        }
    };

    let form = async {
        if let Err(e) = show_message_form_if_logged_in(api, ctx, view).await {
            warn!("failed to fetch login status: {}", e);
        }
    };

    let messages = async {
        match fetch_messages(api, ctx).await {
            Ok(list) => view.show_messages(list),
            Err(e) => warn!("failed to fetch messages: {}", e),
        }
    };

    futures::join!(profile, form, messages);
}
