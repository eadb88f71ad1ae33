use dioxus::prelude::*;
use tracing::info;
use crate::Route;
use crate::backend::HttpApi;
use crate::backend::controller::{build_ui, MessageFormState, MessageList, PageContext, PageView};
use crate::backend::model::UploadUrls;
use crate::components::common::MessageContainer;

const DEFAULT_AVATAR: Asset = asset!("/assets/default-avatar.svg");

/// `/user-page.html?user=...`. Without a user there is nothing to show, so we go home.
#[component]
pub fn UserPageComponent(query: String) -> Element {
    match PageContext::from_query(&query) {
        Some(ctx) => {
            // keyed so moving to another user's page starts from a fresh load
            let key = ctx.user().to_string();
            rsx! { UserPage { key: "{key}", ctx } }
        }
        None => rsx! { RedirectHome {} },
    }
}

#[component]
fn RedirectHome() -> Element {
    use_effect(|| {
        info!("user page opened without ?user=, redirecting to /");
        let _ = navigator().replace(Route::HomeComponent {});
    });
    rsx! {}
}

/// Signals backing the regions `build_ui` fills in.
#[derive(Clone, Copy)]
struct UserPageSignals {
    avatar: Signal<Option<String>>,
    form: Signal<MessageFormState>,
    upload: Signal<Option<UploadUrls>>,
    messages: Signal<Option<MessageList>>,
}

impl PageView for UserPageSignals {
    fn show_avatar(&self, url: String) {
        let mut avatar = self.avatar;
        avatar.set(Some(url));
    }

    fn show_message_form(&self, form: MessageFormState) {
        let mut signal = self.form;
        signal.set(form);
    }

    fn show_upload_urls(&self, urls: UploadUrls) {
        let mut signal = self.upload;
        signal.set(Some(urls));
    }

    fn show_messages(&self, messages: MessageList) {
        let mut signal = self.messages;
        signal.set(Some(messages));
    }
}

/// Opens the file picker of the hidden avatar form.
fn replace_avatar() {
    let _ = document::eval("document.getElementById('updateAvatar').click();");
}

/// Posts the avatar form, but only once a file has actually been picked.
fn submit_avatar_if_chosen() {
    let _ = document::eval(r#"
        const input = document.getElementById('updateAvatar');
        if (input && input.files && input.files.length > 0) {
            document.getElementById('submit-picture').submit();
        }
    "#);
}

#[component]
fn UserPage(ctx: PageContext) -> Element {
    let api = use_context::<HttpApi>();

    let view = UserPageSignals {
        avatar: use_signal(|| None),
        form: use_signal(MessageFormState::default),
        upload: use_signal(|| None),
        messages: use_signal(|| None),
    };

    let ctx_load = ctx.clone();
    use_future(move || {
        let api = api.clone();
        let ctx = ctx_load.clone();
        async move {
            build_ui(&api, &ctx, &view).await;
        }
    });

    let user = ctx.user().to_string();
    let title = ctx.document_title();

    let avatar_src = view.avatar.read().clone().unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let form = view.form.read().clone();
    let clickable = form.avatar_clickable;
    let upload = view.upload.read().clone();
    let message_action = upload.as_ref().map(|u| u.message_form_action.clone());
    let avatar_action = upload.as_ref().and_then(|u| u.avatar_form_action.clone());
    let recipient = form.recipient.clone().unwrap_or_default();
    let messages = view.messages.read().clone();

    rsx! {
        document::Title { "{title}" }

        div { class: "page-container",
            div { class: "profile-header",
                img {
                    id: "myAvatar",
                    class: if clickable { "avatar clickable" } else { "avatar" },
                    src: "{avatar_src}",
                    alt: "{user}",
                    onclick: move |_| {
                        if clickable {
                            replace_avatar();
                        }
                    },
                }
                h1 { id: "page-title", "{user}" }
            }

            form {
                id: "submit-picture",
                class: "hidden",
                method: "POST",
                enctype: "multipart/form-data",
                action: avatar_action,
                input {
                    id: "updateAvatar",
                    r#type: "file",
                    name: "image",
                    accept: "image/*",
                    onchange: move |_| submit_avatar_if_chosen(),
                }
            }

            form {
                id: "message-form",
                class: if form.visible { "message-form" } else { "message-form hidden" },
                method: "POST",
                enctype: "multipart/form-data",
                action: message_action,
                p { "Post a message to {user}'s page:" }
                input {
                    id: "recipientInput",
                    r#type: "hidden",
                    name: "recipient",
                    value: "{recipient}",
                }
                textarea { name: "text", id: "message-input", placeholder: "Enter a new message" }
                input { r#type: "file", name: "image", accept: "image/*" }
                input { r#type: "submit", value: "Submit" }
            }

            MessageContainer { messages }
        }
    }
}
