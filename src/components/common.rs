use dioxus::prelude::*;
use crate::backend::controller::MessageList;
use crate::backend::model::Message;

/// One post on a user page: author and time on top, body below.
#[component]
pub fn MessageDiv(message: Message) -> Element {
    let header = message.header_line();
    // Message text is sanitized server side; it is the only markup we trust.
    let body = message.text.as_str().to_string();
    let image = message.image().map(str::to_string);

    rsx! {
        div { class: "message-div",
            div { class: "message-header", "{header}" }
            div { class: "message-body",
                div { dangerous_inner_html: "{body}" }
                if let Some(src) = image {
                    br {}
                    img { src: "{src}" }
                }
            }
        }
    }
}

/// `message-container`: loading text until the fetch lands, then the
/// placeholder or one `MessageDiv` per message in server order.
#[component]
pub fn MessageContainer(messages: Option<MessageList>) -> Element {
    let content = match messages {
        None => rsx! { p { "Loading..." } },
        Some(list) => match list.placeholder() {
            Some(text) => rsx! { p { "{text}" } },
            None => rsx! {
                for message in list.messages().iter().cloned() {
                    MessageDiv { message }
                }
            },
        },
    };

    rsx! {
        div { id: "message-container", {content} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::model::{TrustedHtml, NO_POSTS_TEXT};

    fn message(user: &str, timestamp: i64, text: &str, image: Option<&str>) -> Message {
        Message {
            id: None,
            user: user.to_string(),
            recipient: None,
            timestamp,
            text: TrustedHtml::new(text),
            image_url: image.map(str::to_string),
        }
    }

    fn render(messages: Option<MessageList>) -> String {
        dioxus_ssr::render_element(rsx! { MessageContainer { messages } })
    }

    #[test]
    fn test_message_div_renders_header_body_and_image() {
        let html = dioxus_ssr::render_element(rsx! {
            MessageDiv { message: message("alice", 0, "<ul><li>one</li></ul>", Some("https://img.example/a.png")) }
        });

        assert!(html.contains("alice - Thu Jan 01 1970 00:00:00 GMT+0000"));
        // trusted markup is inserted as-is, not escaped
        assert!(html.contains("<ul><li>one</li></ul>"));
        assert!(!html.contains("&lt;ul&gt;"));
        assert!(html.contains("<br"));
        assert!(html.contains("src=\"https://img.example/a.png\""));
    }

    #[test]
    fn test_messages_render_in_order_with_optional_image() {
        let list = MessageList::from(vec![
            message("carol", 3_000, "third post", None),
            message("alice", 1_000, "first post", Some("https://img.example/x.png")),
            message("bob", 2_000, "second post", None),
        ]);

        let html = render(Some(list));

        assert_eq!(html.matches("class=\"message-div\"").count(), 3);
        assert_eq!(html.matches("<img").count(), 1);
        assert!(!html.contains(NO_POSTS_TEXT));

        let third = html.find("third post").unwrap();
        let first = html.find("first post").unwrap();
        let second = html.find("second post").unwrap();
        assert!(third < first && first < second);

        let image = html.find("https://img.example/x.png").unwrap();
        assert!(first < image && image < second);
        assert!(html.contains("carol - Thu Jan 01 1970 00:00:03 GMT+0000"));
    }

    #[test]
    fn test_no_messages_shows_placeholder_only() {
        let html = render(Some(MessageList::Empty));

        assert!(html.contains(NO_POSTS_TEXT));
        assert!(!html.contains("message-div"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_loading_before_messages_arrive() {
        let html = render(None);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("message-div"));
    }
}
