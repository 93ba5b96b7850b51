//! Message rendering for the terminal.
//!
//! User-authored content has raw and escaped `<br>` variants stripped
//! before display so typed markup cannot fake message structure; assistant
//! content passes through with its formatting intact. Only the most recent
//! message gets a wall-clock stamp.

use coursebot_conversation::SessionState;
use coursebot_core::{ChatMessage, Role};

const BREAK_MARKUP: [&str; 6] = [
    "<br>",
    "<br/>",
    "<br />",
    "&lt;br&gt;",
    "&lt;br/&gt;",
    "&lt;br /&gt;",
];

/// Remove raw and escaped line-break markup from user-authored content.
#[must_use]
pub fn clean_user_content(content: &str) -> String {
    let mut cleaned = content.to_string();
    for markup in BREAK_MARKUP {
        cleaned = cleaned.replace(markup, "");
    }
    cleaned.trim().to_string()
}

/// Format one message for the terminal, with an optional `HH:MM` stamp.
#[must_use]
pub fn format_message(message: &ChatMessage, timestamp: Option<&str>) -> String {
    let (label, body) = match message.role {
        Role::User => ("You", clean_user_content(&message.content)),
        _ => ("Assistant", message.content.clone()),
    };

    timestamp.map_or_else(
        || format!("{label}:\n{body}"),
        |ts| format!("{label} [{ts}]:\n{body}"),
    )
}

/// Print the last `n` messages of the session; only the newest one carries
/// the timestamp.
pub fn print_tail(session: &SessionState, n: usize) {
    let now = chrono::Local::now().format("%H:%M").to_string();
    let count = session.message_count();

    for (i, message) in session
        .messages()
        .iter()
        .enumerate()
        .skip(count.saturating_sub(n))
    {
        let ts = (i + 1 == count).then_some(now.as_str());
        println!("\n{}", format_message(message, ts));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_raw_and_escaped_breaks() {
        let cleaned = clean_user_content("line<br>one<br/>two<br />  &lt;br&gt;&lt;br/&gt;&lt;br /&gt;end ");
        assert_eq!(cleaned, "lineonetwo  end");
    }

    #[test]
    fn assistant_formatting_passes_through() {
        let message = ChatMessage {
            role: Role::Assistant,
            content: "use <b>SARIMA</b><br>for seasonality".to_string(),
        };
        let rendered = format_message(&message, None);
        assert_eq!(rendered, "Assistant:\nuse <b>SARIMA</b><br>for seasonality");
    }

    #[test]
    fn timestamp_only_when_given() {
        let message = ChatMessage {
            role: Role::User,
            content: "hello<br>".to_string(),
        };
        assert_eq!(format_message(&message, None), "You:\nhello");
        assert_eq!(format_message(&message, Some("09:30")), "You [09:30]:\nhello");
    }
}
