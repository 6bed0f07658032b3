//! HTML pages of the sender service.

use forum_service::html::escape;
use forum_types::{Field, ValidationError};

use crate::submission::Outcome;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f4f5f7; margin: 0; }
main { max-width: 36rem; margin: 3rem auto; background: #fff; padding: 2rem; border-radius: 8px; }
label { display: block; margin-top: 1rem; font-weight: 600; }
input, textarea { width: 100%; box-sizing: border-box; padding: .5rem; margin-top: .25rem; }
button { margin-top: 1.25rem; padding: .6rem 1.4rem; }
.notice { padding: .75rem 1rem; border-radius: 4px; }
.notice.success { background: #e3f6e8; color: #17612e; }
.notice.error { background: #fdecea; color: #8a1c13; }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Everything the form page shows.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub notice: Option<Notice>,
    pub username: String,
    pub content: String,
    pub thread_url: Option<String>,
}

impl FormView {
    pub fn blank(thread_url: Option<String>) -> Self {
        Self {
            thread_url,
            ..Self::default()
        }
    }

    /// View after a submission. Entered values are kept unless the message was stored.
    pub fn after(outcome: &Outcome, username: &str, content: &str, thread_url: Option<String>) -> Self {
        let (kind, text, keep_values) = match outcome {
            Outcome::Rejected(problems) => (NoticeKind::Error, required_notice(problems), true),
            Outcome::Stored(message) => (
                NoticeKind::Success,
                format!("Message sent. Thanks, {}!", message.username),
                false,
            ),
            Outcome::Refused(reason) => (
                NoticeKind::Error,
                format!("The message was refused: {}.", reason),
                true,
            ),
            Outcome::Failed(e) if e.is_unavailable() => (
                NoticeKind::Error,
                "The storage service is unavailable, your message was not sent. Please try again later."
                    .to_string(),
                true,
            ),
            Outcome::Failed(_) => (
                NoticeKind::Error,
                "The storage service could not save your message. Please try again later.".to_string(),
                true,
            ),
        };

        let (username, content) = if keep_values {
            (username.to_string(), content.to_string())
        } else {
            (String::new(), String::new())
        };

        Self {
            notice: Some(Notice { kind, text }),
            username,
            content,
            thread_url,
        }
    }
}

fn required_notice(problems: &[ValidationError]) -> String {
    let username = problems.iter().any(|p| p.field() == Field::Username);
    let content = problems.iter().any(|p| p.field() == Field::Content);

    match (username, content) {
        (true, false) => "The username is required.".to_string(),
        (false, true) => "The message content is required.".to_string(),
        _ => "Username and content are required.".to_string(),
    }
}

pub fn render_form(view: &FormView) -> String {
    let notice = view
        .notice
        .as_ref()
        .map(|notice| {
            format!(
                r#"<p class="notice {}" role="status">{}</p>"#,
                notice.kind.class(),
                escape(&notice.text)
            )
        })
        .unwrap_or_default();

    let thread_link = view
        .thread_url
        .as_deref()
        .map(|url| format!(r#"<p><a href="{}">Read the messages</a></p>"#, escape(url)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Forum - new message</title>
<style>{style}</style>
</head>
<body>
<main>
<h1>Post a message</h1>
{notice}
<form method="post" action="/send">
<label for="username">Username</label>
<input id="username" name="username" type="text" maxlength="100" value="{username}">
<label for="content">Message</label>
<textarea id="content" name="content" rows="6">{content}</textarea>
<button type="submit">Send</button>
</form>
{thread_link}
</main>
</body>
</html>
"#,
        style = STYLE,
        notice = notice,
        username = escape(&view.username),
        content = escape(&view.content),
        thread_link = thread_link,
    )
}

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Not found</title></head>
<body><main><h1>Page not found</h1><p>Nothing lives at <code>{}</code>. <a href="/">Back to the form</a></p></main></body>
</html>
"#,
        escape(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_has_named_controls() {
        let html = render_form(&FormView::blank(None));

        assert!(html.contains(r#"<form method="post" action="/send">"#));
        assert!(html.contains(r#"name="username""#));
        assert!(html.contains(r#"name="content""#));
        assert!(!html.contains(r#"role="status""#));
    }

    #[test]
    fn test_rejection_mentions_required_and_keeps_values() {
        let outcome = Outcome::Rejected(vec![ValidationError::Empty(Field::Content)]);
        let html = render_form(&FormView::after(&outcome, "Alice", "", None));

        assert!(html.contains("The message content is required."));
        assert!(html.contains(r#"value="Alice""#));
    }

    #[test]
    fn test_both_fields_missing() {
        let outcome = Outcome::Rejected(vec![
            ValidationError::Missing(Field::Username),
            ValidationError::Missing(Field::Content),
        ]);
        let view = FormView::after(&outcome, "", "", None);

        assert_eq!(view.notice.unwrap().text, "Username and content are required.");
    }

    #[test]
    fn test_user_input_is_escaped() {
        let outcome = Outcome::Refused("content must not be empty".to_string());
        let html = render_form(&FormView::after(&outcome, "<b>bob</b>", "\"quoted\"", None));

        assert!(html.contains("&lt;b&gt;bob&lt;/b&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(!html.contains("<b>bob</b>"));
    }

    #[test]
    fn test_thread_link() {
        let html = render_form(&FormView::blank(Some("http://localhost:3002".to_string())));
        assert!(html.contains(r#"<a href="http://localhost:3002">"#));
    }
}
