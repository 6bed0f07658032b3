//! HTML pages of the thread service.

use forum_client::UpstreamError;
use forum_service::html::escape;
use forum_types::Message;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f4f5f7; margin: 0; }
main { max-width: 42rem; margin: 3rem auto; }
.message { background: #fff; padding: 1rem 1.25rem; border-radius: 8px; margin-bottom: .75rem; }
.meta { color: #5f6b7a; font-size: .85rem; }
.content { white-space: pre-wrap; margin: .5rem 0 0; }
.notice { background: #fdecea; color: #8a1c13; padding: .75rem 1rem; border-radius: 4px; }
.empty { color: #5f6b7a; }
"#;

fn render_message(message: &Message) -> String {
    format!(
        r#"<article class="message" id="message-{id}">
<div class="meta"><strong>{username}</strong> &middot; <time datetime="{iso}">{display}</time></div>
<p class="content">{content}</p>
</article>"#,
        id = escape(&message.id),
        username = escape(&message.username),
        iso = forum_types::timestamp::format(&message.created_at),
        display = message.created_at.format("%Y-%m-%d %H:%M UTC"),
        content = escape(&message.content),
    )
}

/// The thread page. `Err` renders an in-page notice in place of the list.
pub fn render_thread(messages: Result<&[Message], &UpstreamError>) -> String {
    let body = match messages {
        Ok([]) => r#"<p class="empty">No messages yet.</p>"#.to_string(),
        Ok(messages) => messages
            .iter()
            .map(render_message)
            .collect::<Vec<_>>()
            .join("\n"),
        Err(e) if e.is_unavailable() => {
            r#"<p class="notice" role="alert">The storage service is unavailable, messages cannot be shown right now.</p>"#
                .to_string()
        }
        Err(_) => {
            r#"<p class="notice" role="alert">The messages could not be loaded. Please try again later.</p>"#
                .to_string()
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Forum - messages</title>
<style>{style}</style>
</head>
<body>
<main>
<h1>Latest messages</h1>
<p><a href="/">Refresh</a> &middot; <a href="/messages">JSON</a></p>
<section id="messages">
{body}
</section>
</main>
</body>
</html>
"#,
        style = STYLE,
        body = body,
    )
}

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Not found</title></head>
<body><main><h1>Page not found</h1><p>Nothing lives at <code>{}</code>. <a href="/">Back to the messages</a></p></main></body>
</html>
"#,
        escape(path)
    )
}
