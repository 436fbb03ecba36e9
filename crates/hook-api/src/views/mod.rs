//! HTML views
//!
//! Server-rendered pages: the welcome banner, the static table of recent
//! events, and the live dashboard that polls `/webhook/events`.

use std::fmt::Write;

use hook_service::EventResponse;

/// Page served at `/`
pub const WELCOME_PAGE: &str = "<h1>Welcome to the GitHub Webhook Dashboard</h1>\
<p>Use /webhook/ui to view events.</p>";

/// Page served at `/webhook/ui`
pub const DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>GitHub Webhook Events</title>
    <style>
        body { font-family: Arial; padding: 20px; background: #f4f4f4; }
        .event { background: white; margin: 10px 0; padding: 10px; border-left: 5px solid #007BFF; }
    </style>
</head>
<body>
    <h2>Recent GitHub Events</h2>
    <div id="event-list">Loading...</div>

    <script>
        function escapeHtml(value) {
            return String(value ?? '')
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/"/g, '&quot;')
                .replace(/'/g, '&#x27;');
        }

        function describe(event) {
            const author = escapeHtml(event.author);
            const from = escapeHtml(event.from_branch);
            const to = escapeHtml(event.to_branch);
            const time = escapeHtml(new Date(event.timestamp).toLocaleString());
            switch (event.action) {
                case "PUSH":
                    return `<b>${author}</b> pushed to <b>${to}</b> at ${time}`;
                case "PULL_REQUEST":
                    return `<b>${author}</b> opened a PR from <b>${from}</b> to <b>${to}</b> at ${time}`;
                case "MERGE":
                    return `<b>${author}</b> merged <b>${from}</b> to <b>${to}</b> at ${time}`;
                default:
                    return null;
            }
        }

        async function loadEvents() {
            const res = await fetch('/webhook/events');
            const data = await res.json();
            document.getElementById('event-list').innerHTML = data
                .map(describe)
                .filter(line => line !== null)
                .map(line => `<div class="event">${line}</div>`)
                .join('');
        }

        loadEvents();
        setInterval(loadEvents, 15000);
    </script>
</body>
</html>
"#;

/// Render the `/webhook/` table page
///
/// Missing values render as empty cells. Every value is HTML-escaped.
pub fn render_event_table(events: &[EventResponse]) -> String {
    let mut rows = String::new();
    for event in events {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&event.author),
            escape(event.action.as_str()),
            escape(event.from_branch.as_deref().unwrap_or_default()),
            escape(&event.to_branch),
            escape(&event.timestamp),
        );
    }

    format!(
        r#"
    <h1>Welcome to the GitHub Webhook Dashboard</h1>
    <p>Showing the latest 10 events:</p>
    <table border="1" cellpadding="5" cellspacing="0">
        <tr><th>Author</th><th>Action</th><th>From Branch</th><th>To Branch</th><th>Timestamp</th></tr>
        {rows}
    </table>
    <p>For a live dashboard, visit <a href="/webhook/ui">/webhook/ui</a>.</p>
    "#
    )
}

/// Minimal HTML text escaping
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
