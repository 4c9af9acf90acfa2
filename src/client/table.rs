use crate::api::Envelope;
use std::fmt::Write;

/// Renders a successful response as the status line plus, if there is content,
/// a `Hostname URL Target` table sorted by hostname and url.
pub fn render(envelope: &Envelope) -> String {
    let mut out = format!("Operation successful ({})\n\n", envelope.message);

    let mut rows = envelope.content.as_deref().unwrap_or_default().to_vec();
    if rows.is_empty() {
        return out;
    }
    rows.sort_by(|a, b| (&a.hostname, &a.url).cmp(&(&b.hostname, &b.url)));

    let mut line = |hostname: &str, url: &str, target: &str| {
        let _ = writeln!(out, "{:<30} {:<10} {}", hostname, url, target);
    };
    line("Hostname", "URL", "Target");
    line("--------", "---", "------");
    for r in &rows {
        line(&r.hostname, &r.url, &r.target);
    }
    out.push('\n');
    out
}
