//! Output helpers shared by the command handlers

/// Width of section header rules
const RULE_WIDTH: usize = 50;

pub(crate) fn print_header(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("{}", title);
    println!("{}", rule);
}

/// Category emoji for a document type
pub(crate) fn type_emoji(doc_type: &str) -> &'static str {
    match doc_type {
        "prompt" => "📝",
        "response" => "💬",
        _ => "📄",
    }
}

/// Single-line content preview: at most `max_chars` characters plus an
/// ellipsis marker when truncated, newlines flattened to spaces
pub(crate) fn preview(content: &str, max_chars: usize) -> String {
    let mut out: String = content.chars().take(max_chars).collect();
    if content.chars().count() > max_chars {
        out.push_str("...");
    }
    out.replace('\n', " ")
}

/// First 8 characters of a session id (the list view appends its own
/// ellipsis marker)
pub(crate) fn short_session(session_id: &str) -> String {
    session_id.chars().take(8).collect()
}

/// Session label for tallies, ids longer than 12 characters truncated
pub(crate) fn session_label(session_id: &str) -> String {
    if session_id.chars().count() > 12 {
        let head: String = session_id.chars().take(12).collect();
        format!("{}...", head)
    } else {
        session_id.to_string()
    }
}
