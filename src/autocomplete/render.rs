//! Plain-text rendering of query answers.

/// Render the completions for `prefix` as the front end prints them.
///
/// An empty prefix renders nothing, an absent prefix renders
/// `"<prefix> not found"`, and otherwise each completion goes on its own line.
pub fn render_completions(prefix: &str, completions: Option<&[String]>) -> String {
    if prefix.is_empty() {
        return String::new();
    }

    match completions {
        Some(completions) => completions.join("\n"),
        None => format!("{prefix} not found"),
    }
}
