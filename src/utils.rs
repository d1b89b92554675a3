/// Collapses every run of whitespace into a single space and trims both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turns a user-supplied target into an absolute URL.
///
/// Targets without a scheme (`example.com/page`) are assumed to be plain HTTP.
pub fn normalize_target_url(target: &str) -> String {
    let target = target.trim();
    if target.contains("://") {
        target.to_string()
    } else {
        format!("http://{}", target.trim_start_matches('/'))
    }
}
