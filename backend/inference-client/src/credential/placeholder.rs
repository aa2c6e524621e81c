/// Detect common placeholder patterns in a credential value.
///
/// Returns the matched pattern name if detected.
pub fn detect_placeholder(key: &str) -> Option<&'static str> {
    let lower = key.trim().to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("your_api_key", "your_api_key"),
        ("your-api-key", "your-api-key"),
        ("<your", "<your...>"),
        ("xxx", "xxx"),
        ("placeholder", "placeholder"),
        ("changeme", "changeme"),
        ("replace", "replace"),
        ("dummy", "dummy"),
    ];

    for (pattern, name) in PATTERNS {
        if lower.contains(pattern) {
            return Some(name);
        }
    }

    if lower.starts_with('<') && lower.ends_with('>') {
        return Some("<...>");
    }

    None
}
