//! Shared text helpers.

/// Turns a snake_case identifier into a label: `high_risk` becomes `High Risk`.
///
/// Each word is lowercased after its first character, so `DETECTED` renders
/// as `Detected`.
pub fn title_case(input: &str) -> String {
    input
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates a string to at most `max_chars` characters, ending with an ellipsis.
///
/// Counts characters rather than bytes so multi-byte names are never split.
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
