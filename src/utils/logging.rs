//! Logging utilities
//!
//! Helpers that keep user content and secrets out of the logs

/// Truncate a string with a note about original length
///
/// Counts characters, so multi-byte input is never split.
pub fn truncate_content(s: &str, max_len: usize) -> String {
    let total = s.chars().count();
    if total > max_len {
        let head: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", head, total - max_len)
    } else {
        s.to_string()
    }
}

/// Mask a secret, keeping only the last four characters
pub fn mask_secret(secret: Option<&str>) -> String {
    match secret {
        None => "<unset>".to_string(),
        Some(s) if s.chars().count() <= 4 => "****".to_string(),
        Some(s) => {
            let tail: String = s.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
            format!("****{}", tail)
        }
    }
}
