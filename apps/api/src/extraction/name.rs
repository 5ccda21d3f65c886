//! Candidate name heuristics.

/// The first non-empty line is taken as the name when it looks like one:
/// fewer than five words, no `@`, no digits. Otherwise the name is derived
/// from the local part of `email`, if there is one.
pub fn extract_name(lines: &[&str], email: Option<&str>) -> Option<String> {
    if let Some(candidate) = lines.first() {
        if looks_like_name(candidate) {
            return Some(candidate.to_string());
        }
    }
    email.and_then(name_from_email)
}

fn looks_like_name(line: &str) -> bool {
    line.split_whitespace().count() < 5
        && !line.contains('@')
        && !line.chars().any(|c| c.is_ascii_digit())
}

/// `john.doe_92@x.com` -> `JOHN DOE`
pub fn name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or_default();
    let cleaned: String = local
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| if matches!(c, '.' | '_' | '-') { ' ' } else { c })
        .collect();

    let name = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        None
    } else {
        Some(name.to_uppercase())
    }
}
