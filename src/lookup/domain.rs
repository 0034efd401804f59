//! Domain-name checks against the Public Suffix List.

use crate::config::MAX_DOMAIN_LENGTH;
use crate::error_handling::LookupError;

const MAX_LABEL_LENGTH: usize = 63;

/// Lowercases `name` and drops one trailing root dot.
pub fn normalize_domain(name: &str) -> String {
    let name = name.trim();
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// Validates `name` as a queryable domain.
///
/// The name must be syntactically valid (labels of 1 to 63 letters, digits,
/// hyphens or underscores, no label starting or ending with a hyphen) and
/// must sit under a suffix known to the Public Suffix List with a registrable
/// part of its own. A bare public suffix such as `co.uk` is rejected.
///
/// Returns the normalized name.
pub fn validate_domain(name: &str) -> Result<String, LookupError> {
    let normalized = normalize_domain(name);
    let invalid = || LookupError::InvalidDomain(name.to_string());

    if normalized.is_empty() || normalized.len() > MAX_DOMAIN_LENGTH {
        return Err(invalid());
    }
    if !normalized.split('.').all(valid_label) {
        return Err(invalid());
    }

    match psl::domain(normalized.as_bytes()) {
        Some(domain) if domain.suffix().is_known() => Ok(normalized),
        _ => Err(invalid()),
    }
}

/// Registrable domain of `name` (`www.example.co.uk` -> `example.co.uk`).
pub fn registrable_domain(name: &str) -> Option<String> {
    let normalized = normalize_domain(name);
    psl::domain_str(&normalized).map(str::to_string)
}

fn valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
