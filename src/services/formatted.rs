use crate::domain::constants::{is_full_month_name, is_known_abbreviation, is_plausible_year};

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_quarter(s: &str) -> bool {
    matches!(s.as_bytes(), [b'Q', b'1'..=b'4'])
}

/// Starts upper-case, rest ASCII alphanumeric; or a known abbreviation.
fn is_cased_segment(s: &str) -> bool {
    if is_known_abbreviation(s) {
        return true;
    }
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Length of the recognized date suffix in segments, if any.
fn date_suffix_len(parts: &[&str]) -> Option<usize> {
    let n = parts.len();
    let last = parts[n - 1];
    if is_digits(last, 6) {
        return Some(1);
    }
    if n >= 3 && is_digits(parts[n - 2], 4) && (is_quarter(last) || is_full_month_name(last)) {
        return Some(2);
    }
    if is_plausible_year(last) {
        return Some(1);
    }
    None
}

/// Whether `stem` already follows `Source-Title-Date`.
pub fn is_already_formatted(stem: &str) -> bool {
    let parts: Vec<&str> = stem.split('-').collect();
    if parts.len() < 2 {
        return false;
    }
    let Some(suffix) = date_suffix_len(&parts) else {
        return false;
    };
    let prefix = &parts[..parts.len() - suffix];
    !prefix.is_empty() && prefix.iter().all(|p| is_cased_segment(p))
}
