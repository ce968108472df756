use crate::domain::constants::{is_stop_word, KNOWN_ABBREVIATIONS};
use crate::domain::models::{Confidence, SourceMatch};
use regex::Regex;
use std::sync::LazyLock;

type SourceMatcher = fn(&str) -> Option<SourceMatch>;

/// Abbreviations are unambiguous and must be tried before the name heuristics.
const SOURCE_MATCHERS: &[(&str, SourceMatcher)] = &[
    ("abbreviation", match_abbreviation),
    ("given_family", match_given_family),
    ("cased_pair", match_cased_pair),
];

static GIVEN_FAMILY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)_([A-Za-z]+)").expect("valid name regex"));

static CASED_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+)([A-Z][a-z]+)(?:-|$)").expect("valid cased pair regex")
});

static PERSON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+[A-Z][a-z]+$").expect("valid person name regex"));

static ABBREVIATIONS_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut all = KNOWN_ABBREVIATIONS.to_vec();
    all.sort_by_key(|a| std::cmp::Reverse(a.len()));
    all
});

pub fn extract_source(stem: &str) -> Option<SourceMatch> {
    SOURCE_MATCHERS.iter().find_map(|(name, matcher)| {
        let found = matcher(stem);
        if let Some(m) = &found {
            tracing::trace!(matcher = *name, value = %m.value, "source matched");
        }
        found
    })
}

/// First letter upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// The `FamilyGiven` shape produced by both name matchers.
pub fn is_cased_person_name(source: &str) -> bool {
    PERSON_NAME.is_match(source)
}

fn match_abbreviation(stem: &str) -> Option<SourceMatch> {
    let upper = stem.to_uppercase();
    ABBREVIATIONS_LONGEST_FIRST
        .iter()
        .find(|abbr| {
            upper.starts_with(**abbr)
                && upper[abbr.len()..]
                    .chars()
                    .next()
                    .map_or(true, |c| !c.is_alphabetic())
        })
        .map(|abbr| SourceMatch {
            value: abbr.to_string(),
            confidence: Confidence::High,
        })
}

fn match_given_family(stem: &str) -> Option<SourceMatch> {
    let caps = GIVEN_FAMILY.captures(stem)?;
    let (given, family) = (&caps[1], &caps[2]);
    let plausible = |w: &str| w.len() >= 3 && !is_stop_word(w);
    if !plausible(given) || !plausible(family) {
        return None;
    }
    Some(SourceMatch {
        value: format!("{}{}", capitalize(family), capitalize(given)),
        confidence: Confidence::Medium,
    })
}

fn match_cased_pair(stem: &str) -> Option<SourceMatch> {
    let caps = CASED_PAIR.captures(stem)?;
    let (first, second) = (&caps[1], &caps[2]);
    if is_stop_word(first) || is_stop_word(second) {
        return None;
    }
    Some(SourceMatch {
        value: format!("{first}{second}"),
        confidence: Confidence::High,
    })
}
