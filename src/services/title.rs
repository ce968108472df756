use crate::domain::constants::{is_known_abbreviation, is_plausible_year, MONTHS};
use crate::domain::models::{Confidence, TitleMatch};
use crate::services::source::{capitalize, is_cased_person_name};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").expect("valid separator regex"));

static INSIGNIFICANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_()\[\]]+").expect("valid insignificant regex"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

static WORD_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]+[_\-][a-z]+").expect("valid word pair regex"));

/// Raw date shapes removed from the title, in the same order the date
/// extractor recognizes them. Month forms keep the guard character they
/// consumed in group 1.
static DATE_SHAPES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let mut tokens: Vec<&str> = MONTHS.iter().map(|(token, _)| *token).collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let months = tokens.join("|");
    [
        r"[0-9]{4}[-/][0-9]{1,2}[-/][0-9]{1,2}".to_string(),
        r"[0-9]{1,2}[-/][0-9]{1,2}[-/][0-9]{4}".to_string(),
        r"(?i)q[1-4][\s\-_]*[0-9]{4}".to_string(),
        r"(?i)[0-9]{4}[\s\-_]*q[1-4]".to_string(),
        format!(r"(?i)(^|[^a-z])(?:{months})[\s\-_]*[0-9]{{4}}"),
        format!(r"(?i)[0-9]{{4}}[\s\-_]*(?:{months})($|[^a-z])"),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid date shape regex"))
    .collect()
});

pub fn extract_title(stem: &str, source: Option<&str>, date: Option<&str>) -> Option<TitleMatch> {
    let mut name = stem.to_string();

    if let Some(src) = source.filter(|s| !s.is_empty()) {
        name = strip_leading_source(&name, src);
    }

    name = strip_date_shapes(&name);

    if source.is_some_and(is_cased_person_name) {
        name = WORD_PAIR.replace_all(&name, "").into_owned();
    }

    let name = SEPARATORS.replace_all(&name, " ").trim().to_string();
    if name.is_empty() {
        return None;
    }

    let significant = INSIGNIFICANT.replace_all(&name, "");
    if significant.chars().count() < 2 || significant.chars().all(|c| c.is_ascii_digit()) {
        tracing::trace!(stem, ?date, remainder = %name, "title too thin");
        return None;
    }

    Some(TitleMatch {
        value: to_cased_phrase(&name),
        confidence: Confidence::High,
    })
}

/// Capitalizes each separator-delimited word and joins them without
/// separators. Known abbreviations stay fully upper-cased.
pub fn to_cased_phrase(text: &str) -> String {
    if is_known_abbreviation(text) {
        return text.to_uppercase();
    }
    SEPARATORS
        .split(text)
        .filter(|w| !w.is_empty())
        .map(|w| {
            if is_known_abbreviation(w) {
                w.to_uppercase()
            } else {
                capitalize(w)
            }
        })
        .collect()
}

fn strip_leading_source(name: &str, source: &str) -> String {
    let pattern = format!(r"(?i)^{}[\s\-_]*", regex::escape(source));
    match Regex::new(&pattern) {
        Ok(re) => re.replace(name, "").into_owned(),
        Err(_) => name.to_string(),
    }
}

fn strip_date_shapes(name: &str) -> String {
    let mut out = name.to_string();
    for re in DATE_SHAPES.iter() {
        out = re
            .replace_all(&out, |caps: &Captures| {
                caps.get(1).map_or(String::new(), |g| g.as_str().to_string())
            })
            .into_owned();
    }
    DIGIT_RUN
        .replace_all(&out, |caps: &Captures| {
            let run = &caps[0];
            if run.len() == 8 || is_plausible_year(run) {
                String::new()
            } else {
                run.to_string()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(stem: &str, source: Option<&str>) -> Option<String> {
        extract_title(stem, source, None).map(|t| t.value)
    }

    #[test]
    fn name_pair_is_stripped_for_person_sources() {
        assert_eq!(
            title("john_smith_invoice_2024-03-15", Some("SmithJohn")),
            Some("Invoice".to_string())
        );
        assert_eq!(
            title("John_Smith_Invoice_2024-03-15", Some("SmithJohn")),
            Some("Invoice".to_string())
        );
    }

    #[test]
    fn every_word_pair_is_dropped_after_a_person_source() {
        assert_eq!(title("SmithJohn-Market-Report_2024", Some("SmithJohn")), None);
        assert_eq!(title("John_Smith_Annual_Report_2024", Some("SmithJohn")), None);
        assert_eq!(title("Mary_Jones_Tax_Return_2023", Some("JonesMary")), None);
    }

    #[test]
    fn single_words_survive_a_person_source() {
        assert_eq!(
            title("jane_doe_resume", Some("DoeJane")),
            Some("Resume".to_string())
        );
    }

    #[test]
    fn word_pairs_are_kept_without_a_person_source() {
        assert_eq!(
            title("BCG_market-analysis_2024", Some("BCG")),
            Some("MarketAnalysis".to_string())
        );
    }

    #[test]
    fn leading_source_is_removed_case_insensitively() {
        assert_eq!(
            title("bcg_market_analysis_2024", Some("BCG")),
            Some("MarketAnalysis".to_string())
        );
    }

    #[test]
    fn every_date_shape_is_removed() {
        assert_eq!(
            title("plan Q1 2024 draft 2023-05-01 and 03/04/2022 in March 2021", None),
            Some("PlanDraftAndIn".to_string())
        );
        assert_eq!(title("Annual_Report_2023", None), Some("AnnualReport".to_string()));
        assert_eq!(title("ledger_20240101_final", None), Some("LedgerFinal".to_string()));
    }

    #[test]
    fn month_tokens_inside_words_are_kept() {
        assert_eq!(title("summary 2024", None), Some("Summary".to_string()));
    }

    #[test]
    fn thin_or_numeric_remainders_are_rejected() {
        assert_eq!(title("2024-03-15", None), None);
        assert_eq!(title("x_2024", None), None);
        assert_eq!(title("123_456", None), None);
        assert_eq!(title("(a)", None), None);
    }

    #[test]
    fn abbreviations_stay_upper_case() {
        assert_eq!(to_cased_phrase("nasa mission-brief"), "NASAMissionBrief");
        assert_eq!(to_cased_phrase("ibm"), "IBM");
        assert_eq!(to_cased_phrase("quarterly REVIEW"), "QuarterlyReview");
    }
}
