use crate::domain::constants::{is_plausible_year, MONTHS};
use crate::domain::models::{Confidence, DateFormat, DateMatch};
use regex::Regex;
use std::sync::LazyLock;

type DateMatcher = fn(&str) -> Option<DateMatch>;

/// Priority table. The first matcher that yields a date wins, so the more
/// specific shapes must stay ahead of the bare-year fallback.
const DATE_MATCHERS: &[(&str, DateMatcher)] = &[
    ("iso", match_iso),
    ("european", match_european),
    ("compact", match_compact),
    ("quarter", match_quarter),
    ("month", match_month_name),
    ("year", match_bare_year),
];

static ISO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4})[-/]([0-9]{1,2})[-/]([0-9]{1,2})").expect("valid iso date regex")
});

static EUROPEAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[-/]([0-9]{1,2})[-/]([0-9]{4})").expect("valid european date regex")
});

static QUARTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)q([1-4])[\s\-_]*([0-9]{4})|([0-9]{4})[\s\-_]*q([1-4])")
        .expect("valid quarter regex")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

/// One pattern per month token, in lexicon order. The token may not touch
/// another letter on the side facing away from the year.
static MONTH_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    MONTHS
        .iter()
        .map(|(token, full)| {
            let pattern = format!(
                r"(?i)(?:^|[^a-z]){token}[\s\-_]*([0-9]{{4}})|([0-9]{{4}})[\s\-_]*{token}(?:[^a-z]|$)"
            );
            (Regex::new(&pattern).expect("valid month regex"), *full)
        })
        .collect()
});

pub fn extract_date(stem: &str) -> Option<DateMatch> {
    DATE_MATCHERS.iter().find_map(|(name, matcher)| {
        let found = matcher(stem);
        if let Some(m) = &found {
            tracing::trace!(matcher = *name, value = %m.value, "date matched");
        }
        found
    })
}

fn yymmdd(year: &str, month: &str, day: &str) -> String {
    format!("{}{:0>2}{:0>2}", &year[2..], month, day)
}

fn month_day_valid(month: &str, day: &str) -> bool {
    match (month.parse::<u32>(), day.parse::<u32>()) {
        (Ok(m), Ok(d)) => m <= 12 && d <= 31,
        _ => false,
    }
}

fn full_date(value: String, confidence: Confidence) -> DateMatch {
    DateMatch {
        value,
        format: DateFormat::Full,
        confidence,
    }
}

fn match_iso(stem: &str) -> Option<DateMatch> {
    let caps = ISO.captures(stem)?;
    Some(full_date(
        yymmdd(&caps[1], &caps[2], &caps[3]),
        Confidence::High,
    ))
}

fn match_european(stem: &str) -> Option<DateMatch> {
    let caps = EUROPEAN.captures(stem)?;
    let (day, month, year) = (&caps[1], &caps[2], &caps[3]);
    if !month_day_valid(month, day) {
        return None;
    }
    Some(full_date(yymmdd(year, month, day), Confidence::Medium))
}

fn match_compact(stem: &str) -> Option<DateMatch> {
    let run = DIGIT_RUN
        .find_iter(stem)
        .map(|m| m.as_str())
        .find(|r| r.len() == 8)?;
    let (year, month, day) = (&run[..4], &run[4..6], &run[6..]);
    if !month_day_valid(month, day) {
        return None;
    }
    Some(full_date(yymmdd(year, month, day), Confidence::High))
}

fn match_quarter(stem: &str) -> Option<DateMatch> {
    let caps = QUARTER.captures(stem)?;
    let (quarter, year) = match (caps.get(1), caps.get(2)) {
        (Some(q), Some(y)) => (q.as_str(), y.as_str()),
        _ => (caps.get(4)?.as_str(), caps.get(3)?.as_str()),
    };
    Some(DateMatch {
        value: format!("{year}-Q{quarter}"),
        format: DateFormat::Quarter,
        confidence: Confidence::High,
    })
}

fn match_month_name(stem: &str) -> Option<DateMatch> {
    MONTH_PATTERNS.iter().find_map(|(re, full)| {
        let caps = re.captures(stem)?;
        let year = caps.get(1).or_else(|| caps.get(2))?.as_str();
        Some(DateMatch {
            value: format!("{year}-{full}"),
            format: DateFormat::Month,
            confidence: Confidence::High,
        })
    })
}

fn match_bare_year(stem: &str) -> Option<DateMatch> {
    let year = DIGIT_RUN
        .find_iter(stem)
        .map(|m| m.as_str())
        .find(|r| is_plausible_year(r))?;
    Some(DateMatch {
        value: year.to_string(),
        format: DateFormat::Year,
        confidence: Confidence::Medium,
    })
}
