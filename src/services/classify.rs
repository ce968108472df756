use crate::domain::models::{Classification, Confidence, NameComponents};
use crate::services::engine::split_extension;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static SPACE_OR_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\s]+").expect("valid delimiter regex"));

static TOKEN_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_\s]+").expect("valid token regex"));

static LONG_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{6,8}").expect("valid digit regex"));

const MAX_TOKEN_CHANGES: usize = 2;

struct ChangeContext<'a> {
    original_stem: &'a str,
    suggested_stem: &'a str,
    original_normalized: String,
    suggested_normalized: String,
    components: &'a NameComponents,
}

type AutoRule = fn(&ChangeContext) -> bool;

/// A change is applied automatically as soon as any rule accepts it.
const AUTO_RULES: &[(&str, AutoRule)] = &[
    ("delimiter_or_case", delimiter_or_case_only),
    ("date_notation", date_notation_only),
    ("few_token_changes", few_token_changes),
    ("high_confidence", high_confidence_components),
];

pub fn classify_change(
    original: &str,
    suggested: &str,
    components: &NameComponents,
) -> Classification {
    let (original_stem, _) = split_extension(original);
    let (suggested_stem, _) = split_extension(suggested);
    let ctx = ChangeContext {
        original_stem,
        suggested_stem,
        original_normalized: normalize_delimiters(original_stem),
        suggested_normalized: suggested_stem.to_lowercase(),
        components,
    };
    match AUTO_RULES.iter().find(|(_, rule)| rule(&ctx)) {
        Some((name, _)) => {
            tracing::debug!(original, suggested, rule = *name, "auto rename");
            Classification::Auto
        }
        None => Classification::NeedsReview,
    }
}

fn normalize_delimiters(stem: &str) -> String {
    SPACE_OR_UNDERSCORE.replace_all(stem, "-").to_lowercase()
}

/// Size of the symmetric difference between the two lower-cased token sets.
pub fn token_changes(original_stem: &str, suggested_stem: &str) -> usize {
    if normalize_delimiters(original_stem) == suggested_stem.to_lowercase() {
        return 0;
    }
    let tokens = |s: &str| -> HashSet<String> {
        TOKEN_SPLIT
            .split(&s.to_lowercase())
            .map(str::to_string)
            .collect()
    };
    let (a, b) = (tokens(original_stem), tokens(suggested_stem));
    a.symmetric_difference(&b).count()
}

fn delimiter_or_case_only(ctx: &ChangeContext) -> bool {
    ctx.original_normalized == ctx.suggested_normalized
}

fn date_notation_only(ctx: &ChangeContext) -> bool {
    LONG_DIGITS.replace_all(&ctx.original_normalized, "")
        == LONG_DIGITS.replace_all(&ctx.suggested_normalized, "")
}

fn few_token_changes(ctx: &ChangeContext) -> bool {
    let c = ctx.components;
    if c.date.is_none() {
        return false;
    }
    let Some(title) = c.title.as_deref().filter(|t| !t.is_empty()) else {
        return false;
    };
    if title.to_lowercase() == ctx.original_stem.to_lowercase() {
        return false;
    }
    token_changes(ctx.original_stem, ctx.suggested_stem) <= MAX_TOKEN_CHANGES
}

fn high_confidence_components(ctx: &ChangeContext) -> bool {
    let c = ctx.components;
    c.date_confidence == Confidence::High
        && (c.source_confidence == Confidence::High || c.title_confidence == Confidence::High)
}
