/// Organization, institution and ticker codes that are always rendered upper-case.
pub const KNOWN_ABBREVIATIONS: &[&str] = &[
    // consulting
    "BCG", "MCKINSEY", "BAIN", "DELOITTE", "PWC", "EY", "KPMG", "ATK",
    // government
    "FBI", "CIA", "NASA", "EPA", "FDA", "SEC", "FTC", "IRS", "DOJ", "DOD",
    // finance
    "JPM", "GS", "MS", "CITI", "BOA", "HSBC", "UBS", "CS", "DB", "BNP",
    // tech
    "MSFT", "GOOG", "AAPL", "META", "AMZN", "IBM", "NVDA", "TSLA",
    // education and media
    "MIT", "NYU", "UCLA", "USC", "HBS", "WSJ", "NYT", "BBC", "CNN",
];

/// Month tokens in lookup order, paired with the full English month name.
pub const MONTHS: &[(&str, &str)] = &[
    ("jan", "January"),
    ("january", "January"),
    ("feb", "February"),
    ("february", "February"),
    ("mar", "March"),
    ("march", "March"),
    ("apr", "April"),
    ("april", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("june", "June"),
    ("jul", "July"),
    ("july", "July"),
    ("aug", "August"),
    ("august", "August"),
    ("sep", "September"),
    ("sept", "September"),
    ("september", "September"),
    ("oct", "October"),
    ("october", "October"),
    ("nov", "November"),
    ("november", "November"),
    ("dec", "December"),
    ("december", "December"),
];

/// Document nouns and company suffixes that never count as part of a person name.
pub const STOP_WORDS: &[&str] = &[
    "report", "document", "file", "form", "scan", "statement", "invoice", "receipt", "letter",
    "memo", "note", "draft", "final", "copy", "input", "output", "data", "info", "list",
    "summary", "analysis", "review", "foods", "inc", "corp", "llc", "ltd", "company", "group",
    "services", "tax", "organizer", "unknown", "untitled", "new", "old", "top", "best",
];

/// Multi-suffix extensions kept together when splitting a file name.
pub const COMPOUND_EXTENSIONS: &[&str] = &[".tar.gz", ".tar.xz", ".tar.bz2"];

pub const MIN_YEAR: u32 = 1990;
pub const MAX_YEAR: u32 = 2099;

pub fn is_known_abbreviation(word: &str) -> bool {
    let upper = word.to_uppercase();
    KNOWN_ABBREVIATIONS.iter().any(|a| *a == upper)
}

pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.iter().any(|w| *w == lower)
}

pub fn is_full_month_name(word: &str) -> bool {
    MONTHS.iter().any(|(_, full)| *full == word)
}

/// Four ASCII digits within the supported year range.
pub fn is_plausible_year(digits: &str) -> bool {
    digits.len() == 4
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits
            .parse::<u32>()
            .map(|y| (MIN_YEAR..=MAX_YEAR).contains(&y))
            .unwrap_or(false)
}
