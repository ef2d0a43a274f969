// Slug generation for usernames and task titles

use deunicode::deunicode;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref QUOTES: Regex = Regex::new(r#"['"`’‘]+"#).expect("valid quote regex");
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").expect("valid separator regex");
}

/// Build a URL-safe slug from a human readable string.
///
/// Non-ASCII text is transliterated to ASCII first, so Cyrillic, Greek and
/// CJK names keep a readable slug. The result is lowercased, quotes are
/// dropped and every other run of non-alphanumeric characters collapses
/// into a single `-`. Leading and trailing separators are trimmed.
///
/// ```
/// assert_eq!(common::slug::slugify("Buy Milk & Eggs!"), "buy-milk-eggs");
/// assert_eq!(common::slug::slugify("Crème Brûlée"), "creme-brulee");
/// assert_eq!(common::slug::slugify("Иван Петров"), "ivan-petrov");
/// ```
pub fn slugify(input: &str) -> String {
    let ascii = deunicode(input).to_lowercase();
    let unquoted = QUOTES.replace_all(&ascii, "");
    let dashed = NON_ALNUM.replace_all(&unquoted, "-");
    dashed.trim_matches('-').to_string()
}
