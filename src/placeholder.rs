//! Date placeholder resolution.
//!
//! Expands recognized date tokens in block text before layout. Tokens
//! are matched against a static rule table (literal pattern + token
//! kind), so new token kinds are a table entry away. Unrecognized
//! tokens stay verbatim, and text without tokens passes through
//! untouched.

use chrono::{Datelike, Local, NaiveDate};

/// Recognized placeholder token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    /// Numeric date, dd.mm.yyyy
    Today,
    /// Long localized date, e.g. "30 Ağustos 2026"
    LongDate,
}

/// Token rule table: literal pattern and the replacement rule it maps to.
const TOKEN_RULES: &[(&str, TokenKind)] = &[
    ("{{today}}", TokenKind::Today),
    ("{{bugun}}", TokenKind::Today),
    ("{{bugün}}", TokenKind::Today),
    ("{{date}}", TokenKind::LongDate),
    ("{{tarih}}", TokenKind::LongDate),
];

/// Turkish month names for long date formatting.
const TURKISH_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Replace every recognized date token with the current date.
///
/// Runs once per generation call, before layout. Idempotent on text
/// containing no tokens.
pub fn resolve_placeholders(text: &str) -> String {
    resolve_placeholders_on(text, Local::now().date_naive())
}

/// Token resolution against an explicit date; the testable core.
fn resolve_placeholders_on(text: &str, date: NaiveDate) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        // Earliest match among all rules wins
        let next = TOKEN_RULES
            .iter()
            .filter_map(|(pat, kind)| rest.find(pat).map(|idx| (idx, *pat, *kind)))
            .min_by_key(|(idx, _, _)| *idx);

        match next {
            Some((idx, pattern, kind)) => {
                out.push_str(&rest[..idx]);
                out.push_str(&format_date(kind, date));
                rest = &rest[idx + pattern.len()..];
            },
            None => {
                out.push_str(rest);
                break;
            },
        }
    }

    out
}

/// Format a date per the token's replacement rule.
fn format_date(kind: TokenKind, date: NaiveDate) -> String {
    match kind {
        TokenKind::Today => format!("{:02}.{:02}.{}", date.day(), date.month(), date.year()),
        TokenKind::LongDate => format!(
            "{} {} {}",
            date.day(),
            TURKISH_MONTHS[date.month0() as usize],
            date.year()
        ),
    }
}
