//! Canonical key normalizer — maps a value to its comparison key
//!
//! Two values are duplicates when they produce the same canonical key.
//!
//! # Pipeline
//!
//! `text → NFKC → unify hyphens → drop whitespace → lower-case → recompose`
//!
//! Order matters: each step works on the output of the previous one. The
//! final recomposition only has an effect when dropping whitespace brings a
//! base character next to a combining mark (`"a \u{308}"` → `"ä"`).
//!
//! # Guarantees
//!
//! - **Total**: defined for every string, including the empty string
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **Deterministic**: same input always produces same output

use unicode_normalization::UnicodeNormalization;

use crate::value::FieldValue;

/// The matching policy as shown to end users. Hosts display these verbatim.
pub const RULES: [&str; 4] = [
    "Full-width characters become half-width (１ → 1)",
    "Hyphen variants are unified (ー, − → -)",
    "Whitespace is removed (A 1 → A1)",
    "Letters are compared in lower case (A → a)",
];

// ── Public API ─────────────────────────────────────────────

/// Normalize text to its canonical comparison key
///
/// # Example
/// ```
/// use normdup_core::normalizer::normalize;
///
/// assert_eq!(normalize("ＡＢＣ－１２３"), "abc-123");
/// assert_eq!(normalize("２０１０ー０１ー０１"), "2010-01-01");
/// assert_eq!(normalize(" A 1 "), "a1");
/// ```
pub fn normalize(text: &str) -> String {
    // ── Step 1: Compatibility folding ──────────────────
    let folded: String = text.nfkc().collect();

    // ── Steps 2 + 3: Hyphens and whitespace ────────────
    let compact: String = folded
        .chars()
        .filter(|c| !is_blank(*c))
        .map(|c| if is_hyphen_like(c) { '-' } else { c })
        .collect();

    // ── Step 4: Case folding ───────────────────────────
    let lowered = compact.to_lowercase();

    // ── Step 5: Recompose ──────────────────────────────
    if lowered.is_ascii() {
        lowered
    } else {
        lowered.nfkc().collect()
    }
}

/// Normalize any field value, coercing it to text first
///
/// Missing values normalize to the key of the empty string.
pub fn normalize_value(value: &FieldValue) -> String {
    normalize(&value.stringify())
}

/// Characters unified to `-`: the general hyphen and dash range
/// (U+2010–U+2015), minus sign, katakana prolonged sound mark and
/// full-width hyphen-minus.
pub fn is_hyphen_like(c: char) -> bool {
    matches!(c, '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{30FC}' | '\u{FF0D}')
}

/// Characters removed from keys: Unicode `White_Space` plus the
/// zero-width no-break space.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
