//! Voice transcription parsing
//!
//! Turns a dictated phrase like "2 gallons of milk" into quantity, unit, and
//! item name. The grammar is deliberately small: an optional leading number,
//! an optional unit word, and everything left over is the name. Anything that
//! does not fit becomes a single item with quantity 1.

use rust_decimal::Decimal;

/// Unit words recognized right after a leading quantity.
const UNITS: &[&str] = &[
    "dozen", "lb", "lbs", "pound", "pounds", "kg", "g", "oz", "ml", "l", "liter", "liters",
    "gallon", "gallons", "gal", "cup", "cups", "pack", "packs",
];

/// Fields parsed out of a transcription phrase
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedItem {
    pub name: String,
    pub quantity: Decimal,
    pub unit: Option<String>,
}

impl ParsedItem {
    fn whole_phrase(text: &str) -> Self {
        Self {
            name: text.to_string(),
            quantity: Decimal::ONE,
            unit: None,
        }
    }
}

/// Parse a transcription phrase.
///
/// Decimal quantities are accepted ("1.5 kg flour"), a filler "of" between
/// unit and name is tolerated ("2 gallons of milk"), and unit words are only
/// treated as units when a quantity precedes them, so "dozen eggs" stays a
/// name.
pub fn parse_transcription(text: &str) -> ParsedItem {
    let trimmed = text.trim();
    let mut tokens = trimmed.split_whitespace();

    let quantity = tokens
        .next()
        .and_then(|t| t.parse::<Decimal>().ok())
        .filter(|q| !q.is_sign_negative());
    let Some(quantity) = quantity else {
        return ParsedItem::whole_phrase(trimmed);
    };

    let rest: Vec<&str> = tokens.collect();
    let (unit, mut name_tokens) = match rest.first() {
        Some(first) if UNITS.contains(&first.to_lowercase().as_str()) => {
            (Some(first.to_lowercase()), &rest[1..])
        }
        _ => (None, &rest[..]),
    };

    if name_tokens.first().is_some_and(|t| t.eq_ignore_ascii_case("of")) {
        name_tokens = &name_tokens[1..];
    }

    let name = name_tokens.join(" ");
    if name.is_empty() {
        // A bare number or "2 kg" with no name; treat the input as the name.
        return ParsedItem::whole_phrase(trimmed);
    }

    ParsedItem {
        name,
        quantity,
        unit,
    }
}

// ── Tests ──────────────────────────────────────────────────────
