//! Keyword-based item categorization
//!
//! Maps free-text item names onto the seeded category set so shoppers do not
//! have to file every entry by hand. Matching is case-insensitive substring
//! containment against an ordered keyword table: the first entry with a hit
//! wins, so "chicken noodle soup" files under meat, not pantry.

/// Ordered (category slug, keywords) table. Declaration order is precedence.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "dairy",
        &["milk", "cheese", "yogurt", "butter", "egg", "cream"],
    ),
    (
        "bakery",
        &["bread", "bagel", "croissant", "muffin", "tortilla", "cake", "bun"],
    ),
    (
        "produce",
        &[
            "apple", "banana", "orange", "lettuce", "tomato", "onion", "potato", "carrot",
            "pepper", "broccoli", "spinach", "avocado", "grape", "berry", "berries", "lemon",
            "cucumber", "garlic",
        ],
    ),
    (
        "meat",
        &["chicken", "beef", "pork", "turkey", "ham", "bacon", "sausage", "steak", "lamb"],
    ),
    ("seafood", &["fish", "salmon", "tuna", "shrimp", "crab"]),
    ("frozen", &["frozen", "ice cream", "pizza"]),
    (
        "beverages",
        &["water", "juice", "soda", "coffee", "tea", "beer", "wine", "cola"],
    ),
    (
        "snacks",
        &["chips", "cookies", "crackers", "candy", "chocolate", "popcorn", "pretzel", "nuts"],
    ),
    (
        "pantry",
        &[
            "rice", "pasta", "flour", "sugar", "salt", "oil", "sauce", "soup", "cereal", "beans",
            "spice", "vinegar", "honey", "noodle",
        ],
    ),
    (
        "household",
        &["paper", "detergent", "soap", "cleaner", "towel", "trash", "foil", "sponge", "battery"],
    ),
    (
        "personal-care",
        &["shampoo", "toothpaste", "deodorant", "razor", "lotion", "tissue", "floss"],
    ),
];

/// Infer a category slug from an item name.
///
/// Returns the first table entry with a keyword contained in the lowercased
/// name, or `None` when nothing matches. Substring containment is deliberate:
/// "organic whole milk" and "oat milk" both land in dairy.
pub fn classify(name: &str) -> Option<&'static str> {
    let lowered = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(slug, _)| *slug)
}

/// Slugs the classifier can produce, in precedence order. The storage seed
/// must cover every one of these.
pub fn known_slugs() -> impl Iterator<Item = &'static str> {
    CATEGORY_KEYWORDS.iter().map(|(slug, _)| *slug)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_inside_longer_names() {
        assert_eq!(classify("organic whole milk"), Some("dairy"));
        assert_eq!(classify("sourdough bread"), Some("bakery"));
        assert_eq!(classify("cherry tomatoes"), Some("produce"));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify("MILK"), Some("dairy"));
        assert_eq!(classify("Chicken Breast"), Some("meat"));
    }

    #[test]
    fn first_table_entry_wins_ties() {
        // "chicken" (meat) appears before "soup"/"noodle" (pantry) in the table.
        assert_eq!(classify("chicken noodle soup"), Some("meat"));
        // "tomato" (produce) outranks "soup" (pantry).
        assert_eq!(classify("tomato soup"), Some("produce"));
        assert_eq!(classify("miso soup"), Some("pantry"));
    }

    #[test]
    fn unknown_names_stay_unclassified() {
        assert_eq!(classify("mystery box"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn every_slug_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for slug in known_slugs() {
            assert!(seen.insert(slug), "duplicate slug {slug}");
        }
    }
}
