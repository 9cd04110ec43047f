use regex::Regex;
use std::sync::LazyLock;

macro_rules! locale_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── en: American spellings ────────────────────────────────────────────────
locale_pattern!(
    RE_AMERICAN_SPELLING,
    r"(?i)\b(colors?|favors?|favorites?|meters?|centers?|theaters?|organize[ds]?|realize[ds]?|recognize[ds]?|analyze[ds]?|traveled|traveling|gray|neighbors?|honors?|humor|labor|flavors?)\b"
);

/// American stem and its British form, checked in order, so a longer stem
/// sharing a prefix (`favorite`, `favor`) comes first.
pub const BRITISH_SPELLINGS: &[(&str, &str)] = &[
    ("color", "colour"),
    ("favorite", "favourite"),
    ("favor", "favour"),
    ("meter", "metre"),
    ("center", "centre"),
    ("theater", "theatre"),
    ("organiz", "organis"),
    ("realiz", "realis"),
    ("recogniz", "recognis"),
    ("analyz", "analys"),
    ("travel", "travell"),
    ("gray", "grey"),
    ("neighbor", "neighbour"),
    ("honor", "honour"),
    ("humor", "humour"),
    ("labor", "labour"),
    ("flavor", "flavour"),
];

/// British form of a lower-cased American spelling matched above.
pub fn british_spelling(american: &str) -> Option<String> {
    BRITISH_SPELLINGS.iter().find_map(|(stem, british)| {
        american
            .strip_prefix(stem)
            .map(|rest| format!("{british}{rest}"))
    })
}

// ── en: prompt is itself about spelling ───────────────────────────────────
locale_pattern!(
    RE_SPELLING_GUARD,
    r"(?i)correct(?:ly)?\s+spell|spell(?:ed|t)\s+correctly|correct\s+spelling"
);

// ── fr-CH: continental numerals (septante, huitante, nonante expected) ────
locale_pattern!(
    RE_CONTINENTAL_NUMERAL,
    r"(?i)\b(soixante[-\s]+(?:et[-\s]+)?(?:dix|onze|douze|treize|quatorze|quinze|seize)|quatre[-\s]+vingts?(?:[-\s]+dix)?)\b"
);

// ── de-CH: sharp s (Swiss orthography writes ss) ──────────────────────────
locale_pattern!(RE_SHARP_S, r"\w*ß\w*");
