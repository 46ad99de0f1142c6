// src/domain/address.rs
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Marks a listing that has already sold ("vendu").
const SOLD_MARKER: &str = "vendu";

/// Known quirks of addresses in the neighbourhood, applied in order.
/// "Mountain Sight" expands to "Mountain Sights" everywhere, which doubles the
/// trailing s on addresses that were already right; the next entry undoes that.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("Montp", "Montpetit"),
    ("Mountain Sight", "Mountain Sights"),
    ("Mountain Sightss", "Mountain Sights"),
    ("Ch.", "Chemin"),
    ("Boul.", "Boulevard"),
    ("Ave.", "Avenue"),
    (" Av ", " Avenue "),
    ("Avenue De Marlowe", "Avenue Marlowe"),
    ("Chemin De La Cote Saint", "Chemin de la Côte-Saint-Luc"),
];

/// Best-effort cleanup of a scraped address before geocoding.
///
/// Returns `None` for anything that can't be a mailing address: blank input,
/// sold listings, and strings that don't open with a civic number.
/// A `Some("")` is possible and callers should treat it as unusable too.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let address = raw?.trim();
    if address.is_empty() {
        return None;
    }

    if address.to_lowercase().contains(SOLD_MARKER) {
        return None;
    }
    if !address.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let mut address = address.to_string();
    for (bad, good) in REPLACEMENTS {
        if let Some(head) = address.strip_suffix(bad) {
            address = format!("{head}{good}");
        } else if address.contains(bad) {
            address = address.replace(bad, good);
        }
    }

    let address = strip_trailing_unit(&address);
    let address = strip_leading_unit(&address);

    Some(address.trim().to_string())
}

/// "4500 Marquette 4" -> "4500 Marquette"
static TRAILING_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\d{1,3}$").expect("trailing unit pattern"));

/// "5 3239 Rue X" -> "3239 Rue X". The civic number must be 3 to 5 digits.
static LEADING_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,5}\s+(\d{3,5}\s+.*)").expect("leading unit pattern"));

fn strip_trailing_unit(address: &str) -> Cow<'_, str> {
    TRAILING_UNIT.replace(address, "")
}

fn strip_leading_unit(address: &str) -> Cow<'_, str> {
    LEADING_UNIT.replace(address, "$1")
}

/// Capitalises the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
