//! Relic display-name parsing and natural ordering.
//!
//! Relic names look like `"Axi A1"` or `"Lith G10B"`: an era word, then a code
//! made of letters, digits and optional trailing letters. Plain string sorting
//! puts `"Axi A10"` before `"Axi A2"` and `"Axi"` before `"Lith"`, so the
//! catalog is ordered by the parsed fields instead.

use std::cmp::Ordering;

/// Rank given to any era outside the known table.
pub const UNKNOWN_ERA_RANK: u32 = 99;

/// Known eras, in display order.
pub const ERA_ORDER: [&str; 4] = ["Lith", "Meso", "Neo", "Axi"];

/// Structured view of a relic display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRelicName {
    pub era: String,
    /// `letters + digits + tail`, digits exactly as written.
    pub code: String,
    pub letters: String,
    pub numeric_value: u64,
    pub tail: String,
}

/// Sort rank of an era word. Unknown eras rank after every known one.
pub fn era_rank(era: &str) -> u32 {
    ERA_ORDER
        .iter()
        .position(|known| *known == era)
        .map(|i| i as u32)
        .unwrap_or(UNKNOWN_ERA_RANK)
}

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a relic display name.
///
/// Names that do not have the `<era> <letters><digits><tail>` shape parse in
/// degraded mode: no era, the whole normalized string as code and letters,
/// numeric value 0 and no tail. Parsing never fails.
pub fn parse_relic_name(name: &str) -> ParsedRelicName {
    let normalized = normalize_whitespace(name);
    match split_shape(&normalized) {
        Some((era, letters, digits, tail)) => ParsedRelicName {
            era: era.to_string(),
            code: format!("{}{}{}", letters, digits, tail),
            letters: letters.to_string(),
            numeric_value: digits.parse().unwrap_or(0),
            tail: tail.to_string(),
        },
        None => ParsedRelicName {
            era: String::new(),
            code: normalized.clone(),
            letters: normalized,
            numeric_value: 0,
            tail: String::new(),
        },
    }
}

/// Split `"<era> <letters><digits><tail>"` into its four parts.
fn split_shape(s: &str) -> Option<(&str, &str, &str, &str)> {
    let (era, code) = s.split_once(' ')?;
    if era.is_empty() || !era.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let letters_end = code
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(code.len());
    let digits_end = code[letters_end..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| letters_end + i)
        .unwrap_or(code.len());

    let (letters, rest) = code.split_at(letters_end);
    let (digits, tail) = rest.split_at(digits_end - letters_end);

    if letters.is_empty() || digits.is_empty() || !tail.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some((era, letters, digits, tail))
}

/// Natural order over relic display names.
///
/// Era rank, then letters (case-insensitive), then the numeric part, then the
/// tail (case-insensitive), then the raw strings. The last step makes this a
/// total order.
pub fn relic_natural_compare(a: &str, b: &str) -> Ordering {
    let pa = parse_relic_name(a);
    let pb = parse_relic_name(b);

    era_rank(&pa.era)
        .cmp(&era_rank(&pb.era))
        .then_with(|| pa.letters.to_lowercase().cmp(&pb.letters.to_lowercase()))
        .then_with(|| pa.numeric_value.cmp(&pb.numeric_value))
        .then_with(|| pa.tail.to_lowercase().cmp(&pb.tail.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Sort display names in place by [`relic_natural_compare`].
pub fn sort_relic_names<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| relic_natural_compare(a.as_ref(), b.as_ref()));
}
