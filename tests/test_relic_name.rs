//! Relic name parsing and natural ordering.

use std::cmp::Ordering;

use relic_picker::relic_name::{era_rank, normalize_whitespace, sort_relic_names, UNKNOWN_ERA_RANK};
use relic_picker::{parse_relic_name, relic_natural_compare};

// ---------------------------------------------------------------------------
// parse_relic_name
// ---------------------------------------------------------------------------

#[test]
fn parses_standard_name() {
    let p = parse_relic_name("Axi A1");
    assert_eq!(p.era, "Axi");
    assert_eq!(p.letters, "A");
    assert_eq!(p.numeric_value, 1);
    assert_eq!(p.tail, "");
    assert_eq!(p.code, "A1");
}

#[test]
fn parses_multi_letter_code_with_tail() {
    let p = parse_relic_name("Lith GH12B");
    assert_eq!(p.era, "Lith");
    assert_eq!(p.letters, "GH");
    assert_eq!(p.numeric_value, 12);
    assert_eq!(p.tail, "B");
    assert_eq!(p.code, "GH12B");
}

#[test]
fn code_keeps_digits_as_written() {
    let p = parse_relic_name("Neo N007");
    assert_eq!(p.code, "N007");
    assert_eq!(p.numeric_value, 7);
}

#[test]
fn normalizes_whitespace_before_matching() {
    let p = parse_relic_name("  Meso \t  C5  ");
    assert_eq!(p.era, "Meso");
    assert_eq!(p.code, "C5");
    assert_eq!(normalize_whitespace("  a \n b  c "), "a b c");
}

#[test]
fn unknown_era_word_still_parses() {
    let p = parse_relic_name("Vanguard V3");
    assert_eq!(p.era, "Vanguard");
    assert_eq!(p.code, "V3");
}

#[test]
fn unparseable_name_degrades() {
    for raw in ["Requiem I", "A1", "Axi 12", "Axi A1 Extra", "Axi A-1", ""] {
        let p = parse_relic_name(raw);
        let normalized = normalize_whitespace(raw);
        assert_eq!(p.era, "", "{raw}");
        assert_eq!(p.code, normalized, "{raw}");
        assert_eq!(p.letters, normalized, "{raw}");
        assert_eq!(p.numeric_value, 0, "{raw}");
        assert_eq!(p.tail, "", "{raw}");
    }
}

#[test]
fn overflowing_digits_parse_as_zero() {
    let p = parse_relic_name("Axi A99999999999999999999999");
    assert_eq!(p.numeric_value, 0);
    assert_eq!(p.code, "A99999999999999999999999");
}

// ---------------------------------------------------------------------------
// era_rank
// ---------------------------------------------------------------------------

#[test]
fn era_rank_follows_fixed_table() {
    assert_eq!(era_rank("Lith"), 0);
    assert_eq!(era_rank("Meso"), 1);
    assert_eq!(era_rank("Neo"), 2);
    assert_eq!(era_rank("Axi"), 3);
    assert_eq!(era_rank("Requiem"), UNKNOWN_ERA_RANK);
    assert_eq!(era_rank(""), UNKNOWN_ERA_RANK);
}

// ---------------------------------------------------------------------------
// relic_natural_compare
// ---------------------------------------------------------------------------

#[test]
fn era_decides_first() {
    assert_eq!(relic_natural_compare("Lith A1", "Axi A1"), Ordering::Less);
    assert_eq!(relic_natural_compare("Axi A1", "Neo Z99"), Ordering::Greater);
}

#[test]
fn number_compares_numerically() {
    assert_eq!(relic_natural_compare("Axi A1", "Axi A2"), Ordering::Less);
    assert_eq!(relic_natural_compare("Axi A2", "Axi A10"), Ordering::Less);
}

#[test]
fn letters_decide_before_number() {
    assert_eq!(relic_natural_compare("Axi B1", "Axi A2"), Ordering::Greater);
    assert_eq!(relic_natural_compare("Axi a5", "Axi B1"), Ordering::Less);
}

#[test]
fn tail_breaks_numeric_ties() {
    assert_eq!(relic_natural_compare("Neo N5", "Neo N5A"), Ordering::Less);
    assert_eq!(relic_natural_compare("Neo N5b", "Neo N5A"), Ordering::Greater);
}

#[test]
fn raw_string_breaks_remaining_ties() {
    // Same parsed fields, different spelling.
    assert_eq!(relic_natural_compare("Axi A01", "Axi A1"), Ordering::Less);
    assert_eq!(relic_natural_compare("Axi a1", "Axi A1"), Ordering::Greater);
    assert_eq!(relic_natural_compare("Axi A1", "Axi A1"), Ordering::Equal);
}

#[test]
fn unknown_eras_sort_last() {
    assert_eq!(relic_natural_compare("Requiem I", "Axi Z9"), Ordering::Greater);
    assert_eq!(relic_natural_compare("Vanguard V1", "Axi A1"), Ordering::Greater);
}

#[test]
fn compare_is_antisymmetric_and_transitive() {
    let names = [
        "Axi A10", "Lith G1", "Requiem I", "Axi A2", "Meso N3", "Neo N5A", "Neo N5",
        "Axi a1", "Axi A1", "Lith G10", "Axi A01", "weird", "Vanguard V2",
    ];
    for a in names {
        for b in names {
            assert_eq!(
                relic_natural_compare(a, b),
                relic_natural_compare(b, a).reverse(),
                "{a} vs {b}"
            );
            for c in names {
                if relic_natural_compare(a, b) != Ordering::Greater
                    && relic_natural_compare(b, c) != Ordering::Greater
                {
                    assert_ne!(relic_natural_compare(a, c), Ordering::Greater, "{a} {b} {c}");
                }
            }
        }
    }
}

#[test]
fn sorting_is_independent_of_input_order() {
    let expected = vec!["Lith G1", "Lith G10", "Meso N3", "Axi A2", "Axi A10", "Requiem I"];

    let mut forward = vec!["Axi A10", "Requiem I", "Lith G10", "Axi A2", "Meso N3", "Lith G1"];
    let mut reversed: Vec<&str> = forward.iter().rev().copied().collect();
    sort_relic_names(&mut forward);
    sort_relic_names(&mut reversed);

    assert_eq!(forward, expected);
    assert_eq!(reversed, expected);
}
