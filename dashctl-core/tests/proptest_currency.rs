use dashctl_core::{cents_to_units, format_currency};
use proptest::prelude::*;

/// Parse a display string back into cents (test-only inverse).
fn parse_display(s: &str) -> i64 {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits: String = rest
        .strip_prefix('$')
        .expect("missing $ prefix")
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let (whole, frac) = digits.split_once('.').expect("missing decimal point");
    let cents = whole.parse::<i64>().unwrap() * 100 + frac.parse::<i64>().unwrap();
    if negative {
        -cents
    } else {
        cents
    }
}

#[test]
fn round_trips_to_display_units() {
    let display = format_currency(1234);
    assert_eq!(display, "$12.34");

    let units: f64 = display.trim_start_matches('$').parse().unwrap();
    assert_eq!(units, 12.34);
    assert_eq!(units, cents_to_units(1234));
}

proptest! {
    /// Property: formatting is deterministic
    #[test]
    fn prop_format_is_deterministic(cents in any::<i64>()) {
        prop_assert_eq!(format_currency(cents), format_currency(cents));
    }

    /// Property: the display string parses back to the same amount
    #[test]
    fn prop_format_round_trips(cents in -1_000_000_000_000i64..1_000_000_000_000i64) {
        prop_assert_eq!(parse_display(&format_currency(cents)), cents);
    }

    /// Property: always exactly two decimals and well-placed separators
    #[test]
    fn prop_format_shape(cents in 0i64..i64::MAX) {
        let s = format_currency(cents);
        let (whole, frac) = s.trim_start_matches('$').split_once('.').unwrap();

        prop_assert_eq!(frac.len(), 2);
        for (i, group) in whole.split(',').enumerate() {
            if i == 0 {
                prop_assert!((1..=3).contains(&group.len()));
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }

    /// Property: negative amounts mirror positive ones
    #[test]
    fn prop_negative_mirrors_positive(cents in 1i64..i64::MAX) {
        prop_assert_eq!(format_currency(-cents), format!("-{}", format_currency(cents)));
    }
}
