use multiples_app::{classify, parse_bound, DisplayColor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn length_and_order_match_bound(bound in 0u64..2_000) {
        let result = classify(bound);
        prop_assert_eq!(result.len() as u64, bound + 1);
        for (index, record) in result.iter().enumerate() {
            prop_assert_eq!(record.number(), index as u64);
        }
    }

    #[test]
    fn divisors_are_exactly_the_matching_subset(bound in 0u64..1_000) {
        for record in &classify(bound) {
            let n = record.number();
            for d in [3u64, 5, 7] {
                prop_assert_eq!(record.is_multiple_of(d), n % d == 0, "n={} d={}", n, d);
            }
            prop_assert!(record.divisors().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn primary_is_min_of_divisors(bound in 0u64..1_000) {
        for record in &classify(bound) {
            prop_assert_eq!(record.primary_divisor(), record.divisors().iter().min().copied());
            prop_assert_eq!(
                record.color() == DisplayColor::Neutral,
                record.divisors().is_empty()
            );
        }
    }

    #[test]
    fn classify_is_deterministic(bound in 0u64..500) {
        prop_assert_eq!(classify(bound), classify(bound));
    }

    #[test]
    fn parse_bound_accepts_rendered_integers(n in any::<u64>()) {
        prop_assert_eq!(parse_bound(&n.to_string()), Ok(n));
    }

    #[test]
    fn parse_bound_rejects_negatives(n in 1u64..) {
        let text = format!("-{}", n);
        prop_assert!(parse_bound(&text).is_err());
    }

    #[test]
    fn parse_bound_rejects_non_digit_text(s in "[a-zA-Z.,_ -]{1,12}") {
        prop_assert!(parse_bound(&s).is_err());
    }
}
