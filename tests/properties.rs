#[cfg(test)]
mod test {
    use edit_distance_calculator::{levenshtein_distance, recursive_distance};
    use proptest::prelude::*;

    // Small alphabet so random pairs share elements often.
    prop_compose! {
        fn short_seq()(v in prop::collection::vec(0u8..4, 0..7)) -> Vec<u8> {
            v
        }
    }

    prop_compose! {
        fn medium_seq()(v in prop::collection::vec(0u8..6, 0..16)) -> Vec<u8> {
            v
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(96))]

        #[test]
        fn tabulated_matches_recursive(a in short_seq(), b in short_seq()) {
            prop_assert_eq!(levenshtein_distance(&a, &b), recursive_distance(&a, &b));
        }

        #[test]
        fn recursive_is_symmetric(a in short_seq(), b in short_seq()) {
            prop_assert_eq!(recursive_distance(&a, &b), recursive_distance(&b, &a));
        }
    }

    proptest! {
        #[test]
        fn identity(a in medium_seq()) {
            prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        }

        #[test]
        fn symmetry(a in medium_seq(), b in medium_seq()) {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }

        #[test]
        fn empty_side_costs_full_length(a in medium_seq()) {
            let empty: Vec<u8> = Vec::new();
            prop_assert_eq!(levenshtein_distance(&a, &empty), a.len());
            prop_assert_eq!(levenshtein_distance(&empty, &a), a.len());
        }

        #[test]
        fn triangle_inequality(a in medium_seq(), b in medium_seq(), c in medium_seq()) {
            let ac = levenshtein_distance(&a, &c);
            prop_assert!(ac <= levenshtein_distance(&a, &b) + levenshtein_distance(&b, &c));
        }

        #[test]
        fn bounded_by_longer_length(a in medium_seq(), b in medium_seq()) {
            let d = levenshtein_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }

        #[test]
        fn strings_agree(a in "[a-c]{0,6}", b in "[a-c]{0,6}") {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            prop_assert_eq!(levenshtein_distance(&a, &b), recursive_distance(&a, &b));
        }
    }
}
