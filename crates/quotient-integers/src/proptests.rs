//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;
    use std::cmp::Ordering;

    use crate::{Integer, Rational, RationalError};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    // Non-zero integers of 20 to 60 decimal digits, well past any machine word
    fn wide_int() -> impl Strategy<Value = Integer> {
        "-?[1-9][0-9]{19,59}".prop_map(|s| s.parse::<Integer>().unwrap())
    }

    fn wide_rational() -> impl Strategy<Value = Rational> {
        (wide_int(), wide_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // GCD properties

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);

            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }

        #[test]
        fn gcd_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
        }

        // Canonical form

        #[test]
        fn sign_moves_to_numerator(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            let flipped = Rational::from_i64(-n, -d).unwrap();
            prop_assert_eq!(r.to_string(), flipped.to_string());
            prop_assert_eq!(r.denominator().signum(), 1);
        }

        #[test]
        fn stored_in_lowest_terms(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            let g = r.numerator().gcd(r.denominator());
            prop_assert_eq!(g.to_i64(), Some(1));
        }

        #[test]
        fn reduction_is_idempotent(n in small_int(), d in non_zero_int()) {
            let g = Integer::new(n).gcd(&Integer::new(d)).to_i64().unwrap();
            let r = Rational::from_i64(n, d).unwrap();
            let reduced = Rational::from_i64(n / g, d / g).unwrap();
            prop_assert_eq!(r.to_string(), reduced.to_string());
        }

        #[test]
        fn zero_denominator_rejected(n in small_int()) {
            prop_assert_eq!(Rational::from_i64(n, 0), Err(RationalError::DivisionByZero));
        }

        // Parsing

        #[test]
        fn canonical_text_round_trips(a in rational()) {
            let text = a.to_string();
            let parsed: Rational = text.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), text);
            prop_assert_eq!(parsed, a);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn add_then_sub_is_identity(a in rational(), b in rational()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn mul_then_div_is_identity(a in rational(), b in non_zero_rational()) {
            prop_assert_eq!((&a * &b).checked_div(&b), Ok(a));
        }

        #[test]
        fn wide_add_then_sub_is_identity(a in wide_rational(), b in wide_rational()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn wide_mul_then_div_is_identity(a in wide_rational(), b in wide_rational()) {
            prop_assert_eq!((&a * &b).checked_div(&b), Ok(a));
        }

        #[test]
        fn wide_values_stay_reduced(a in wide_rational(), b in wide_rational()) {
            let sum = &a + &b;
            prop_assert_eq!(sum.numerator().gcd(sum.denominator()).to_i64(), Some(1));
            prop_assert_eq!(sum.to_string().parse::<Rational>(), Ok(sum));
        }

        #[test]
        fn double_negation(a in rational()) {
            prop_assert_eq!(-(-a.clone()), a);
        }

        #[test]
        fn rational_multiplicative_inverse(a in non_zero_rational()) {
            use num_traits::One;
            let product = &a * &a.recip().unwrap();
            prop_assert!(product.is_one());
        }

        // Ordering

        #[test]
        fn ordering_is_total(a in rational(), b in rational()) {
            let holds = [a < b, a == b, a > b];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }

        #[test]
        fn ordering_matches_difference_sign(a in rational(), b in rational()) {
            let expected = match (&a - &b).signum() {
                -1 => Ordering::Less,
                0 => Ordering::Equal,
                _ => Ordering::Greater,
            };
            prop_assert_eq!(a.cmp(&b), expected);
        }

        #[test]
        fn range_contains_its_midpoint(a in rational(), b in rational()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let mid = &(&lo + &hi) * &Rational::from_i64(1, 2).unwrap();
            let range = lo.range_to(hi);
            prop_assert!(range.contains(&mid));
            prop_assert!(range.contains(range.start()));
            prop_assert!(range.contains(range.end()));
        }
    }
}
