//! Unit tests for the Money module
//!
//! Tests cover money creation, checked arithmetic, ratios, the half-up
//! rounding policy and display formatting.

use core_kernel::{Money, Currency, MoneyError, Rate, round_currency};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_the_exact_amount() {
        let m = Money::new(dec!(0.00004), Currency::USD);
        assert_eq!(m.amount(), dec!(0.00004));
        assert!(m.is_positive());
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_is_neither_positive_nor_negative() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_non_negative_floors_at_zero() {
        assert!(Money::usd(dec!(-20)).non_negative().is_zero());
        assert_eq!(Money::usd(dec!(20)).non_negative().amount(), dec!(20));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_sub_can_go_negative() {
        let a = Money::usd(dec!(30.00));
        let b = Money::usd(dec!(100.00));
        assert_eq!(a.checked_sub(&b).unwrap().amount(), dec!(-70.00));
    }

    #[test]
    fn test_sum_overflow_is_reported() {
        let amounts = vec![Money::usd(Decimal::MAX), Money::usd(Decimal::MAX)];
        assert_eq!(Money::sum(&amounts, Currency::USD), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_ratio_to() {
        let part = Money::usd(dec!(1500));
        let whole = Money::usd(dec!(5000));
        assert_eq!(part.ratio_to(&whole).unwrap(), dec!(0.3));
    }

    #[test]
    fn test_sum_rejects_mixed_currencies() {
        let amounts = vec![Money::usd(dec!(1)), Money::new(dec!(1), Currency::EUR)];
        assert!(matches!(
            Money::sum(&amounts, Currency::USD),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let amounts: Vec<Money> = Vec::new();
        assert!(Money::sum(&amounts, Currency::GBP).unwrap().is_zero());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_half_up() {
        assert_eq!(Money::usd(dec!(2.345)).round_to_currency().amount(), dec!(2.35));
        assert_eq!(Money::usd(dec!(2.3449)).round_to_currency().amount(), dec!(2.34));
    }

    #[test]
    fn test_round_to_currency_jpy() {
        let m = Money::new(dec!(100.5), Currency::JPY);
        assert_eq!(m.round_to_currency().amount(), dec!(101));
    }

    #[test]
    fn test_round_currency_midpoint_negative() {
        assert_eq!(round_currency(dec!(-0.125)), dec!(-0.13));
    }
}

mod rates {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(22));
        assert_eq!(rate.as_decimal(), dec!(0.22));
        assert_eq!(rate.as_percentage(), dec!(22));
    }

    #[test]
    fn test_rates_order_by_value() {
        let mut rates = vec![
            Rate::from_percentage(dec!(10)),
            Rate::from_percentage(dec!(22)),
            Rate::from_percentage(dec!(4)),
        ];
        rates.sort();
        let values: Vec<Decimal> = rates.iter().map(|r| r.as_percentage()).collect();
        assert_eq!(values, vec![dec!(4), dec!(10), dec!(22)]);
    }
}

mod display {
    use super::*;

    #[test]
    fn test_small_amount() {
        assert_eq!(Money::usd(dec!(0.5)).to_string(), "$0.50");
    }

    #[test]
    fn test_millions() {
        assert_eq!(Money::new(dec!(1234567.891), Currency::EUR).to_string(), "€1,234,567.89");
    }

    #[test]
    fn test_negative_rounding_to_zero_has_no_sign() {
        assert_eq!(Money::usd(dec!(-0.001)).to_string(), "$0.00");
    }
}
