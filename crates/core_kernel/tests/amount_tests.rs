//! Unit tests for claim amounts

use core_kernel::{AmountError, ClaimAmount};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_zero_is_valid() {
        let amount = ClaimAmount::new(dec!(0)).unwrap();
        assert!(amount.is_zero());
        assert_eq!(amount, ClaimAmount::default());
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!(
            ClaimAmount::new(dec!(-100.00)),
            Err(AmountError::Negative(_))
        ));
    }

    #[test]
    fn test_try_from_decimal() {
        let amount = ClaimAmount::try_from(dec!(250.75)).unwrap();
        let back: Decimal = amount.into();
        assert_eq!(back, dec!(250.75));
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        let amount: ClaimAmount = "1500.0".parse().unwrap();
        assert_eq!(amount.amount(), dec!(1500));
    }

    #[test]
    fn test_parse_negative_fails() {
        assert!("-1".parse::<ClaimAmount>().is_err());
    }

    #[test]
    fn test_display_keeps_scale() {
        let amount = ClaimAmount::new(dec!(99.90)).unwrap();
        assert_eq!(amount.to_string(), "99.90");
    }
}

mod serde_support {
    use super::*;

    #[test]
    fn test_deserialize_rejects_negative() {
        let result: Result<ClaimAmount, _> = serde_json::from_str("\"-3.5\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_accepts_string_and_number() {
        let from_string: ClaimAmount = serde_json::from_str("\"1500.50\"").unwrap();
        let from_number: ClaimAmount = serde_json::from_str("1500.5").unwrap();
        assert_eq!(from_string.amount(), dec!(1500.50));
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn test_serialize_round_trip() {
        let amount = ClaimAmount::new(dec!(12.34)).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        let back: ClaimAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
