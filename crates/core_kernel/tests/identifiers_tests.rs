//! Unit tests for case identifiers
//!
//! Covers parsing, validation, display formatting and serde behaviour of
//! CaseReference and LegacyCaseReference.

use core_kernel::{CaseReference, LegacyCaseReference};
use proptest::prelude::*;

mod case_reference_tests {
    use super::*;

    #[test]
    fn test_new_accepts_sixteen_digits() {
        let reference = CaseReference::new(1_000_000_000_000_000).unwrap();
        assert_eq!(reference.value(), 1_000_000_000_000_000);
    }

    #[test]
    fn test_new_rejects_seventeen_digits() {
        assert!(CaseReference::new(10_000_000_000_000_000).is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed: CaseReference = " 1594901956117591 ".parse().unwrap();
        assert_eq!(parsed.value(), 1594901956117591);
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert!("15949019561175AB".parse::<CaseReference>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        let reference = CaseReference::new(1594901956117591).unwrap();
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, "1594901956117591");
    }

    #[test]
    fn test_deserialize_validates_length() {
        let result: Result<CaseReference, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn dashed_form_parses_back(value in 1_000_000_000_000_000u64..10_000_000_000_000_000u64) {
            let reference = CaseReference::new(value).unwrap();
            let parsed: CaseReference = reference.to_dashed().parse().unwrap();
            prop_assert_eq!(parsed, reference);
        }
    }
}

mod legacy_reference_tests {
    use super::*;

    #[test]
    fn test_display_is_uppercase() {
        let reference: LegacyCaseReference = "000dc001".parse().unwrap();
        assert_eq!(reference.to_string(), "000DC001");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!("000DC01".parse::<LegacyCaseReference>().is_err());
        assert!("000DC0011".parse::<LegacyCaseReference>().is_err());
    }

    #[test]
    fn test_deserialize_validates_format() {
        let result: Result<LegacyCaseReference, _> = serde_json::from_str("\"000-DC-01\"");
        assert!(result.is_err());

        let reference: LegacyCaseReference = serde_json::from_str("\"000dc001\"").unwrap();
        assert_eq!(reference.as_str(), "000DC001");
        assert_eq!(serde_json::to_string(&reference).unwrap(), "\"000DC001\"");
    }
}
