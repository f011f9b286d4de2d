//! Property tests for argument forwarding.

use proptest::prelude::*;

use slidepick::PickArgs;

fn arg() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-y".to_string()),
        proptest::string::string_regex("-{0,2}[a-z]{1,6}(=[a-z0-9]{1,4})?").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Forwarding removes exactly the `-y` flags and keeps order.
    #[test]
    fn property_forwarding_drops_only_the_flag(args in proptest::collection::vec(arg(), 0..=12)) {
        let parsed = PickArgs::parse(args.clone());

        let expected: Vec<String> = args.iter().filter(|a| *a != "-y").cloned().collect();
        prop_assert_eq!(&parsed.forwarded, &expected);
        prop_assert_eq!(parsed.non_interactive, args.iter().any(|a| a == "-y"));
    }
}
