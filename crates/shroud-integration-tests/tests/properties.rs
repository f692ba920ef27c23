//! Randomized properties
//!
//! Scanners and the engine are total functions: whatever bytes arrive, they
//! must return without panicking. On top of that, the resolver's non-overlap
//! invariant and the mask/restore round trip must hold for generated
//! documents.

mod common;

use proptest::prelude::*;
use shroud::resolver::resolve_overlaps;
use shroud::{
    CnpjScanner, CpfScanner, CreditCardScanner, EmailScanner, Ipv4Scanner, MaskConfig, Match,
    PhoneScanner, RegexScanner, RestoreContext, Scanner, Shroud, UuidScanner,
};

fn all_scanners() -> Vec<Box<dyn Scanner>> {
    vec![
        Box::new(EmailScanner),
        Box::new(CpfScanner),
        Box::new(CnpjScanner),
        Box::new(CreditCardScanner),
        Box::new(Ipv4Scanner),
        Box::new(PhoneScanner),
        Box::new(UuidScanner),
        Box::new(RegexScanner::new("ticket", r"TCK-\d{4}").unwrap()),
    ]
}

fn pool_matches(text: &str) -> Vec<Match> {
    let mut all = Vec::new();
    for scanner in all_scanners() {
        all.extend(scanner.scan(text));
    }
    all
}

/// Valid PII literals in every supported family.
fn pii_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("john@example.com".to_string()),
        Just("ops+alerts@service.io".to_string()),
        Just("111.444.777-35".to_string()),
        Just("11144477735".to_string()),
        Just("00.000.000/0001-91".to_string()),
        Just("4111 1111 1111 1111".to_string()),
        Just("5555-5555-5555-4444".to_string()),
        Just("10.0.0.5".to_string()),
        Just("203.0.113.5".to_string()),
        Just("+55 11 99999-9999".to_string()),
        Just("+1 415 555 1212".to_string()),
        Just("123e4567-e89b-12d3-a456-426614174000".to_string()),
        Just("TCK-0042".to_string()),
    ]
}

/// Filler between PII literals; `<` is excluded so generated documents never
/// collide with the token delimiter syntax.
fn filler() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[^<]{0,24}").unwrap()
}

fn document() -> impl Strategy<Value = String> {
    proptest::collection::vec((filler(), pii_literal()), 0..6).prop_flat_map(|pairs| {
        filler().prop_map(move |tail| {
            let mut doc = String::new();
            for (gap, pii) in &pairs {
                doc.push_str(gap);
                doc.push_str(pii);
            }
            doc.push_str(&tail);
            doc
        })
    })
}

proptest! {
    #[test]
    fn scanners_are_total_on_arbitrary_input(input in any::<String>()) {
        for scanner in all_scanners() {
            for m in scanner.scan(&input) {
                prop_assert!(m.start < m.end);
                prop_assert!(m.end <= input.len());
                prop_assert!(input.is_char_boundary(m.start));
                prop_assert!(input.is_char_boundary(m.end));
                prop_assert_eq!(&input[m.start..m.end], m.value.as_str());
            }
        }
    }

    #[test]
    fn resolved_matches_never_overlap(input in any::<String>()) {
        let resolved = resolve_overlaps(pool_matches(&input));
        for pair in resolved.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn mask_is_total_on_arbitrary_input(input in any::<String>()) {
        let shroud = Shroud::new(MaskConfig::all());
        let (masked, ctx) = shroud.mask(&input);
        prop_assert_eq!(ctx.is_empty(), masked == input);
    }

    #[test]
    fn restore_is_total_on_arbitrary_input(masked in any::<String>()) {
        let shroud = Shroud::new(MaskConfig::all());
        let mut ctx = RestoreContext::new();
        ctx.data.insert("<<EMAIL_1>>".to_string(), "a@b.io".to_string());
        // Never panics, whatever delimiter fragments the input holds.
        let _ = shroud.restore(&masked, &ctx).unwrap();
    }

    #[test]
    fn generated_documents_round_trip(doc in document()) {
        common::init_tracing();
        let shroud = Shroud::new(MaskConfig::all());

        let (masked, ctx) = shroud.mask(&doc);
        if ctx.is_empty() {
            prop_assert_eq!(&masked, &doc);
        } else {
            let restored = shroud.restore(&masked, &ctx).unwrap();
            prop_assert_eq!(restored, doc);
        }
    }
}
