//! Property-based tests for invoice number formatting.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::NaiveDate;
use invoice_numbering::core::*;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// A prefix without digits, so it holds no year tokens.
fn arb_prefix() -> impl Strategy<Value = String> {
    "[A-Za-z/ _.-]{0,8}"
}

/// A sequence placeholder width and a count that fits in it.
fn arb_width_and_count() -> impl Strategy<Value = (usize, u64)> {
    (1usize..=9).prop_flat_map(|w| (Just(w), 0u64..10u64.pow(w as u32)))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2099, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d))
}

proptest! {
    #[test]
    fn trailing_run_keeps_width(
        prefix in arb_prefix(),
        (width, count) in arb_width_and_count(),
        today in arb_date(),
    ) {
        let template = format!("{prefix}{}", "0".repeat(width));
        let number = format_invoice_number_on(count, &template, today);
        prop_assert_eq!(number, format!("{prefix}{count:0>width$}"));
    }

    #[test]
    fn prefix_outside_year_tokens_is_verbatim(
        head in "[A-Z]{1,4}",
        (width, count) in arb_width_and_count(),
        today in arb_date(),
    ) {
        let template = format!("{head}/2024/{}", "1".repeat(width));
        let number = format_invoice_number_on(count, &template, today);
        let year = YearContext::from_date(today).year();
        prop_assert_eq!(number, format!("{head}/{year}/{count:0>width$}"));
    }

    #[test]
    fn blank_templates_render_bare_count(blank in "[ \t]{0,6}", count in any::<u64>()) {
        prop_assert_eq!(format_invoice_number_on(count, &blank, date(2025, 1, 1)), count.to_string());
    }

    #[test]
    fn digitless_templates_append_padded_count(prefix in "[A-Za-z/ -]{1,10}", count in 0u64..100_000) {
        prop_assume!(!prefix.trim().is_empty());
        let number = format_invoice_number_on(count, &prefix, date(2025, 1, 1));
        prop_assert_eq!(number, format!("{prefix}{count:05}"));
    }

    #[test]
    fn arbitrary_templates_are_deterministic(template in any::<String>(), count in any::<u64>()) {
        let today = date(2025, 6, 30);
        let first = format_invoice_number_on(count, &template, today);
        let second = format_invoice_number_on(count, &template, today);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn details_render_count_plus_one(count in 0i64..1_000_000, today in arb_date()) {
        let details = CommonDetails::new(count, "INV-0000001");
        let number = details.next_invoice_number_on(today).unwrap();
        prop_assert_eq!(number, format!("INV-{:07}", count + 1));
    }
}
