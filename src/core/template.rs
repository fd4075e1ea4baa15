//! Format templates and the rewrite pipeline that renders them.
//!
//! Rendering runs these steps in order, each on the output of the last:
//!
//! 1. [`replace_year_ranges`]: every `DD-DD` becomes the short fiscal range.
//! 2. [`replace_full_year_ranges`]: every `DDDD-DDDD` becomes the full range.
//! 3. [`replace_short_years`]: lone two-digit tokens in 20..=99.
//! 4. [`replace_full_years`]: lone four-digit tokens in 2000..=2099.
//! 5. [`replace_trailing_sequence`]: the last digit run becomes the count.
//!
//! Range pairs are rewritten before lone tokens. All year replacements keep
//! the length of what they replace, so the trailing run found in step 5 has
//! the width it had in the template.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};

use super::year::YearContext;

/// Width used when a template carries no digit run at all.
pub const FALLBACK_SEQUENCE_WIDTH: usize = 5;

static YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{2}-[0-9]{2}").expect("static pattern"));
static FULL_YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}-[0-9]{4}").expect("static pattern"));
static SHORT_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[0-9]{2}(?-u:\b)").expect("static pattern"));
static FULL_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)[0-9]{4}(?-u:\b)").expect("static pattern"));
static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("static pattern"));

/// An administrator-configured invoice number pattern, e.g. `"INV/2025/00001"`.
///
/// Any string is a valid template. A blank template means "no custom
/// format" and renders the bare count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTemplate(String);

impl FormatTemplate {
    /// Wrap a template string as configured by the administrator.
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The template text as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty or whitespace-only template.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Number of digits the rendered sequence is padded to, if the template
    /// has a trailing digit run.
    pub fn sequence_width(&self) -> Option<usize> {
        if self.is_blank() {
            return None;
        }
        DIGIT_RUN.find_iter(&self.0).last().map(|m| m.len())
    }

    /// Render `count` for the year of `date`.
    pub fn render_on(&self, count: u64, date: NaiveDate) -> String {
        format_with_years(count, &self.0, &YearContext::from_date(date))
    }

    /// Render `count` for the current local year.
    pub fn render(&self, count: u64) -> String {
        format_with_years(count, &self.0, &YearContext::today())
    }
}

impl From<&str> for FormatTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FormatTemplate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format an invoice number for the current local year.
///
/// Callers pass the next count, i.e. the global invoice count plus one.
pub fn format_invoice_number(count: u64, template: &str) -> String {
    format_with_years(count, template, &YearContext::today())
}

/// Format an invoice number for the year of `date`.
pub fn format_invoice_number_on(count: u64, template: &str, date: NaiveDate) -> String {
    format_with_years(count, template, &YearContext::from_date(date))
}

/// Format an invoice number against explicit year values.
pub fn format_with_years(count: u64, template: &str, years: &YearContext) -> String {
    if template.trim().is_empty() {
        tracing::trace!(count, "blank invoice format, using bare count");
        return count.to_string();
    }

    let rendered = replace_year_ranges(template, years);
    let rendered = replace_full_year_ranges(&rendered, years);
    let rendered = replace_short_years(&rendered, years);
    let rendered = replace_full_years(&rendered, years);

    match replace_trailing_sequence(&rendered, count) {
        Some(number) => number,
        None => {
            tracing::trace!(template, "invoice format has no digit run, appending count");
            format!("{template}{}", pad(count, FALLBACK_SEQUENCE_WIDTH))
        }
    }
}

/// Replace every `DD-DD` with the short fiscal range, e.g. `"25-26"`.
///
/// Matches are leftmost and non-overlapping, so inside `"2024-2025"` the
/// middle `"24-20"` is the one rewritten. The full-range step that follows
/// sees a `DDDD-DDDD` shape again and normalizes it.
pub fn replace_year_ranges(input: &str, years: &YearContext) -> String {
    YEAR_RANGE
        .replace_all(input, NoExpand(&years.year_range()))
        .into_owned()
}

/// Replace every `DDDD-DDDD` with the full fiscal range, e.g. `"2025-2026"`.
pub fn replace_full_year_ranges(input: &str, years: &YearContext) -> String {
    FULL_YEAR_RANGE
        .replace_all(input, NoExpand(&years.full_year_range()))
        .into_owned()
}

/// Replace lone two-digit tokens between 20 and 99 with the short year.
///
/// A token glued to ASCII letters, digits or `_` is not lone. Neither is one
/// half of a `DD-DD` pair, which [`replace_year_ranges`] already settled.
/// A dash next to a run of any other width does not join anything, so the
/// `24` in `"QT-24-5"` is lone.
pub fn replace_short_years(input: &str, years: &YearContext) -> String {
    let short = years.short();
    SHORT_YEAR
        .replace_all(input, |caps: &Captures| {
            let token = &caps[0];
            let lone = caps
                .get(0)
                .is_some_and(|m| !pair_half(input, m.start(), m.end(), 2));
            if lone && parses_within(token, 20, 99) {
                short.clone()
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// Replace lone four-digit tokens between 2000 and 2099 with the year.
///
/// Lone has the same meaning as in [`replace_short_years`]: the halves of
/// a `DDDD-DDDD` pair are left to [`replace_full_year_ranges`], while the
/// `2024` in `"INV-2024-1"` is replaced.
pub fn replace_full_years(input: &str, years: &YearContext) -> String {
    let year = years.year().to_string();
    FULL_YEAR
        .replace_all(input, |caps: &Captures| {
            let token = &caps[0];
            let lone = caps
                .get(0)
                .is_some_and(|m| !pair_half(input, m.start(), m.end(), 4));
            if lone && parses_within(token, 2000, 2099) {
                year.clone()
            } else {
                token.to_string()
            }
        })
        .into_owned()
}

/// Replace the last digit run with `count`, zero padded to the run's width.
///
/// Everything before the run is kept verbatim; anything after it is
/// dropped. A count wider than the run is not truncated. Returns `None`
/// when the input has no digits.
pub fn replace_trailing_sequence(input: &str, count: u64) -> Option<String> {
    let run = DIGIT_RUN.find_iter(input).last()?;
    let prefix = &input[..run.start()];
    Some(format!("{prefix}{}", pad(count, run.len())))
}

fn pad(count: u64, width: usize) -> String {
    format!("{count:0>width$}")
}

fn parses_within(token: &str, low: u32, high: u32) -> bool {
    token.parse::<u32>().is_ok_and(|v| (low..=high).contains(&v))
}

/// True when `start..end` is one side of a dash whose other side is a digit
/// run of exactly `width`, as in `25-26` or `2025-2026`.
fn pair_half(input: &str, start: usize, end: usize, width: usize) -> bool {
    let bytes = input.as_bytes();
    let left = match &bytes[..start] {
        [rest @ .., b'-'] => rest.iter().rev().take_while(|b| b.is_ascii_digit()).count() == width,
        _ => false,
    };
    let right = match &bytes[end..] {
        [b'-', rest @ ..] => rest.iter().take_while(|b| b.is_ascii_digit()).count() == width,
        _ => false,
    };
    left || right
}
