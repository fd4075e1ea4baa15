use chrono::{Datelike, Local, NaiveDate};

/// Year values substituted into a format template.
///
/// Two-digit forms are the last two digits of the year, zero padded, so
/// 2005 renders as `"05"` and the range 2099/2100 as `"99-00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearContext {
    year: i32,
}

impl YearContext {
    /// Context for an explicit calendar year.
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Context for the year of the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year())
    }

    /// Context for the current local date.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// The four-digit year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Last two digits of the year, e.g. `"25"`.
    pub fn short(&self) -> String {
        two_digits(self.year)
    }

    /// Last two digits of the following year, e.g. `"26"`.
    pub fn next_short(&self) -> String {
        two_digits(self.year + 1)
    }

    /// Short fiscal range, e.g. `"25-26"`.
    pub fn year_range(&self) -> String {
        format!("{}-{}", self.short(), self.next_short())
    }

    /// Full fiscal range, e.g. `"2025-2026"`.
    pub fn full_year_range(&self) -> String {
        format!("{}-{}", self.year, self.year + 1)
    }
}

fn two_digits(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}
