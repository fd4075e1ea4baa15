use chrono::{Local, NaiveDate};

use super::details::CommonDetails;
use super::error::NumberingError;
use super::template::FormatTemplate;

/// A global invoice counter paired with its format template.
///
/// Mirrors the backend contract: the number shown while drafting is
/// `count + 1`, and the count advances exactly once per finalized invoice.
/// [`peek_on`](Self::peek_on) previews without consuming;
/// [`issue_on`](Self::issue_on) consumes.
#[derive(Debug, Clone)]
pub struct InvoiceNumbering {
    template: FormatTemplate,
    count: u64,
}

impl InvoiceNumbering {
    /// Start a fresh counter; the first issued number renders count 1.
    pub fn new(template: impl Into<FormatTemplate>) -> Self {
        Self {
            template: template.into(),
            count: 0,
        }
    }

    /// Continue after `last_count` invoices have been finalized.
    pub fn starting_at(template: impl Into<FormatTemplate>, last_count: u64) -> Self {
        Self {
            template: template.into(),
            count: last_count,
        }
    }

    /// Take over the counter and format reported by the backend.
    pub fn from_details(details: &CommonDetails) -> Result<Self, NumberingError> {
        let count = u64::try_from(details.invoice_count)
            .map_err(|_| NumberingError::NegativeCount(details.invoice_count))?;
        Ok(Self::starting_at(details.global_invoice_format.clone(), count))
    }

    /// Number of invoices finalized so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The template numbers are rendered with.
    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }

    /// Preview the next number for the year of `date` without consuming it.
    pub fn peek_on(&self, date: NaiveDate) -> Result<String, NumberingError> {
        let next = self.next_count()?;
        Ok(self.template.render_on(next, date))
    }

    /// Issue the next number for the year of `date`, advancing the counter.
    pub fn issue_on(&mut self, date: NaiveDate) -> Result<String, NumberingError> {
        let next = self.next_count()?;
        self.count = next;
        let number = self.template.render_on(next, date);
        tracing::debug!(count = next, number = %number, "issued invoice number");
        Ok(number)
    }

    /// Preview the next number for the current local year.
    pub fn peek(&self) -> Result<String, NumberingError> {
        self.peek_on(Local::now().date_naive())
    }

    /// Issue the next number for the current local year.
    pub fn issue(&mut self) -> Result<String, NumberingError> {
        self.issue_on(Local::now().date_naive())
    }

    fn next_count(&self) -> Result<u64, NumberingError> {
        self.count
            .checked_add(1)
            .ok_or(NumberingError::CountOverflow(self.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sequential_numbering() {
        let mut numbering = InvoiceNumbering::new("RE-2024-001");
        let today = date(2024, 6, 1);
        assert_eq!(numbering.issue_on(today).unwrap(), "RE-2024-001");
        assert_eq!(numbering.issue_on(today).unwrap(), "RE-2024-002");
        assert_eq!(numbering.issue_on(today).unwrap(), "RE-2024-003");
        assert_eq!(numbering.count(), 3);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut numbering = InvoiceNumbering::new("RE/0001");
        let today = date(2024, 6, 1);
        assert_eq!(numbering.peek_on(today).unwrap(), "RE/0001");
        assert_eq!(numbering.peek_on(today).unwrap(), "RE/0001");
        assert_eq!(numbering.issue_on(today).unwrap(), "RE/0001");
        assert_eq!(numbering.peek_on(today).unwrap(), "RE/0002");
    }

    #[test]
    fn starting_at() {
        let mut numbering = InvoiceNumbering::starting_at("INV/2024/000", 41);
        assert_eq!(numbering.issue_on(date(2024, 6, 1)).unwrap(), "INV/2024/042");
    }

    #[test]
    fn year_follows_date() {
        let mut numbering = InvoiceNumbering::starting_at("INV/2024/0001", 9);
        assert_eq!(numbering.issue_on(date(2024, 12, 31)).unwrap(), "INV/2024/0010");
        assert_eq!(numbering.issue_on(date(2025, 1, 1)).unwrap(), "INV/2025/0011");
    }

    #[test]
    fn overflow_is_an_error() {
        let mut numbering = InvoiceNumbering::starting_at("N-1", u64::MAX);
        assert_eq!(
            numbering.issue_on(date(2024, 1, 1)),
            Err(NumberingError::CountOverflow(u64::MAX))
        );
        assert_eq!(numbering.count(), u64::MAX);
    }

    #[test]
    fn from_details_rejects_negative() {
        let details = CommonDetails::new(-1, "INV/0001");
        assert!(matches!(
            InvoiceNumbering::from_details(&details),
            Err(NumberingError::NegativeCount(-1))
        ));
    }
}
