use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::NumberingError;
use super::template::FormatTemplate;

/// The backend's shared invoicing settings, as served by the
/// "common details" endpoint.
///
/// ```json
/// { "invoiceCount": 41, "globalInvoiceFormat": "INV/2025/00001" }
/// ```
///
/// `invoice_count` is the number of invoices already finalized. The number
/// shown for the invoice being drafted uses `invoice_count + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonDetails {
    #[serde(default)]
    pub invoice_count: i64,
    #[serde(default)]
    pub global_invoice_format: FormatTemplate,
}

impl CommonDetails {
    /// Details with the given finalized count and format.
    pub fn new(invoice_count: i64, global_invoice_format: impl Into<FormatTemplate>) -> Self {
        Self {
            invoice_count,
            global_invoice_format: global_invoice_format.into(),
        }
    }

    /// The count to render for the next invoice.
    pub fn next_count(&self) -> Result<u64, NumberingError> {
        let current = u64::try_from(self.invoice_count)
            .map_err(|_| NumberingError::NegativeCount(self.invoice_count))?;
        current
            .checked_add(1)
            .ok_or(NumberingError::CountOverflow(current))
    }

    /// The number the next invoice will carry, for the year of `date`.
    pub fn next_invoice_number_on(&self, date: NaiveDate) -> Result<String, NumberingError> {
        Ok(self.global_invoice_format.render_on(self.next_count()?, date))
    }

    /// The number the next invoice will carry, for the current local year.
    pub fn next_invoice_number(&self) -> Result<String, NumberingError> {
        self.next_invoice_number_on(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_count_adds_one() {
        assert_eq!(CommonDetails::new(0, "").next_count(), Ok(1));
        assert_eq!(CommonDetails::new(41, "").next_count(), Ok(42));
    }

    #[test]
    fn negative_count_rejected() {
        let details = CommonDetails::new(-3, "INV/0001");
        assert_eq!(details.next_count(), Err(NumberingError::NegativeCount(-3)));
        assert!(details.next_invoice_number_on(date(2025, 1, 1)).is_err());
    }

    #[test]
    fn next_number_uses_format() {
        let details = CommonDetails::new(14, "INV/2024/0001");
        assert_eq!(
            details.next_invoice_number_on(date(2025, 3, 10)).unwrap(),
            "INV/2025/0015"
        );
    }

    #[test]
    fn next_number_without_format() {
        let details = CommonDetails::new(41, "");
        assert_eq!(details.next_invoice_number_on(date(2025, 3, 10)).unwrap(), "42");
    }
}
