//! Render the next invoice number from a backend "common details" payload.
//!
//! Run with: `cargo run --example format_invoice_number`

use chrono::NaiveDate;
use invoice_numbering::core::*;

fn main() {
    let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

    for template in ["", "PREFIX", "00001", "26-27-00001", "INV/2024/0001"] {
        let details = CommonDetails::new(41, template);
        match details.next_invoice_number_on(today) {
            Ok(number) => println!("{template:>16?} -> {number}"),
            Err(e) => eprintln!("{template:>16?} -> error: {e}"),
        }
    }

    // Issue numbers the way the console does when invoices are finalized.
    let mut numbering = InvoiceNumbering::starting_at("QT/24-25/0001", 9);
    match numbering.peek_on(today) {
        Ok(number) => println!("draft: {number}"),
        Err(e) => eprintln!("error: {e}"),
    }
    for _ in 0..3 {
        match numbering.issue_on(today) {
            Ok(number) => println!("issued: {number}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
