#![no_main]

use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((count, rest)) = data.split_first_chunk::<8>() else {
        return;
    };
    let count = u64::from_le_bytes(*count);
    if let Ok(template) = std::str::from_utf8(rest) {
        // Must not panic for any template or count.
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let _ = invoice_numbering::format_invoice_number_on(count, template, today);
    }
});
