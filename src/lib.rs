//! # invoice-numbering
//!
//! Year-aware invoice and quotation number formatting for the
//! administrative console of a service and rental invoicing system.
//!
//! An administrator configures a free-form format template such as
//! `"INV/2025/00001"` or `"25-26-00001"`. The backend owns a single global
//! invoice counter. This crate turns the two into the displayed number:
//! year tokens in the template follow the current calendar year, and the
//! trailing digit run is replaced by the zero-padded count.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use invoice_numbering::core::*;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
//!
//! assert_eq!(format_invoice_number_on(15, "INV/2024/0001", today), "INV/2025/0015");
//! assert_eq!(format_invoice_number_on(3, "26-27-00001", today), "25-26-00003");
//! assert_eq!(format_invoice_number_on(5, "PREFIX", today), "PREFIX00005");
//! assert_eq!(format_invoice_number_on(42, "", today), "42");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Template formatting, backend details, numbering |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
