//! Invoice number templates, year substitution, and numbering.
//!
//! The formatter is a fixed pipeline of string rewrites, each exposed on
//! its own in [`template`] so the order-dependent cases can be checked
//! step by step.

mod details;
mod error;
mod numbering;
pub mod template;
mod year;

pub use details::*;
pub use error::*;
pub use numbering::*;
pub use template::{
    FALLBACK_SEQUENCE_WIDTH, FormatTemplate, format_invoice_number, format_invoice_number_on,
    format_with_years,
};
pub use year::*;
