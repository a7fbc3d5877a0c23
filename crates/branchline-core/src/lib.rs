//! branchline-core: Branching-logic classifiers as a library
//!
//! This crate provides the pure classification routines for Branchline:
//! - Threshold: Ordered numeric ranges mapped to fixed labels
//! - Compact: Single-expression equivalents of the threshold forms
//! - Dispatch: Discrete-key matching with catch-all fallbacks
//! - Structural: Shape-and-guard matching over a dynamic value model
//! - Calculators: Branch-dependent arithmetic with documented rounding
//! - Validators: Requirement reporting and whole-verdict checks
//!
//! Every routine is a pure function of its arguments: no I/O, no global
//! state, no randomness. Same input, same answer.

pub mod threshold;
pub mod compact;
pub mod dispatch;
pub mod structural;
pub mod calculators;
pub mod validators;
pub mod errors;

// Re-exports for convenience
pub use threshold::{categorise_age, check_even_odd, check_temperature, grade_assignment};
pub use compact::{
    check_even_odd_compact, check_temperature_compact, classify_text_length_compact,
    format_price, format_price_with, get_discount_rate, get_pass_fail,
    get_priority_level_compact, get_user_status_compact, process_grade_compact,
    process_grade_compact_with, validate_input_compact,
};
pub use dispatch::{handle_http_status, process_command};
pub use structural::{analyse_data_structure, Value};
pub use calculators::{
    calculate_final_price, calculate_shipping, calculate_shipping_with,
    calculate_tax_compact, PricingOptions,
};
pub use validators::{validate_email_compact, validate_password_strength};
pub use errors::QuoteError;
