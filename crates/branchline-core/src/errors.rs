//! Error handling for branchline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

/// Errors from the composite calculators.
///
/// Invalid domain input is a returned value whose Display is exactly
/// `"Invalid input"`, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum QuoteError {
    /// Weight and distance must both be positive.
    #[error("Invalid input")]
    NonPositiveInput { weight_kg: f64, distance_km: f64 },
}
