use thiserror::Error;

/// Errors returned when constructing a `HyperLogLog` with an unusable configuration.
///
/// Once constructed, `add` and `count` never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimatorError {
    /// Register count must be a positive power of two, as the low hash bits
    /// are masked to select a register.
    #[error("invalid configuration: register count {register_count} is not a positive power of two")]
    InvalidConfiguration { register_count: usize },
    /// Precision (number of index bits) is outside of the supported range.
    #[error("invalid configuration: precision {precision} exceeds maximum of {max}")]
    InvalidPrecision { precision: u32, max: u32 },
}
