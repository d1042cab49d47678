use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeatureError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeatureError {
    /// Fewer bytes remain after `offset` than the feature needs.
    #[error("insufficient data: need {required} bytes, {available} available")]
    InsufficientData { required: usize, available: usize },

    /// The omitted quaternion scalar could not be rebuilt (vector norm above 1).
    #[error("scalar reconstruction failed: |v|^2 = {norm_sq} > 1")]
    Reconstruction { norm_sq: f64 },

    #[error("sample has {got} values for {expected} fields")]
    FieldMismatch { expected: usize, got: usize },

    #[error("feature not enabled: {feature}")]
    NotEnabled { feature: &'static str },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
