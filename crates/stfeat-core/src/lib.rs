pub mod error;

pub mod codec;
pub mod config;
pub mod feature;
pub mod field;
pub mod handle;
pub mod quaternion;
pub mod sample;

pub use crate::config::{DecodeConfig, ScalarPolicy};
pub use crate::error::{FeatureError, Result};
pub use crate::feature::{FeatureDecoder, FeatureKind};
pub use crate::field::{Field, FieldType};
pub use crate::handle::{Feature, FeatureTransport, RawRead};
pub use crate::quaternion::Quaternion;
pub use crate::sample::{ExtractedData, Sample};
