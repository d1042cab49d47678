// crates/stfeat-core/src/feature/mod.rs

pub mod compass;
pub mod fusion;
pub mod fusion_compact;

use crate::config::DecodeConfig;
use crate::error::{FeatureError, Result};
use crate::field::Field;
use crate::sample::ExtractedData;

pub use compass::{get_compass, Compass};
pub use fusion::SensorFusion;
pub use fusion_compact::SensorFusionCompact;

/// Decodes one feature's slice of a notification payload.
///
/// Implementations hold no mutable state; `extract` may be called from any
/// thread and returns the same result for the same input.
pub trait FeatureDecoder: Send + Sync {
    fn kind(&self) -> FeatureKind;

    fn fields(&self) -> &'static [Field];

    /// Decode starting at `data[offset]`.
    ///
    /// Fails with [`FeatureError::InsufficientData`] when fewer than the
    /// feature's minimum length remain. Nothing else about the payload is validated.
    fn extract(&self, timestamp: u64, data: &[u8], offset: usize) -> Result<ExtractedData>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Compass,
    SensorFusion,
    SensorFusionCompact,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 3] =
        [FeatureKind::Compass, FeatureKind::SensorFusion, FeatureKind::SensorFusionCompact];

    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::Compass => Compass::NAME,
            FeatureKind::SensorFusion => SensorFusion::NAME,
            FeatureKind::SensorFusionCompact => SensorFusionCompact::NAME,
        }
    }

    /// Smallest payload the feature can decode.
    pub fn min_len(self) -> usize {
        match self {
            FeatureKind::Compass => Compass::DATA_LEN,
            FeatureKind::SensorFusion => SensorFusion::DATA_LEN,
            FeatureKind::SensorFusionCompact => SensorFusionCompact::DATA_LEN,
        }
    }

    pub fn decoder(self, cfg: DecodeConfig) -> Box<dyn FeatureDecoder> {
        match self {
            FeatureKind::Compass => Box::new(Compass),
            FeatureKind::SensorFusion => Box::new(SensorFusion::new(cfg)),
            FeatureKind::SensorFusionCompact => Box::new(SensorFusionCompact::new(cfg)),
        }
    }
}

/// Bytes left after `offset`, or `InsufficientData` if fewer than `required`.
pub(crate) fn require(data: &[u8], offset: usize, required: usize) -> Result<usize> {
    let available = data.len().saturating_sub(offset);
    if available < required {
        return Err(FeatureError::InsufficientData { required, available });
    }
    Ok(available)
}
