// crates/stfeat-core/src/feature/fusion_compact.rs
//
// Wire: int16 LE qi,qj,qk in 1/10000 units; the scalar is never sent.

use crate::codec::read_i16_le;
use crate::config::DecodeConfig;
use crate::error::Result;
use crate::feature::{require, FeatureDecoder, FeatureKind};
use crate::field::Field;
use crate::quaternion::{reconstruct_scalar, QUATERNION_FIELDS};
use crate::sample::{ExtractedData, Sample};

#[derive(Clone, Copy, Debug, Default)]
pub struct SensorFusionCompact {
    cfg: DecodeConfig,
}

impl SensorFusionCompact {
    pub const NAME: &'static str = "MEMS Sensor Fusion (Compact)";
    pub const DATA_LEN: usize = 6;
    pub const SCALE: f64 = 10000.0;

    pub fn new(cfg: DecodeConfig) -> Self {
        Self { cfg }
    }
}

impl FeatureDecoder for SensorFusionCompact {
    fn kind(&self) -> FeatureKind {
        FeatureKind::SensorFusionCompact
    }

    fn fields(&self) -> &'static [Field] {
        &QUATERNION_FIELDS
    }

    fn extract(&self, timestamp: u64, data: &[u8], offset: usize) -> Result<ExtractedData> {
        require(data, offset, Self::DATA_LEN)?;

        let qi = read_i16_le(data, offset) as f64 / Self::SCALE;
        let qj = read_i16_le(data, offset + 2) as f64 / Self::SCALE;
        let qk = read_i16_le(data, offset + 4) as f64 / Self::SCALE;
        let qs = reconstruct_scalar(qi, qj, qk, self.cfg.scalar_policy)?;
        tracing::trace!(timestamp, qi, qj, qk, qs, "sensor fusion compact");

        Ok(ExtractedData {
            sample: Sample::new(timestamp, vec![qi, qj, qk, qs], &QUATERNION_FIELDS)?,
            bytes_consumed: Self::DATA_LEN,
        })
    }
}
