// crates/stfeat-core/src/feature/fusion.rs
//
// Wire: float32 LE x,y,z[,w].
// With 16 bytes available the scalar is on the wire and the quaternion is
// renormalized; with 12..=15 it is rebuilt from the unit-norm constraint.

use crate::codec::read_f32_le;
use crate::config::DecodeConfig;
use crate::error::Result;
use crate::feature::{require, FeatureDecoder, FeatureKind};
use crate::field::Field;
use crate::quaternion::{normalize, reconstruct_scalar, QUATERNION_FIELDS};
use crate::sample::{ExtractedData, Sample};

#[derive(Clone, Copy, Debug, Default)]
pub struct SensorFusion {
    cfg: DecodeConfig,
}

impl SensorFusion {
    pub const NAME: &'static str = "MEMS Sensor Fusion";
    pub const DATA_LEN: usize = 12;
    pub const DATA_LEN_WITH_SCALAR: usize = 16;

    pub fn new(cfg: DecodeConfig) -> Self {
        Self { cfg }
    }
}

impl FeatureDecoder for SensorFusion {
    fn kind(&self) -> FeatureKind {
        FeatureKind::SensorFusion
    }

    fn fields(&self) -> &'static [Field] {
        &QUATERNION_FIELDS
    }

    fn extract(&self, timestamp: u64, data: &[u8], offset: usize) -> Result<ExtractedData> {
        let available = require(data, offset, Self::DATA_LEN)?;

        let x = read_f32_le(data, offset) as f64;
        let y = read_f32_le(data, offset + 4) as f64;
        let z = read_f32_le(data, offset + 8) as f64;

        let (q, consumed) = if available >= Self::DATA_LEN_WITH_SCALAR {
            let w = read_f32_le(data, offset + 12) as f64;
            (normalize([x, y, z, w]), Self::DATA_LEN_WITH_SCALAR)
        } else {
            let w = reconstruct_scalar(x, y, z, self.cfg.scalar_policy)?;
            ([x, y, z, w], Self::DATA_LEN)
        };
        tracing::trace!(timestamp, consumed, ?q, "sensor fusion");

        Ok(ExtractedData {
            sample: Sample::new(timestamp, q.to_vec(), &QUATERNION_FIELDS)?,
            bytes_consumed: consumed,
        })
    }
}
