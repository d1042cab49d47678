// crates/stfeat-core/src/feature/compass.rs
//
// Wire: int16 LE, hundredths of a degree.

use crate::codec::read_i16_le;
use crate::error::Result;
use crate::feature::{require, FeatureDecoder, FeatureKind};
use crate::field::{Field, FieldType};
use crate::sample::{ExtractedData, Sample};

pub static COMPASS_FIELDS: [Field; 1] = [Field::new("Angle", "°", FieldType::Float, 360.0, 0.0)];

#[derive(Clone, Copy, Debug, Default)]
pub struct Compass;

impl Compass {
    pub const NAME: &'static str = "Compass";
    pub const DATA_LEN: usize = 2;
    pub const SCALE: f64 = 100.0;
}

impl FeatureDecoder for Compass {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Compass
    }

    fn fields(&self) -> &'static [Field] {
        &COMPASS_FIELDS
    }

    fn extract(&self, timestamp: u64, data: &[u8], offset: usize) -> Result<ExtractedData> {
        require(data, offset, Self::DATA_LEN)?;

        let angle = read_i16_le(data, offset) as f64 / Self::SCALE;
        tracing::trace!(timestamp, angle, "compass");

        Ok(ExtractedData {
            sample: Sample::new(timestamp, vec![angle], &COMPASS_FIELDS)?,
            bytes_consumed: Self::DATA_LEN,
        })
    }
}

/// Heading in degrees, or NaN when there is no sample or it holds no value.
pub fn get_compass(sample: Option<&Sample>) -> f64 {
    sample.and_then(|s| s.value(0)).unwrap_or(f64::NAN)
}
