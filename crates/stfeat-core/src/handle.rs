// crates/stfeat-core/src/handle.rs
//
// Stateful feature handle: owns a decoder, an enabled flag and the last
// decoded sample, and composes "read raw, decode, pick value" for callers.

use crate::config::DecodeConfig;
use crate::error::{FeatureError, Result};
use crate::feature::{get_compass, FeatureDecoder, FeatureKind};
use crate::quaternion::{get_qi, get_qj, get_qk, get_qs, Quaternion};
use crate::sample::Sample;

/// One raw payload pulled from a device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRead {
    pub timestamp: u64,
    pub data: Vec<u8>,
    /// Where this feature's bytes start within `data`.
    pub offset: usize,
}

/// Source of raw feature payloads (a BLE characteristic read, a replay file, ...).
///
/// Errors returned here reach the caller of [`Feature::read_data`] unchanged.
pub trait FeatureTransport {
    fn read_raw(&mut self, kind: FeatureKind) -> Result<RawRead>;
}

pub struct Feature {
    decoder: Box<dyn FeatureDecoder>,
    enabled: bool,
    last: Option<Sample>,
}

impl Feature {
    /// New handles start disabled; the device layer enables the features it advertises.
    pub fn new(kind: FeatureKind, cfg: DecodeConfig) -> Self {
        Self::with_decoder(kind.decoder(cfg))
    }

    pub fn with_decoder(decoder: Box<dyn FeatureDecoder>) -> Self {
        Self { decoder, enabled: false, last: None }
    }

    pub fn kind(&self) -> FeatureKind {
        self.decoder.kind()
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn decoder(&self) -> &dyn FeatureDecoder {
        self.decoder.as_ref()
    }

    pub fn last_sample(&self) -> Option<&Sample> {
        self.last.as_ref()
    }

    /// Decode a payload and keep the sample. The previous sample survives a failed decode.
    pub fn update(&mut self, timestamp: u64, data: &[u8], offset: usize) -> Result<usize> {
        let out = self.decoder.extract(timestamp, data, offset)?;
        self.last = Some(out.sample);
        Ok(out.bytes_consumed)
    }

    /// Pull the latest payload from `transport` and decode it.
    pub fn read_data<T: FeatureTransport + ?Sized>(&mut self, transport: &mut T) -> Result<()> {
        if !self.enabled {
            return Err(FeatureError::NotEnabled { feature: self.name() });
        }
        let raw = transport.read_raw(self.kind())?;
        tracing::debug!(
            feature = self.name(),
            timestamp = raw.timestamp,
            len = raw.data.len(),
            "raw read"
        );
        self.update(raw.timestamp, &raw.data, raw.offset)?;
        Ok(())
    }

    pub fn read_compass<T: FeatureTransport + ?Sized>(&mut self, transport: &mut T) -> Result<f64> {
        self.expect_kind(&[FeatureKind::Compass], "read_compass")?;
        self.read_data(transport)?;
        Ok(get_compass(self.last_sample()))
    }

    /// Latest orientation, read component by component.
    pub fn read_quaternion<T: FeatureTransport + ?Sized>(
        &mut self,
        transport: &mut T,
    ) -> Result<Quaternion> {
        self.expect_kind(
            &[FeatureKind::SensorFusion, FeatureKind::SensorFusionCompact],
            "read_quaternion",
        )?;
        self.read_data(transport)?;
        let s = self.last_sample();
        Ok(Quaternion { qi: get_qi(s), qj: get_qj(s), qk: get_qk(s), qs: get_qs(s) })
    }

    fn expect_kind(&self, allowed: &[FeatureKind], op: &str) -> Result<()> {
        if allowed.contains(&self.kind()) {
            return Ok(());
        }
        Err(FeatureError::InvalidOperation(format!("{op} not supported by {}", self.name())))
    }
}
