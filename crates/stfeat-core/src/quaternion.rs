// crates/stfeat-core/src/quaternion.rs

use serde::Serialize;

use crate::config::ScalarPolicy;
use crate::error::{FeatureError, Result};
use crate::field::{Field, FieldType};
use crate::sample::Sample;

pub const QI_INDEX: usize = 0;
pub const QJ_INDEX: usize = 1;
pub const QK_INDEX: usize = 2;
pub const QS_INDEX: usize = 3;

/// Descriptors shared by both fusion features.
pub static QUATERNION_FIELDS: [Field; 4] = [
    Field::new("qi", "", FieldType::Float, Field::UNBOUNDED, Field::UNBOUNDED),
    Field::new("qj", "", FieldType::Float, Field::UNBOUNDED, Field::UNBOUNDED),
    Field::new("qk", "", FieldType::Float, Field::UNBOUNDED, Field::UNBOUNDED),
    Field::new("qs", "", FieldType::Float, Field::UNBOUNDED, Field::UNBOUNDED),
];

/// Rebuild the scalar of a unit quaternion from its vector part.
///
/// A vector part outside the unit ball, or one with a NaN component, goes
/// through `policy`. `Clamp` has nothing to clamp for NaN and returns NaN.
pub fn reconstruct_scalar(qi: f64, qj: f64, qk: f64, policy: ScalarPolicy) -> Result<f64> {
    let norm_sq = qi * qi + qj * qj + qk * qk;
    let radicand = 1.0 - norm_sq;
    if radicand.is_nan() || radicand < 0.0 {
        tracing::warn!(norm_sq, ?policy, "quaternion vector part outside unit ball");
        match policy {
            ScalarPolicy::Propagate => {}
            ScalarPolicy::Clamp if radicand.is_nan() => {}
            ScalarPolicy::Clamp => return Ok(0.0),
            ScalarPolicy::Reject => return Err(FeatureError::Reconstruction { norm_sq }),
        }
    }
    Ok(radicand.sqrt())
}

/// Scale all four components to unit norm. A zero quaternion comes out as NaNs.
pub fn normalize(q: [f64; 4]) -> [f64; 4] {
    let norm = q.iter().map(|c| c * c).sum::<f64>().sqrt();
    q.map(|c| c / norm)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Quaternion {
    pub qi: f64,
    pub qj: f64,
    pub qk: f64,
    pub qs: f64,
}

impl Quaternion {
    /// `None` unless the sample carries all four components.
    pub fn from_sample(sample: Option<&Sample>) -> Option<Self> {
        let v = sample?.values();
        if v.len() < 4 {
            return None;
        }
        Some(Self { qi: v[QI_INDEX], qj: v[QJ_INDEX], qk: v[QK_INDEX], qs: v[QS_INDEX] })
    }

    pub fn norm(&self) -> f64 {
        (self.qi * self.qi + self.qj * self.qj + self.qk * self.qk + self.qs * self.qs).sqrt()
    }
}

fn component(sample: Option<&Sample>, i: usize) -> f64 {
    sample.and_then(|s| s.value(i)).unwrap_or(f64::NAN)
}

pub fn get_qi(sample: Option<&Sample>) -> f64 {
    component(sample, QI_INDEX)
}

pub fn get_qj(sample: Option<&Sample>) -> f64 {
    component(sample, QJ_INDEX)
}

pub fn get_qk(sample: Option<&Sample>) -> f64 {
    component(sample, QK_INDEX)
}

pub fn get_qs(sample: Option<&Sample>) -> f64 {
    component(sample, QS_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_policy_on_over_unit_vector() {
        assert!(reconstruct_scalar(1.0, 1.0, 0.0, ScalarPolicy::Propagate).unwrap().is_nan());
        assert_eq!(reconstruct_scalar(1.0, 1.0, 0.0, ScalarPolicy::Clamp).unwrap(), 0.0);
        let err = reconstruct_scalar(1.0, 1.0, 0.0, ScalarPolicy::Reject).unwrap_err();
        assert_eq!(err, FeatureError::Reconstruction { norm_sq: 2.0 });
    }

    #[test]
    fn nan_vector_goes_through_policy() {
        assert!(reconstruct_scalar(f64::NAN, 0.0, 0.0, ScalarPolicy::Propagate).unwrap().is_nan());
        assert!(reconstruct_scalar(f64::NAN, 0.0, 0.0, ScalarPolicy::Clamp).unwrap().is_nan());
        assert!(matches!(
            reconstruct_scalar(0.0, f64::NAN, 0.0, ScalarPolicy::Reject),
            Err(FeatureError::Reconstruction { norm_sq }) if norm_sq.is_nan()
        ));
    }

    #[test]
    fn policies_agree_inside_unit_ball() {
        for p in [ScalarPolicy::Propagate, ScalarPolicy::Clamp, ScalarPolicy::Reject] {
            assert_eq!(reconstruct_scalar(0.5, 0.5, 0.5, p).unwrap(), 0.5);
        }
    }

    #[test]
    fn zero_quaternion_normalizes_to_nan() {
        assert!(normalize([0.0; 4]).iter().all(|c| c.is_nan()));
    }
}
