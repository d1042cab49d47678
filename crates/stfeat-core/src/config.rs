// crates/stfeat-core/src/config.rs

/// What to do when the omitted quaternion scalar cannot be rebuilt because
/// the decoded vector part has `x²+y²+z² > 1` or a NaN component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScalarPolicy {
    /// `sqrt` of the negative radicand: the scalar comes out NaN.
    #[default]
    Propagate,
    /// Clamp the radicand into `[0, 1]`; an over-unit vector yields a zero scalar.
    /// A NaN component still yields NaN.
    Clamp,
    /// Fail the decode with `FeatureError::Reconstruction`.
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    pub scalar_policy: ScalarPolicy,
}

impl DecodeConfig {
    pub fn with_scalar_policy(mut self, policy: ScalarPolicy) -> Self {
        self.scalar_policy = policy;
        self
    }
}
