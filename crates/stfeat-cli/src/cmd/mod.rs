// crates/stfeat-cli/src/cmd/mod.rs

use clap::ValueEnum;
use stfeat_core::{FeatureKind, ScalarPolicy};

pub mod decode;
pub mod fields;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FeatureArg {
    Compass,
    Fusion,
    FusionCompact,
}

impl From<FeatureArg> for FeatureKind {
    fn from(a: FeatureArg) -> Self {
        match a {
            FeatureArg::Compass => FeatureKind::Compass,
            FeatureArg::Fusion => FeatureKind::SensorFusion,
            FeatureArg::FusionCompact => FeatureKind::SensorFusionCompact,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    Propagate,
    Clamp,
    Reject,
}

impl From<PolicyArg> for ScalarPolicy {
    fn from(a: PolicyArg) -> Self {
        match a {
            PolicyArg::Propagate => ScalarPolicy::Propagate,
            PolicyArg::Clamp => ScalarPolicy::Clamp,
            PolicyArg::Reject => ScalarPolicy::Reject,
        }
    }
}
