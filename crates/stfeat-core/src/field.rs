// crates/stfeat-core/src/field.rs

use serde::Serialize;

/// Numeric representation a channel is reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Float,
    Int64,
    UInt32,
    Int32,
    UInt16,
    Int16,
    UInt8,
    Int8,
    ByteArray,
}

/// Static description of one output channel of a feature.
///
/// `min`/`max` are advisory display bounds; decoders never enforce them.
/// Both set to [`Field::UNBOUNDED`] means the channel has no meaningful range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub unit: &'static str,
    pub field_type: FieldType,
    pub max: f64,
    pub min: f64,
}

impl Field {
    pub const UNBOUNDED: f64 = -1.0;

    pub const fn new(
        name: &'static str,
        unit: &'static str,
        field_type: FieldType,
        max: f64,
        min: f64,
    ) -> Self {
        Self { name, unit, field_type, max, min }
    }

    pub fn is_bounded(&self) -> bool {
        !(self.min == Self::UNBOUNDED && self.max == Self::UNBOUNDED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_bounds_are_unbounded() {
        let q = Field::new("qi", "", FieldType::Float, -1.0, -1.0);
        assert!(!q.is_bounded());
        let a = Field::new("Angle", "°", FieldType::Float, 360.0, 0.0);
        assert!(a.is_bounded());
    }
}
