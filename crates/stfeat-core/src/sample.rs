// crates/stfeat-core/src/sample.rs

use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::{FeatureError, Result};
use crate::field::Field;

/// One decoded, timestamped set of values. `values[i]` belongs to `fields[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: u64,
    values: Vec<f64>,
    fields: &'static [Field],
}

impl Sample {
    pub fn new(timestamp: u64, values: Vec<f64>, fields: &'static [Field]) -> Result<Self> {
        if values.len() != fields.len() {
            return Err(FeatureError::FieldMismatch {
                expected: fields.len(),
                got: values.len(),
            });
        }
        Ok(Self { timestamp, values, fields })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub fn value(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// Value of the channel called `name`, if the feature has one.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .position(|f| f.name == name)
            .and_then(|i| self.value(i))
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ts={}", self.timestamp)?;
        for (field, v) in self.fields.iter().zip(self.values.iter()) {
            write!(f, " {}={}{}", field.name, v, field.unit)?;
        }
        Ok(())
    }
}

// Serialized as `{"timestamp": t, "values": {"<field>": v, ...}}` so the
// output stays labeled without repeating the full descriptors per sample.
impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = s.serialize_struct("Sample", 2)?;
        st.serialize_field("timestamp", &self.timestamp)?;
        st.serialize_field("values", &Labeled(self))?;
        st.end()
    }
}

struct Labeled<'a>(&'a Sample);

impl Serialize for Labeled<'_> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let mut m = s.serialize_map(Some(self.0.values.len()))?;
        for (field, v) in self.0.fields.iter().zip(self.0.values.iter()) {
            m.serialize_entry(field.name, v)?;
        }
        m.end()
    }
}

/// A decoded sample plus the number of payload bytes it used.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExtractedData {
    pub sample: Sample,
    pub bytes_consumed: usize,
}
