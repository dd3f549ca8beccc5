use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label returned by a classifier
pub type Label = u32;

/// Half-open range of labels `0..count` a classifier may return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRange {
    count: u32,
}

impl LabelRange {
    /// Upper bound on the number of labels; one counter is kept per label
    pub const MAX_LABELS: u32 = 1024;

    /// Create a range of `count` labels. Returns `None` for an empty range
    /// or one larger than `MAX_LABELS`.
    pub fn new(count: u32) -> Option<Self> {
        (1..=Self::MAX_LABELS)
            .contains(&count)
            .then_some(Self { count })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn contains(&self, label: Label) -> bool {
        label < self.count
    }

    /// Largest label in the range
    pub fn max(&self) -> Label {
        self.count - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = Label> {
        0..self.count
    }
}

impl Default for LabelRange {
    fn default() -> Self {
        Self { count: 3 }
    }
}

impl fmt::Display for LabelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0..={}", self.max())
    }
}

/// Input features paired with the label predicted for them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(with = "features")]
    pub input: Vec<f64>,
    pub output: Label,
}

impl Prediction {
    pub fn new(input: Vec<f64>, output: Label) -> Self {
        Self { input, output }
    }
}

/// Feature (de)serialization that writes integral values without a fractional
/// part, so `[1,2,3]` is echoed back as `[1,2,3]` rather than `[1.0,2.0,3.0]`.
mod features {
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    // Above 2^53 not every integer is representable, keep float output there.
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            // -0.0 has no integer spelling, write it as a float.
            let negative_zero = *value == 0.0 && value.is_sign_negative();
            if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT && !negative_zero {
                seq.serialize_element(&(*value as i64))?;
            } else {
                seq.serialize_element(value)?;
            }
        }
        seq.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        Vec::<f64>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_range_rejects_empty() {
        assert!(LabelRange::new(0).is_none());
        let range = LabelRange::new(3).unwrap();
        assert_eq!(range.count(), 3);
        assert_eq!(range.max(), 2);
        assert!(range.contains(0));
        assert!(range.contains(2));
        assert!(!range.contains(3));
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(range.to_string(), "0..=2");
    }

    #[test]
    fn test_label_range_is_capped() {
        assert!(LabelRange::new(LabelRange::MAX_LABELS).is_some());
        assert!(LabelRange::new(LabelRange::MAX_LABELS + 1).is_none());
        assert!(LabelRange::new(u32::MAX).is_none());
    }

    #[test]
    fn test_negative_zero_keeps_its_sign() {
        let prediction = Prediction::new(vec![-0.0, 1.0, 0.0], 0);
        let body = serde_json::to_string(&prediction).unwrap();
        assert_eq!(body, r#"{"input":[-0.0,1,0],"output":0}"#);

        let echoed: Prediction = serde_json::from_str(&body).unwrap();
        assert!(echoed.input[0].is_sign_negative());
    }

    #[test]
    fn test_default_range_has_three_labels() {
        assert_eq!(LabelRange::default(), LabelRange::new(3).unwrap());
    }

    #[test]
    fn test_integral_features_are_written_as_integers() {
        let prediction = Prediction::new(vec![1.0, 2.0, 3.0], 1);
        let body = serde_json::to_string(&prediction).unwrap();
        assert_eq!(body, r#"{"input":[1,2,3],"output":1}"#);
    }

    #[test]
    fn test_fractional_features_keep_their_value() {
        let prediction = Prediction::new(vec![5.1, 3.5, 1.4, 0.2], 0);
        let value = serde_json::to_value(&prediction).unwrap();
        assert_eq!(value, json!({"input": [5.1, 3.5, 1.4, 0.2], "output": 0}));
    }

    #[test]
    fn test_negative_and_empty_features() {
        let prediction = Prediction::new(vec![-4.0, -0.5], 2);
        assert_eq!(
            serde_json::to_string(&prediction).unwrap(),
            r#"{"input":[-4,-0.5],"output":2}"#
        );

        let empty = Prediction::new(Vec::new(), 0);
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"input":[],"output":0}"#
        );
    }

    #[test]
    fn test_deserialize_accepts_mixed_numbers() {
        let prediction: Prediction =
            serde_json::from_str(r#"{"input":[1,2.5,-3e2],"output":2}"#).unwrap();
        assert_eq!(prediction.input, vec![1.0, 2.5, -300.0]);
        assert_eq!(prediction.output, 2);
    }
}
