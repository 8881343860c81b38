use serde::{Deserialize, Serialize};

/// A numeric feature vector with one name per component.
///
/// Labels and values are parallel lists in a fixed order. The only way to
/// build one is from `(label, value)` pairs, so
/// `labels().len() == values().len()` holds for every instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build a vector from label/value pairs, preserving pair order.
    #[must_use]
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        for (label, value) in pairs {
            labels.push(label.into());
            values.push(value);
        }
        Self { labels, values }
    }

    /// Build an all-zero vector over the given labels.
    #[must_use]
    pub fn zeroed<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let values = vec![0.0; labels.len()];
        Self { labels, values }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up a component by label. Linear scan; vectors are built once and
    /// read rarely by name.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.values[i])
    }

    /// Iterate `(label, value)` pairs in component order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
