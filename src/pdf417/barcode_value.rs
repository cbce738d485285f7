//! Confidence voting for one grid position

use std::collections::BTreeMap;

/// Votes for the values seen at one position of the barcode matrix
#[derive(Debug, Clone, Default)]
pub(crate) struct BarcodeValue {
    values: BTreeMap<u32, u32>,
}

impl BarcodeValue {
    /// Add one vote for `value`
    pub(crate) fn set_value(&mut self, value: u32) {
        *self.values.entry(value).or_insert(0) += 1;
    }

    /// The values with the highest confidence, ascending. Empty when nothing
    /// was voted for; more than one entry on a tie.
    pub(crate) fn value(&self) -> Vec<u32> {
        let max_confidence = self.values.values().copied().max().unwrap_or(0);
        self.values
            .iter()
            .filter(|&(_, &confidence)| confidence == max_confidence)
            .map(|(&value, _)| value)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(BarcodeValue::default().value().is_empty());
    }

    #[test]
    fn test_majority_wins() {
        let mut value = BarcodeValue::default();
        value.set_value(17);
        value.set_value(400);
        value.set_value(400);
        assert_eq!(value.value(), vec![400]);
    }

    #[test]
    fn test_ties_are_ascending() {
        let mut value = BarcodeValue::default();
        for v in [900, 12, 500, 12, 900, 500] {
            value.set_value(v);
        }
        assert_eq!(value.value(), vec![12, 500, 900]);
    }
}
