use crate::error::Id3Error;

pub const DEFAULT_CLASS_ATTRIBUTE: &str = "class";
pub const DEFAULT_POSITIVE_LABEL: &str = "Yes";
pub const DEFAULT_NEGATIVE_LABEL: &str = "No";

/// The two class literals entropy is computed over.
///
/// Matching is exact and case-sensitive; any other class value is ignored by entropy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryLabels {
    positive: String,
    negative: String,
}

impl Default for BinaryLabels {
    fn default() -> Self {
        Self {
            positive: DEFAULT_POSITIVE_LABEL.to_string(),
            negative: DEFAULT_NEGATIVE_LABEL.to_string(),
        }
    }
}

impl BinaryLabels {
    pub fn new(positive: &str, negative: &str) -> Result<Self, Id3Error> {
        if positive == negative {
            return Err(Id3Error::InvalidParameter(
                "The positive and negative labels must differ.".to_string(),
            ));
        }
        Ok(Self {
            positive: positive.to_string(),
            negative: negative.to_string(),
        })
    }

    pub fn positive(&self) -> &str {
        &self.positive
    }

    pub fn negative(&self) -> &str {
        &self.negative
    }
}

#[derive(Clone, Debug)]
pub struct Id3Params {
    pub class_attribute: String,
    pub labels: BinaryLabels,
    pub parallel: bool,
}

impl Default for Id3Params {
    fn default() -> Self {
        Self::new()
    }
}

impl Id3Params {
    pub fn new() -> Self {
        Self {
            class_attribute: DEFAULT_CLASS_ATTRIBUTE.to_string(),
            labels: BinaryLabels::default(),
            parallel: false,
        }
    }

    pub fn set_class_attribute(&mut self, class_attribute: String) -> Result<(), Id3Error> {
        if class_attribute.is_empty() {
            return Err(Id3Error::InvalidParameter(
                "The class attribute name must not be empty.".to_string(),
            ));
        }
        self.class_attribute = class_attribute;
        Ok(())
    }

    pub fn set_labels(&mut self, positive: &str, negative: &str) -> Result<(), Id3Error> {
        self.labels = BinaryLabels::new(positive, negative)?;
        Ok(())
    }

    /// Builds sibling subtrees on the rayon thread pool when enabled.
    pub fn set_parallel(&mut self, parallel: bool) {
        self.parallel = parallel;
    }

    pub fn class_attribute(&self) -> &str {
        &self.class_attribute
    }

    pub fn labels(&self) -> &BinaryLabels {
        &self.labels
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Id3Params::default();
        assert_eq!(params.class_attribute(), "class");
        assert_eq!(params.labels().positive(), "Yes");
        assert_eq!(params.labels().negative(), "No");
        assert!(!params.parallel());
    }

    #[test]
    fn test_set_class_attribute_empty() {
        let mut params = Id3Params::new();
        assert!(params.set_class_attribute(String::new()).is_err());
        assert!(params.set_class_attribute("passed".to_string()).is_ok());
        assert_eq!(params.class_attribute(), "passed");
    }

    #[test]
    fn test_set_labels_must_differ() {
        let mut params = Id3Params::new();
        assert!(params.set_labels("Yes", "Yes").is_err());
        params.set_labels("pass", "fail").unwrap();
        assert_eq!(params.labels().positive(), "pass");
    }
}
