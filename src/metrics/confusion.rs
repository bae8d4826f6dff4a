use crate::error::Id3Error;
use nalgebra::{DMatrix, DVector};
use std::fmt::{self, Display, Formatter};

/// Counts of (true label, predicted label) pairs.
///
/// Rows are true labels, columns predicted labels, both in sorted `classes` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub classes: Vec<String>,
    pub counts: DMatrix<usize>,
}

impl ConfusionMatrix {
    pub fn total(&self) -> usize {
        self.counts.sum()
    }

    pub fn correct(&self) -> usize {
        self.counts.diagonal().sum()
    }
}

impl Display for ConfusionMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(String::len)
            .chain(self.counts.iter().map(|c| c.to_string().len()))
            .max()
            .unwrap_or(1);

        write!(f, "{:width$}", "", width = width)?;
        for class in &self.classes {
            write!(f, " {:>width$}", class, width = width)?;
        }
        writeln!(f)?;
        for (row, class) in self.classes.iter().enumerate() {
            write!(f, "{:width$}", class, width = width)?;
            for col in 0..self.classes.len() {
                write!(f, " {:>width$}", self.counts[(row, col)], width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The confusion matrix over the sorted union of both label sets.
    fn confusion_matrix(
        &self,
        y_true: &DVector<String>,
        y_pred: &DVector<String>,
    ) -> Result<ConfusionMatrix, Id3Error> {
        if y_true.len() != y_pred.len() {
            return Err(Id3Error::LengthMismatch {
                expected: y_true.len(),
                got: y_pred.len(),
            });
        }

        let mut classes = y_true.iter().chain(y_pred.iter()).cloned().collect::<Vec<_>>();
        classes.sort();
        classes.dedup();

        let mut counts = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            let (Ok(row), Ok(col)) = (classes.binary_search(y_t), classes.binary_search(y_p))
            else {
                continue;
            };
            counts[(row, col)] += 1;
        }

        Ok(ConfusionMatrix { classes, counts })
    }

    /// Computes the share of predictions equal to the true label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label vectors differ in length or are empty.
    fn accuracy(&self, y_true: &DVector<String>, y_pred: &DVector<String>) -> Result<f64, Id3Error> {
        if y_true.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }
        let matrix = self.confusion_matrix(y_true, y_pred)?;

        Ok(matrix.correct() as f64 / matrix.total() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct MockClassifier;

    impl ClassificationMetrics for MockClassifier {}

    fn labels(values: &[&str]) -> DVector<String> {
        DVector::from_vec(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_confusion_matrix() {
        let y_true = labels(&["Yes", "No", "Yes", "No", "Yes"]);
        let y_pred = labels(&["Yes", "Yes", "No", "No", "Yes"]);

        let result = MockClassifier.confusion_matrix(&y_true, &y_pred).unwrap();

        assert_eq!(result.classes, vec!["No", "Yes"]);
        let expected = DMatrix::from_row_slice(2, 2, &[1, 1, 1, 2]);
        assert_eq!(result.counts, expected);
        assert_eq!(result.total(), 5);
        assert_eq!(result.correct(), 3);
    }

    #[test]
    fn test_confusion_matrix_unequal() {
        let y_true = labels(&["Yes", "No", "Yes"]);
        let y_pred = labels(&["Yes", "No"]);

        assert!(matches!(
            MockClassifier.confusion_matrix(&y_true, &y_pred),
            Err(Id3Error::LengthMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_confusion_matrix_display() {
        let y_true = labels(&["Yes", "No"]);
        let y_pred = labels(&["Yes", "Yes"]);
        let matrix = MockClassifier.confusion_matrix(&y_true, &y_pred).unwrap();

        let expected = concat!("     No Yes\n", "No    0   1\n", "Yes   0   1\n");
        assert_eq!(matrix.to_string(), expected);
    }

    #[test]
    fn test_accuracy() {
        let y_true = labels(&["Yes", "No", "Yes", "No"]);
        let y_pred = labels(&["Yes", "No", "No", "No"]);

        let accuracy = MockClassifier.accuracy(&y_true, &y_pred).unwrap();
        assert_relative_eq!(accuracy, 0.75);
    }

    #[test]
    fn test_accuracy_empty() {
        let empty = labels(&[]);
        assert!(MockClassifier.accuracy(&empty, &empty).is_err());
    }
}
