/// Confusion matrix and accuracy for string class labels
pub mod confusion;
