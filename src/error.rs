use std::path::PathBuf;

/// Errors raised while loading data, building or using a decision tree.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// A record has no value for an attribute the algorithm needs.
    #[error("record has no value for attribute '{attribute}'")]
    MissingKey {
        /// The attribute that could not be looked up.
        attribute: String,
    },

    /// An operation that needs at least one record got none.
    #[error("dataset has no records")]
    EmptyDataset,

    /// A candidate attribute is not a column of the dataset.
    #[error("attribute '{attribute}' is not a column of the dataset")]
    UnknownAttribute {
        /// The unknown attribute name.
        attribute: String,
    },

    /// The class attribute was passed as a split candidate.
    #[error("class attribute '{attribute}' cannot be used as a split candidate")]
    ClassAttributeAsCandidate {
        /// The class attribute name.
        attribute: String,
    },

    /// A parameter value is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Prediction was requested before the tree was built.
    #[error("tree wasn't built yet")]
    NotFitted,

    /// Two label sequences that must be aligned have different lengths.
    #[error("predictions and labels are of different sizes: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the true labels.
        expected: usize,
        /// Length of the predicted labels.
        got: usize,
    },

    /// A CSV row has a different number of fields than the header.
    #[error("row {row_index} has {got} fields, expected {expected}")]
    InconsistentRowLength {
        /// Zero-based index of the data row (header excluded).
        row_index: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields in the row.
        got: usize,
    },

    /// The CSV source could not be opened or parsed.
    #[error("failed to read CSV from {path}")]
    Csv {
        /// Source path, or `<reader>` for in-memory input.
        path: PathBuf,
        /// The underlying csv error.
        source: csv::Error,
    },
}
