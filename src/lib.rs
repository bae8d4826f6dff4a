//! # Rusty-id3
//!
//! `rusty-id3` builds ID3 decision trees over categorical data with a binary class label.
//! It also contains a CSV loader, a text renderer for trees and classification metrics.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! As a quick example, here's how you can build a tree on a small dataset and print it:
//!
//! ```rust
//!
//! use rusty_id3::data::dataset::Dataset;
//! use rusty_id3::trees::classifier::DecisionTreeClassifier;
//!
//! let dataset = Dataset::from_rows(
//!     &["Math", "Science", "class"],
//!     &[
//!         vec!["A", "B", "Yes"],
//!         vec!["A", "C", "Yes"],
//!         vec!["B", "B", "No"],
//!         vec!["B", "C", "No"],
//!     ],
//! );
//!
//! let mut model = DecisionTreeClassifier::new();
//!
//! model.fit(&dataset, &dataset.attributes_except("class")).unwrap();
//!
//! let tree = model.root().unwrap();
//! assert_eq!(tree.split_attribute(), Some("Math"));
//!
//! print!("{}", tree);
//! ```

/// Datasets, records and CSV loading
pub mod data;
/// Error type shared by the crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;

pub use error::Id3Error;
