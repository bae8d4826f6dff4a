//! Entropy and information gain over binary-labeled records.
use crate::data::dataset::{partition_by, Record};
use crate::error::Id3Error;
use crate::trees::params::BinaryLabels;

pub fn log2(x: f64) -> f64 {
    x.ln() / 2f64.ln()
}

/// Computes the binary entropy of `records` with respect to `class_attribute`.
///
/// Only the two literals in `labels` are counted; other class values are skipped,
/// and the fractions are taken over the counted records only. A set whose two
/// counts are equal has entropy 1.0.
///
/// # Errors
///
/// Returns [`Id3Error::MissingKey`] if a record has no class value.
pub fn calculate_entropy(
    records: &[&Record],
    class_attribute: &str,
    labels: &BinaryLabels,
) -> Result<f64, Id3Error> {
    if records.is_empty() {
        return Ok(0.0);
    }

    let mut positive = 0usize;
    let mut negative = 0usize;
    for record in records {
        let value = record.get(class_attribute)?;
        if value == labels.positive() {
            positive += 1;
        } else if value == labels.negative() {
            negative += 1;
        }
    }

    if positive == 0 || negative == 0 {
        return Ok(0.0);
    }
    if positive == negative {
        return Ok(1.0);
    }

    let total = (positive + negative) as f64;
    let p = positive as f64 / total;
    let q = negative as f64 / total;

    Ok(-p * log2(p) - q * log2(q))
}

/// Entropy of `records` minus the size-weighted entropy of its partition on `attribute`.
///
/// # Errors
///
/// Returns [`Id3Error::MissingKey`] if a record lacks `attribute` or the class attribute.
pub fn calculate_information_gain(
    records: &[&Record],
    attribute: &str,
    class_attribute: &str,
    labels: &BinaryLabels,
) -> Result<f64, Id3Error> {
    let entropy_before_split = calculate_entropy(records, class_attribute, labels)?;
    let num_records = records.len() as f64;

    let mut entropy_after_split = 0.0;
    for (_, subset) in partition_by(records, attribute)? {
        let weight = subset.len() as f64 / num_records;
        entropy_after_split += weight * calculate_entropy(&subset, class_attribute, labels)?;
    }

    Ok(entropy_before_split - entropy_after_split)
}

/// Picks the attribute with the highest information gain.
///
/// Ties keep the earliest attribute in `attributes`. Returns `Ok(None)` only when
/// `attributes` is empty.
///
/// # Errors
///
/// Propagates [`Id3Error::MissingKey`] from the gain computation.
pub fn choose_best_attribute<'a>(
    records: &[&Record],
    attributes: &[&'a str],
    class_attribute: &str,
    labels: &BinaryLabels,
) -> Result<Option<(&'a str, f64)>, Id3Error> {
    let mut best_attribute = None;
    let mut max_information_gain = -1.0;

    for &attribute in attributes {
        let information_gain =
            calculate_information_gain(records, attribute, class_attribute, labels)?;

        if best_attribute.is_none() || information_gain > max_information_gain {
            max_information_gain = information_gain;
            best_attribute = Some(attribute);
        }
    }

    Ok(best_attribute.map(|attribute| (attribute, max_information_gain)))
}
