use crate::error::Id3Error;
use nalgebra::DVector;
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

/// A single labeled example: attribute name to categorical value.
///
/// The class attribute is stored like any other attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    values: HashMap<String, String>,
}

impl Record {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Returns the value stored for `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::MissingKey`] if the record has no such attribute.
    pub fn get(&self, attribute: &str) -> Result<&str, Id3Error> {
        self.values
            .get(attribute)
            .map(String::as_str)
            .ok_or_else(|| Id3Error::MissingKey {
                attribute: attribute.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An ordered set of records together with the column names they were read with.
#[derive(Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        writeln!(f, "    headers: {:?},", self.headers)?;
        writeln!(f, "    records: [")?;
        for record in &self.records {
            write!(f, "        [")?;
            for header in &self.headers {
                write!(f, "{}, ", record.get(header).unwrap_or("?"))?;
            }
            writeln!(f, "],")?;
        }
        write!(f, "    ]\n}}")
    }
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// Builds a dataset from a header and positional rows.
    ///
    /// Rows shorter than the header produce records without the trailing attributes.
    pub fn from_rows<S: AsRef<str>>(headers: &[S], rows: &[Vec<S>]) -> Self {
        let headers = headers
            .iter()
            .map(|h| h.as_ref().to_string())
            .collect::<Vec<_>>();
        let records = rows
            .iter()
            .map(|row| {
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(h, v)| (h.clone(), v.as_ref().to_string()))
                    .collect::<Record>()
            })
            .collect();
        Self::new(headers, records)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Borrowed view over all records, the form the tree algorithms work on.
    pub fn view(&self) -> Vec<&Record> {
        self.records.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Column names in header order, without `class_attribute`.
    pub fn attributes_except(&self, class_attribute: &str) -> Vec<String> {
        self.headers
            .iter()
            .filter(|h| h.as_str() != class_attribute)
            .cloned()
            .collect()
    }

    /// Collects the values of `attribute` for every record.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::MissingKey`] if any record lacks the attribute.
    pub fn column(&self, attribute: &str) -> Result<DVector<String>, Id3Error> {
        let values = self
            .records
            .iter()
            .map(|record| record.get(attribute).map(str::to_string))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DVector::from_vec(values))
    }

    /// Shuffles the records and splits them into a train and a test dataset.
    ///
    /// # Errors
    ///
    /// Returns [`Id3Error::InvalidParameter`] if `train_size` is outside `[0.0, 1.0]`.
    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), Id3Error> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(Id3Error::InvalidParameter(
                "Train size should be between 0.0 and 1.0".to_string(),
            ));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.records.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.records.len() as f64 * train_size).floor() as usize;
        let (train_indices, test_indices) = indices.split_at(train_size);

        let pick = |indices: &[usize]| {
            indices
                .iter()
                .map(|&index| self.records[index].clone())
                .collect::<Vec<_>>()
        };

        Ok((
            Self::new(self.headers.clone(), pick(train_indices)),
            Self::new(self.headers.clone(), pick(test_indices)),
        ))
    }
}

/// Groups records by their value of `attribute`, groups in first-seen order.
///
/// # Errors
///
/// Returns [`Id3Error::MissingKey`] if any record lacks the attribute.
pub fn partition_by<'a>(
    records: &[&'a Record],
    attribute: &str,
) -> Result<Vec<(&'a str, Vec<&'a Record>)>, Id3Error> {
    let mut groups: Vec<(&'a str, Vec<&'a Record>)> = Vec::new();
    for &record in records {
        let value = record.get(attribute)?;
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, group)) => group.push(record),
            None => groups.push((value, vec![record])),
        }
    }
    Ok(groups)
}

/// Counts the occurrences of each value of `attribute`, in first-seen order.
///
/// # Errors
///
/// Returns [`Id3Error::MissingKey`] if any record lacks the attribute.
pub fn value_counts<'a>(
    records: &[&'a Record],
    attribute: &str,
) -> Result<Vec<(&'a str, usize)>, Id3Error> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for record in records {
        let value = record.get(attribute)?;
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => counts.push((value, 1)),
        }
    }
    Ok(counts)
}
