//! CSV loading for categorical datasets.
use crate::data::dataset::{Dataset, Record};
use crate::error::Id3Error;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Reads a comma separated file whose first line names the attributes.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`Id3Error::Csv`] | File can't be opened or a row is malformed |
/// | [`Id3Error::InconsistentRowLength`] | Row has a different column count than the header |
#[instrument]
pub fn read_csv(path: &Path) -> Result<Dataset, Id3Error> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| Id3Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    load(reader, path)
}

/// Same as [`read_csv`], reading from any in-memory or streamed source.
pub fn read_csv_from<R: Read>(source: R) -> Result<Dataset, Id3Error> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    load(reader, Path::new("<reader>"))
}

fn load<R: Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Dataset, Id3Error> {
    let csv_error = |source| Id3Error::Csv {
        path: PathBuf::from(path),
        source,
    };

    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    debug!(columns = headers.len(), "read CSV header");

    let mut records = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let row = result.map_err(csv_error)?;
        if row.len() != headers.len() {
            return Err(Id3Error::InconsistentRowLength {
                row_index,
                expected: headers.len(),
                got: row.len(),
            });
        }
        records.push(
            headers
                .iter()
                .zip(row.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect::<Record>(),
        );
    }
    debug!(rows = records.len(), "read CSV records");

    Ok(Dataset::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_from() {
        let data = "Math,Statistics,class\nA,B,Yes\nB,B,No\n";
        let dataset = read_csv_from(data.as_bytes()).unwrap();
        assert_eq!(dataset.headers(), &["Math", "Statistics", "class"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].get("class").unwrap(), "No");
    }

    #[test]
    fn test_read_csv_header_only() {
        let dataset = read_csv_from("Math,class\n".as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.headers().len(), 2);
    }

    #[test]
    fn test_read_csv_short_row() {
        let data = "Math,Statistics,class\nA,B,Yes\nB,No\n";
        let result = read_csv_from(data.as_bytes());
        assert!(matches!(
            result,
            Err(Id3Error::InconsistentRowLength {
                row_index: 1,
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_read_csv_missing_file() {
        let result = read_csv(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(Id3Error::Csv { .. })));
    }
}
