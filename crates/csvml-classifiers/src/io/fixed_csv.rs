//! Reader for headerless CSV files with a fixed number of rows.
//!
//! Every line holds `n_attributes` feature values followed by one label, all
//! parsed as `f32`. Exactly `n_rows` lines are consumed; anything after them
//! is ignored.
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::{StringRecord, Trim};
use ndarray::{Array1, Array2};

use crate::data_handling::{LabeledData, Schema};

/// Read `schema.n_rows` lines of `path` into a new feature matrix and label vector.
pub fn read_fixed_csv<P: AsRef<Path>>(path: P, schema: &Schema) -> Result<LabeledData> {
    let (features, labels) = parse_rows(path.as_ref(), schema)?;
    let x = Array2::from_shape_vec((schema.n_rows, schema.n_attributes), features)
        .context("Parsed feature count does not match schema")?;
    let y = Array1::from_vec(labels);
    Ok(LabeledData { x, y })
}

/// Fill caller-owned buffers from `path`.
///
/// The buffers must already have the schema's shape. They are only written
/// once the whole file has parsed, so on error both are left untouched.
pub fn read_fixed_csv_into<P: AsRef<Path>>(
    path: P,
    schema: &Schema,
    data: &mut Array2<f32>,
    classes: &mut Array1<f32>,
) -> Result<()> {
    if data.dim() != (schema.n_rows, schema.n_attributes) || classes.len() != schema.n_rows {
        bail!(
            "Buffers of shape {:?} and ({},) do not match schema {}x{}",
            data.dim(),
            classes.len(),
            schema.n_rows,
            schema.n_attributes
        );
    }

    let (features, labels) = parse_rows(path.as_ref(), schema)?;
    for (dst, src) in data.iter_mut().zip(features) {
        *dst = src;
    }
    for (dst, src) in classes.iter_mut().zip(labels) {
        *dst = src;
    }
    Ok(())
}

fn parse_rows(path: &Path, schema: &Schema) -> Result<(Vec<f32>, Vec<f32>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("ERROR opening file: {}", path.display()))?;

    let n_fields = schema.n_fields();
    let mut features = Vec::with_capacity(schema.n_rows * schema.n_attributes);
    let mut labels = Vec::with_capacity(schema.n_rows);
    let mut record = StringRecord::new();

    for row in 0..schema.n_rows {
        let has_record = reader
            .read_record(&mut record)
            .with_context(|| format!("Failed to read row {} of {}", row + 1, path.display()))?;
        if !has_record {
            bail!(
                "{} ends after {} rows; expected {}",
                path.display(),
                row,
                schema.n_rows
            );
        }

        let line = record.position().map_or(row as u64 + 1, |p| p.line());
        let n_values = count_values(&record);
        if n_values != n_fields {
            bail!(
                "Line {} of {} has {} fields; expected {}",
                line,
                path.display(),
                n_values,
                n_fields
            );
        }

        for (col, field) in record.iter().take(n_fields).enumerate() {
            let value = field.parse::<f32>().with_context(|| {
                format!(
                    "Invalid value {:?} at line {}, column {} of {}",
                    field,
                    line,
                    col + 1,
                    path.display()
                )
            })?;
            if col < schema.n_attributes {
                features.push(value);
            } else {
                labels.push(value);
            }
        }
    }

    log::debug!("Read {} rows from {}", labels.len(), path.display());
    Ok((features, labels))
}

// A single trailing comma ("...,1,") leaves an empty last field, which is not a value.
fn count_values(record: &StringRecord) -> usize {
    match record.iter().last() {
        Some("") if record.len() > 1 => record.len() - 1,
        _ => record.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_trailing_comma_is_accepted() {
        let file = write_temp("1,2,0,\n3,4,1,\n");
        let data = read_fixed_csv(file.path(), &Schema::new(2, 2)).unwrap();
        assert_eq!(data.x.row(1).to_vec(), vec![3.0, 4.0]);
        assert_eq!(data.y.to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_whitespace_around_fields() {
        let file = write_temp(" 1.5 , -2 ,1\n");
        let data = read_fixed_csv(file.path(), &Schema::new(1, 2)).unwrap();
        assert_eq!(data.x.row(0).to_vec(), vec![1.5, -2.0]);
        assert_eq!(data.y[0], 1.0);
    }

    #[test]
    fn test_extra_rows_are_ignored() {
        let file = write_temp("1,2,0\n3,4,1\n5,6,0\n");
        let data = read_fixed_csv(file.path(), &Schema::new(2, 2)).unwrap();
        assert_eq!(data.nrows(), 2);
        assert_eq!(data.y.to_vec(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_line_number_in_parse_error() {
        let file = write_temp("1,2,0\n3,x,1\n");
        let err = read_fixed_csv(file.path(), &Schema::new(2, 2)).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("line 2, column 2"), "unexpected message: {}", msg);
    }
}
