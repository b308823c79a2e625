//! Line-oriented parsing of numeric fields.

use std::io::BufRead;

use crate::{
    errors::DelimitedMatrixError,
    options::{Delimiter, ParseOptions, Transform},
};

/// Data rows plus the count of blank and comment lines skipped.
pub(crate) struct ParsedRows {
    pub(crate) rows: Vec<Vec<f64>>,
    pub(crate) skipped: usize,
}

pub(crate) fn parse_rows<R: BufRead>(
    reader: R,
    options: &ParseOptions,
) -> Result<ParsedRows, DelimitedMatrixError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut skipped = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            skipped += 1;
            continue;
        }

        let row = parse_line(trimmed, number, options)?;
        if let Some(expected) = rows.first().map(Vec::len) {
            if row.len() != expected {
                return Err(DelimitedMatrixError::RaggedRow {
                    line: number,
                    expected,
                    actual: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DelimitedMatrixError::EmptyInput);
    }
    Ok(ParsedRows { rows, skipped })
}

fn parse_line(
    line: &str,
    number: usize,
    options: &ParseOptions,
) -> Result<Vec<f64>, DelimitedMatrixError> {
    split_fields(line, options.delimiter())
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_field(raw, number, index + 1, options.transform()))
        .collect()
}

pub(crate) fn split_fields(line: &str, delimiter: Delimiter) -> Vec<&str> {
    match delimiter {
        Delimiter::Auto => line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect(),
        Delimiter::Whitespace => line.split_whitespace().collect(),
        Delimiter::Comma => line.split(',').map(str::trim).collect(),
    }
}

fn parse_field(
    raw: &str,
    line: usize,
    field: usize,
    transform: Transform,
) -> Result<f64, DelimitedMatrixError> {
    let value: f64 = raw.parse().map_err(|_| DelimitedMatrixError::InvalidValue {
        line,
        field,
        value: raw.to_owned(),
    })?;
    if !value.is_finite() {
        return Err(DelimitedMatrixError::NonFinite { line, field });
    }
    match transform {
        Transform::None => Ok(value),
        Transform::Log10 if value > 0.0 => Ok(value.log10()),
        Transform::Log10 => Err(DelimitedMatrixError::NonPositive { line, field, value }),
    }
}
