//! Reads the input table of business addresses.

use crate::{error::AppError, AddressRecord, Result};
use ::csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::Path};

pub const COLUMN_STREET: &str = "endereco";
pub const COLUMN_NUMBER: &str = "numero";
pub const COLUMN_POSTAL_CODE: &str = "cep";

pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_STREET, COLUMN_NUMBER, COLUMN_POSTAL_CODE];

pub const DEFAULT_DELIMITER: u8 = b',';

// Positions of the required columns within a row.
struct ColumnIndex {
    street: usize,
    number: usize,
    postal_code: usize,
}

impl ColumnIndex {
    fn try_from_headers(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(**name).is_none())
            .map(ToString::to_string)
            .collect();
        match (
            position(COLUMN_STREET),
            position(COLUMN_NUMBER),
            position(COLUMN_POSTAL_CODE),
        ) {
            (Some(street), Some(number), Some(postal_code)) => Ok(Self {
                street,
                number,
                postal_code,
            }),
            _ => Err(AppError::MissingColumns(missing)),
        }
    }

    fn record(&self, row: &StringRecord) -> Result<AddressRecord> {
        let field = |idx: usize, column: &str| match row.get(idx) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(AppError::EmptyField {
                line: row.position().map(|p| p.line()).unwrap_or_default(),
                column: column.to_owned(),
            }),
        };
        let street = field(self.street, COLUMN_STREET)?;
        let number = field(self.number, COLUMN_NUMBER)?;
        let postal_code = field(self.postal_code, COLUMN_POSTAL_CODE)?;
        Ok(AddressRecord::new(street, number, postal_code))
    }
}

/// Loads all address records in file order.
///
/// The first row must name the columns `endereco`, `numero` and `cep`
/// (any order, case-insensitive), other columns are ignored.
/// An empty table is not an error here.
pub fn load_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<AddressRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(Trim::All)
        .from_reader(reader);
    let columns = ColumnIndex::try_from_headers(rdr.headers()?)?;
    let mut records = vec![];
    for row in rdr.records() {
        records.push(columns.record(&row?)?);
    }
    log::debug!("Loaded {} address records", records.len());
    Ok(records)
}

pub fn load_records_from_path<P: AsRef<Path>>(
    path: P,
    delimiter: u8,
) -> Result<Vec<AddressRecord>> {
    log::info!("Loading address records from {}", path.as_ref().display());
    let file = File::open(path.as_ref())?;
    load_records(file, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_required_columns_in_any_order() {
        let data = "\
nome,CEP,numero,endereco
Padaria,57000-000,10,Rua A
Oficina,57000-001,20,Rua B
";
        let records = load_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap();
        assert_eq!(
            vec![
                AddressRecord::new("Rua A", "10", "57000-000"),
                AddressRecord::new("Rua B", "20", "57000-001"),
            ],
            records
        );
    }

    #[test]
    fn load_with_semicolon_delimiter() {
        let data = "endereco;numero;cep\nRua A, bloco 2; 10 ;57000-000\n";
        let records = load_records(data.as_bytes(), b';').unwrap();
        assert_eq!("Rua A, bloco 2, 10, 57000-000", records[0].full_address());
    }

    #[test]
    fn report_all_missing_columns() {
        let data = "endereco,bairro\nRua A,Centro\n";
        let err = load_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap_err();
        match err {
            AppError::MissingColumns(cols) => assert_eq!(vec!["numero", "cep"], cols),
            _ => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn reject_empty_fields() {
        let data = "endereco,numero,cep\nRua A,10,57000-000\nRua B,  ,57000-001\n";
        let err = load_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap_err();
        match err {
            AppError::EmptyField { line, column } => {
                assert_eq!(3, line);
                assert_eq!("numero", column);
            }
            _ => panic!("unexpected error: {err}"),
        }
    }

    #[test]
    fn header_only_yields_no_records() {
        let data = "endereco,numero,cep\n";
        let records = load_records(data.as_bytes(), DEFAULT_DELIMITER).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_file() {
        let err = load_records_from_path("does/not/exist.csv", DEFAULT_DELIMITER).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
