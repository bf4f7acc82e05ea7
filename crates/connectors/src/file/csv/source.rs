use crate::file::csv::{
    adapter::CsvAdapter,
    error::FileError,
    metadata::CsvMetadata,
};
use model::{
    core::value::{FieldValue, Value},
    records::{dataset::Dataset, row::RowData},
};
use tracing::warn;

/// Materializes a whole CSV export as a `Dataset`. The expected volume is a
/// single school's annual enrollment, so there is no cursor or batching.
pub struct CsvDataSource {
    adapter: CsvAdapter,
}

impl CsvDataSource {
    pub fn new(adapter: CsvAdapter) -> Self {
        CsvDataSource { adapter }
    }

    pub fn metadata(&self) -> CsvMetadata {
        CsvMetadata::from_headers(&self.adapter.entity, &self.adapter.headers)
    }

    pub fn read_all(mut self) -> Result<Dataset, FileError> {
        let entity = self.adapter.entity.clone();
        let headers = self.adapter.headers.clone();

        let mut rows = Vec::new();
        let mut short_rows = 0usize;

        for record in self.adapter.records() {
            let record = record?;
            if record.len() < headers.len() {
                short_rows += 1;
            }

            let field_values = headers
                .iter()
                .enumerate()
                .map(|(i, hdr)| match record.get(i) {
                    Some(cell) if !cell.trim().is_empty() => {
                        FieldValue::new(hdr, Value::String(cell.to_string()))
                    }
                    _ => FieldValue::null(hdr),
                })
                .collect();

            rows.push(RowData::new(&entity, field_values));
        }

        if short_rows > 0 {
            warn!(
                "{} row(s) in '{}' were shorter than the header; missing cells read as null",
                short_rows, entity
            );
        }

        Ok(Dataset::new(&entity, headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn dataset_from(content: &str) -> Dataset {
        let adapter = CsvAdapter::from_string("matriculas", content).unwrap();
        CsvDataSource::new(adapter).read_all().unwrap()
    }

    #[test]
    fn test_read_all_preserves_row_count_and_headers() {
        let ds = dataset_from("Nome,CPF\nAna,111\nBia,222\n");
        assert_eq!(ds.columns, vec!["Nome", "CPF"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.rows[1].get_string("Nome"), Some("Bia".to_string()));
    }

    #[test]
    fn test_empty_cells_become_null() {
        let ds = dataset_from("Nome,CPF\nAna,\n");
        assert_eq!(ds.rows[0].get_value("CPF"), Value::Null);
    }

    #[test]
    fn test_short_rows_pad_with_null() {
        let ds = dataset_from("Nome,CPF,Sexo\nAna,111\n");
        assert_eq!(ds.rows[0].get_value("Sexo"), Value::Null);
        assert_eq!(ds.rows[0].get_string("CPF"), Some("111".to_string()));
    }

    #[test]
    fn test_read_all_from_file() {
        let mut tmp = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        write!(tmp, "Nome,CPF\nAna,111\n").unwrap();

        let adapter = CsvAdapter::from_path(tmp.path()).unwrap();
        let ds = CsvDataSource::new(adapter).read_all().unwrap();
        assert_eq!(ds.row_count(), 1);
    }
}
