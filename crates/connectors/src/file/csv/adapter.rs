use crate::file::csv::error::FileError;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

/// Wraps a `csv::Reader` over a file or an in-memory buffer and captures the
/// header row up front.
pub struct CsvAdapter {
    pub entity: String,
    pub headers: Vec<String>,
    reader: csv::Reader<Box<dyn Read + Send>>,
}

impl std::fmt::Debug for CsvAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvAdapter")
            .field("entity", &self.entity)
            .field("headers", &self.headers)
            .finish()
    }
}

impl CsvAdapter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FileError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FileError::NotFound(path.display().to_string()));
        }

        let entity = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset")
            .to_string();

        let file = File::open(path)?;
        Self::from_reader(&entity, Box::new(file))
    }

    pub fn from_string(entity: &str, content: &str) -> Result<Self, FileError> {
        Self::from_reader(entity, Box::new(Cursor::new(content.as_bytes().to_vec())))
    }

    fn from_reader(entity: &str, inner: Box<dyn Read + Send>) -> Result<Self, FileError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            // Exports occasionally carry short rows; missing cells become null.
            .flexible(true)
            .from_reader(inner);

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        Ok(CsvAdapter {
            entity: entity.to_string(),
            headers,
            reader,
        })
    }

    pub fn records(&mut self) -> csv::StringRecordsIter<'_, Box<dyn Read + Send>> {
        self.reader.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_captures_trimmed_headers() {
        let adapter = CsvAdapter::from_string("matriculas", "Nome , CPF\nAna,123\n").unwrap();
        assert_eq!(adapter.headers, vec!["Nome", "CPF"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CsvAdapter::from_path("/nonexistent/roster.csv").unwrap_err();
        assert!(matches!(err, FileError::NotFound(_)));
    }
}
