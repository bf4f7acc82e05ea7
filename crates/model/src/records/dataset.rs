use crate::records::row::RowData;
use serde::{Deserialize, Serialize};

/// The full in-memory record set a pipeline stage consumes and produces.
///
/// `columns` is the header vocabulary captured when the source file was
/// read. Derivations that require a column check it here, at dataset level:
/// a missing column skips the whole derivation instead of being applied to
/// some rows and not others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub entity: String,
    pub columns: Vec<String>,
    pub rows: Vec<RowData>,
}

impl Dataset {
    pub fn new(entity: &str, columns: Vec<String>, rows: Vec<RowData>) -> Self {
        Dataset {
            entity: entity.to_string(),
            columns,
            rows,
        }
    }

    pub fn empty(entity: &str) -> Self {
        Dataset {
            entity: entity.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Registers a derived column. Idempotent.
    pub fn add_column(&mut self, name: &str) {
        if !self.has_column(name) {
            self.columns.push(name.to_string());
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_column_is_case_insensitive() {
        let ds = Dataset::new("matriculas", vec!["Nome".into(), "CPF".into()], vec![]);
        assert!(ds.has_column("nome"));
        assert!(ds.has_column("cpf"));
        assert!(!ds.has_column("Sexo"));
    }

    #[test]
    fn test_add_column_is_idempotent() {
        let mut ds = Dataset::empty("matriculas");
        ds.add_column("Pós Censo");
        ds.add_column("Pós Censo");
        assert_eq!(ds.columns.len(), 1);
    }
}
