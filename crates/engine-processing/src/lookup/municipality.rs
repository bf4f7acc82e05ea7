use crate::error::LookupError;
use connectors::file::csv::{adapter::CsvAdapter, source::CsvDataSource};
use model::records::dataset::Dataset;
use std::{collections::HashMap, path::Path};

const CITY: &str = "Município";
const STATE: &str = "UF";

/// City name to state abbreviation. Homonymous cities in different states
/// collapse to whichever row loads last; the export carries no state of its
/// own to disambiguate with.
#[derive(Debug, Clone, Default)]
pub struct MunicipalityTable {
    map: HashMap<String, String>,
}

impl MunicipalityTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let adapter = CsvAdapter::from_path(path)?;
        let dataset = CsvDataSource::new(adapter).read_all()?;
        Self::from_dataset(&dataset)
    }

    fn from_dataset(dataset: &Dataset) -> Result<Self, LookupError> {
        for required in [CITY, STATE] {
            if !dataset.has_column(required) {
                return Err(LookupError::MissingColumn {
                    table: dataset.entity.clone(),
                    column: required.to_string(),
                });
            }
        }

        let mut map = HashMap::new();
        for row in &dataset.rows {
            if let (Some(city), Some(state)) = (row.get_string(CITY), row.get_string(STATE)) {
                map.insert(city, state);
            }
        }

        Ok(MunicipalityTable { map })
    }

    pub fn insert(&mut self, city: &str, state: &str) {
        self.map.insert(city.to_string(), state.to_string());
    }

    pub fn get(&self, city: &str) -> Option<&str> {
        self.map.get(city).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_load_and_lookup() {
        let mut tmp = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
        write!(
            tmp,
            "Município,UF\nCampos dos Goytacazes,RJ\nSão Fidélis,RJ\nVitória,ES\n"
        )
        .unwrap();

        let table = MunicipalityTable::load(tmp.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("Vitória"), Some("ES"));
        assert_eq!(table.get("Niterói"), None);
    }
}
