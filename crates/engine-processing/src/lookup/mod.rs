use std::path::Path;
use tracing::{info, warn};

pub mod depara;
pub mod municipality;

pub use depara::{DeParaEntry, DeParaTable};
pub use municipality::MunicipalityTable;

/// The two static reference tables the pipeline joins against. Loaded once
/// before any record processing and read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    pub depara: DeParaTable,
    pub municipalities: MunicipalityTable,
}

impl LookupTables {
    /// A load failure is a degraded run, not a failed one: the affected
    /// table stays empty, every join misses, and the pipeline continues.
    pub fn load_or_empty<P: AsRef<Path>>(depara_path: P, municipios_path: P) -> Self {
        let depara = match DeParaTable::load(&depara_path) {
            Ok(table) => {
                info!("Loaded {} DEPARA entries", table.len());
                table
            }
            Err(e) => {
                warn!(
                    "Could not load DEPARA table from '{}': {e}; continuing with an empty table",
                    depara_path.as_ref().display()
                );
                DeParaTable::default()
            }
        };

        let municipalities = match MunicipalityTable::load(&municipios_path) {
            Ok(table) => {
                info!("Loaded {} municipalities", table.len());
                table
            }
            Err(e) => {
                warn!(
                    "Could not load municipality table from '{}': {e}; continuing with an empty table",
                    municipios_path.as_ref().display()
                );
                MunicipalityTable::default()
            }
        };

        LookupTables {
            depara,
            municipalities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_empty_degrades_on_missing_files() {
        let tables = LookupTables::load_or_empty("/nonexistent/DEPARA.csv", "/nonexistent/m.csv");
        assert!(tables.depara.is_empty());
        assert!(tables.municipalities.is_empty());
    }
}
