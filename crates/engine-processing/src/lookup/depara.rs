use crate::error::LookupError;
use connectors::file::csv::{adapter::CsvAdapter, source::CsvDataSource};
use model::records::{columns, dataset::Dataset};
use std::{collections::HashMap, path::Path};

/// Enrichment produced by the course/period mapping: the curriculum group
/// printed on the document and the key the group sort runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeParaEntry {
    pub curriculum_group: String,
    pub sort_order: Option<i64>,
}

/// The "de-para" mapping, keyed by (course description, period-in-year).
/// Both key parts are strings; numeric periods are matched through their
/// string form.
#[derive(Debug, Clone, Default)]
pub struct DeParaTable {
    entries: HashMap<(String, String), DeParaEntry>,
}

impl DeParaTable {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let adapter = CsvAdapter::from_path(path)?;
        let dataset = CsvDataSource::new(adapter).read_all()?;
        Self::from_dataset(&dataset)
    }

    fn from_dataset(dataset: &Dataset) -> Result<Self, LookupError> {
        for required in [
            columns::COURSE_DESCRIPTION,
            columns::PERIOD_IN_YEAR,
            columns::CURRICULUM_GROUP,
        ] {
            if !dataset.has_column(required) {
                return Err(LookupError::MissingColumn {
                    table: dataset.entity.clone(),
                    column: required.to_string(),
                });
            }
        }

        let mut entries = HashMap::new();
        for row in &dataset.rows {
            let course = row.get_string(columns::COURSE_DESCRIPTION).unwrap_or_default();
            let period = row.get_string(columns::PERIOD_IN_YEAR).unwrap_or_default();
            let curriculum_group = row.get_string(columns::CURRICULUM_GROUP).unwrap_or_default();
            let sort_order = row
                .get_string(columns::SORT_ORDER)
                .and_then(|s| s.trim().parse::<i64>().ok());

            entries.insert(
                (course, period),
                DeParaEntry {
                    curriculum_group,
                    sort_order,
                },
            );
        }

        Ok(DeParaTable { entries })
    }

    pub fn insert(&mut self, course: &str, period: &str, entry: DeParaEntry) {
        self.entries
            .insert((course.to_string(), period.to_string()), entry);
    }

    pub fn get(&self, course: &str, period: &str) -> Option<&DeParaEntry> {
        self.entries
            .get(&(course.to_string(), period.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
