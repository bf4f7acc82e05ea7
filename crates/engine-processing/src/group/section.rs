use model::{
    core::value::Value,
    records::{columns, dataset::Dataset, row::RowData},
};
use std::{cmp::Ordering, collections::BTreeMap};

/// Records with no class section land in this implicit group.
pub const IMPLICIT_SECTION: &str = "Única";

/// One class section's records: the unit of pagination and header context
/// in the final document.
#[derive(Debug, Clone)]
pub struct SectionGroup {
    pub section: String,
    pub rows: Vec<RowData>,
}

/// Splits the dataset by section name, ascending. Rows with a null/empty
/// section, or every row when the column is absent, form the implicit
/// group.
pub fn partition(dataset: &Dataset) -> Vec<SectionGroup> {
    let has_section = dataset.has_column(columns::SECTION);

    let mut by_section: BTreeMap<String, Vec<RowData>> = BTreeMap::new();
    for row in &dataset.rows {
        let section = if has_section {
            row.get_trimmed(columns::SECTION)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| IMPLICIT_SECTION.to_string())
        } else {
            IMPLICIT_SECTION.to_string()
        };
        by_section.entry(section).or_default().push(row.clone());
    }

    by_section
        .into_iter()
        .map(|(section, rows)| SectionGroup { section, rows })
        .collect()
}

fn sort_key(row: &RowData) -> Option<i64> {
    row.get_value(columns::SORT_ORDER).as_i64()
}

fn name_key(row: &RowData) -> String {
    row.get_string(columns::NAME).unwrap_or_default()
}

/// Stable in-group ordering: curriculum sort key ascending with missing
/// keys last, then name ascending (locale-naive).
pub fn sort_rows(rows: &mut [RowData]) {
    rows.sort_by(|a, b| {
        match (sort_key(a), sort_key(b)) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| name_key(a).cmp(&name_key(b))),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => name_key(a).cmp(&name_key(b)),
        }
    });
}

/// Writes the 1-based display index in final sort order, replacing any
/// index carried in from the source file.
pub fn assign_display_index(rows: &mut [RowData]) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.set(columns::DISPLAY_INDEX, Value::Int(i as i64 + 1));
    }
}
