use crate::{lookup::MunicipalityTable, transform::pipeline::Transform};
use chrono::{Datelike, NaiveDate};
use model::{
    core::value::Value,
    records::{columns, dataset::Dataset},
};

/// Day-first date parsing. The export mixes `DD/MM/YYYY` with ISO forms and
/// occasionally carries a time-of-day suffix; anything unparseable reads as
/// null and never aborts the run.
pub fn parse_date_day_first(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let head = trimmed.split_whitespace().next().unwrap_or(trimmed);
    let head = head.split('T').next().unwrap_or(head);

    for fmt in ["%d/%m/%Y", "%d/%m/%y", "%Y-%m-%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(head, fmt) {
            return Some(date);
        }
    }
    None
}

/// Parses the three date columns of the export into typed dates. Rendering
/// them back to `DD/MM/YYYY` is the report layer's job.
pub struct DateNormalizer {
    date_columns: Vec<&'static str>,
}

impl DateNormalizer {
    pub fn new() -> Self {
        DateNormalizer {
            date_columns: vec![
                columns::BIRTH_DATE,
                columns::ENROLLMENT_DATE,
                columns::LAST_PROCEDURE_DATE,
            ],
        }
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for DateNormalizer {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        let mut out = dataset.clone();
        let present: Vec<&str> = self
            .date_columns
            .iter()
            .copied()
            .filter(|c| out.has_column(c))
            .collect();

        for row in &mut out.rows {
            for col in &present {
                match row.get_value(col) {
                    Value::Date(_) | Value::Null => {}
                    other => {
                        let parsed = other.as_string().and_then(|s| parse_date_day_first(&s));
                        match parsed {
                            Some(date) => row.set(col, Value::Date(date)),
                            None => row.set_null(col),
                        }
                    }
                }
            }
        }
        out
    }
}

/// Age as of March 31 of the academic year, by calendar year/month/day
/// comparison.
pub struct AgeDerivation {
    academic_year: i32,
}

impl AgeDerivation {
    pub fn new(academic_year: i32) -> Self {
        AgeDerivation { academic_year }
    }

    fn age_on_reference(&self, birth: NaiveDate) -> i64 {
        let mut age = i64::from(self.academic_year - birth.year());
        if (3, 31) < (birth.month(), birth.day()) {
            age -= 1;
        }
        age
    }
}

impl Transform for AgeDerivation {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        if !dataset.has_column(columns::BIRTH_DATE) {
            return dataset.clone();
        }

        let age_col = columns::age_column(self.academic_year);
        let mut out = dataset.clone();
        out.add_column(&age_col);

        for row in &mut out.rows {
            match row.get_date(columns::BIRTH_DATE) {
                Some(birth) => {
                    let age = self.age_on_reference(birth);
                    row.set(&age_col, Value::Int(age));
                }
                None => row.set_null(&age_col),
            }
        }
        out
    }
}

/// Truncates the place of birth at the first `(`, trims, and resolves the
/// state through the municipality table: `Name(UF)` on a hit, the cleaned
/// name on a miss, empty on a null cell.
pub struct BirthplaceCleaner {
    municipalities: MunicipalityTable,
}

impl BirthplaceCleaner {
    pub fn new(municipalities: MunicipalityTable) -> Self {
        BirthplaceCleaner { municipalities }
    }
}

impl Transform for BirthplaceCleaner {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        if !dataset.has_column(columns::BIRTHPLACE) {
            return dataset.clone();
        }

        let mut out = dataset.clone();
        for row in &mut out.rows {
            let cleaned = match row.get_string(columns::BIRTHPLACE) {
                Some(raw) => {
                    let name = raw.split('(').next().unwrap_or("").trim().to_string();
                    match self.municipalities.get(&name) {
                        Some(state) => format!("{name}({state})"),
                        None => name,
                    }
                }
                None => String::new(),
            };
            row.set(columns::BIRTHPLACE, Value::String(cleaned));
        }
        out
    }
}

/// Consolidates the disability, giftedness and disorder flags into the
/// single column the document prints: "Sim" when any present source column
/// holds a non-null value other than "-".
pub struct SpecialNeedsConsolidator;

impl Transform for SpecialNeedsConsolidator {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        let sources: Vec<&str> = [columns::DISABILITY, columns::GIFTEDNESS, columns::DISORDER]
            .into_iter()
            .filter(|c| dataset.has_column(c))
            .collect();

        let mut out = dataset.clone();
        out.add_column(columns::SPECIAL_NEEDS);

        for row in &mut out.rows {
            let flagged = sources.iter().any(|col| {
                row.get_trimmed(col)
                    .is_some_and(|v| !v.is_empty() && v != "-")
            });
            let label = if flagged { "Sim" } else { "-" };
            row.set(columns::SPECIAL_NEEDS, Value::String(label.to_string()));
        }
        out
    }
}
