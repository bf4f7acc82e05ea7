use crate::{lookup::DeParaTable, transform::pipeline::Transform};
use chrono::NaiveDate;
use model::{
    core::value::Value,
    records::{columns, dataset::Dataset},
};
use tracing::warn;

const EARLY_CHILDHOOD: &str = "Educação Infantil";
const APPROVED: &str = "Aprovado";
const FAILED: &str = "Reprovado";
const NO_MOVEMENT: &str = "Sem Movimentação";
const AGE_ADJUSTMENT: &str = "Ajuste de Idade";
const PARTIAL_PROGRESSION: &str = "Aprovado com Progressão Parcial";
const PARTIAL_PROGRESSION_SHORT: &str = "Aprovado com Prog. Parcial";

/// Situations whose date is printed on the document.
const DATED_SITUATIONS: [&str; 2] = ["Transferido", "Transf. Externa"];

/// Left join against the course/period mapping. Every input row survives;
/// unmatched rows carry null enrichment.
pub struct DeParaJoin {
    table: DeParaTable,
}

impl DeParaJoin {
    pub fn new(table: DeParaTable) -> Self {
        DeParaJoin { table }
    }
}

impl Transform for DeParaJoin {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        if !dataset.has_column(columns::COURSE_DESCRIPTION)
            || !dataset.has_column(columns::PERIOD_IN_YEAR)
        {
            warn!(
                "Columns '{}' and '{}' not found; skipping the DEPARA join",
                columns::COURSE_DESCRIPTION,
                columns::PERIOD_IN_YEAR
            );
            return dataset.clone();
        }

        let mut out = dataset.clone();
        out.add_column(columns::CURRICULUM_GROUP);
        out.add_column(columns::SORT_ORDER);

        for row in &mut out.rows {
            let course = row.get_string(columns::COURSE_DESCRIPTION).unwrap_or_default();
            let period = row.get_string(columns::PERIOD_IN_YEAR).unwrap_or_default();

            match self.table.get(&course, &period) {
                Some(entry) => {
                    row.set(
                        columns::CURRICULUM_GROUP,
                        Value::String(entry.curriculum_group.clone()),
                    );
                    match entry.sort_order {
                        Some(order) => row.set(columns::SORT_ORDER, Value::Int(order)),
                        None => row.set_null(columns::SORT_ORDER),
                    }
                }
                None => {
                    row.set_null(columns::CURRICULUM_GROUP);
                    row.set_null(columns::SORT_ORDER);
                }
            }
        }
        out
    }
}

/// Situation label remapping. Early-childhood approvals and failures get
/// registrar wording, and the long partial-progression label is shortened
/// regardless of course. Matching is exact on trimmed values, which are
/// also written back trimmed.
pub struct SituationRemapper;

impl Transform for SituationRemapper {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        if !dataset.has_column(columns::SITUATION) {
            return dataset.clone();
        }
        let has_course = dataset.has_column(columns::COURSE_DESCRIPTION);

        let mut out = dataset.clone();
        for row in &mut out.rows {
            if has_course {
                if let Some(course) = row.get_trimmed(columns::COURSE_DESCRIPTION) {
                    row.set(columns::COURSE_DESCRIPTION, Value::String(course));
                }
            }

            let Some(mut situation) = row.get_trimmed(columns::SITUATION) else {
                continue;
            };

            if has_course {
                let course = row.get_trimmed(columns::COURSE_DESCRIPTION).unwrap_or_default();
                if course == EARLY_CHILDHOOD {
                    if situation == APPROVED {
                        situation = NO_MOVEMENT.to_string();
                    } else if situation == FAILED {
                        situation = AGE_ADJUSTMENT.to_string();
                    }
                }
            }

            if situation == PARTIAL_PROGRESSION {
                situation = PARTIAL_PROGRESSION_SHORT.to_string();
            }

            row.set(columns::SITUATION, Value::String(situation));
        }
        out
    }
}

/// The last-procedure date is only printed for transfers; every other
/// situation shows "-". A transfer without a parseable date also shows "-".
pub struct SituationDateVisibility;

impl Transform for SituationDateVisibility {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        if !dataset.has_column(columns::SITUATION)
            || !dataset.has_column(columns::LAST_PROCEDURE_DATE)
        {
            return dataset.clone();
        }

        let mut out = dataset.clone();
        for row in &mut out.rows {
            let situation = row.get_trimmed(columns::SITUATION).unwrap_or_default();
            let visible = DATED_SITUATIONS.contains(&situation.as_str());

            let keep = visible
                && matches!(row.get_value(columns::LAST_PROCEDURE_DATE), Value::Date(_));
            if !keep {
                row.set(columns::LAST_PROCEDURE_DATE, Value::String("-".to_string()));
            }
        }
        out
    }
}

/// Flags enrollments dated on or after the census reference date.
pub struct PostCensusFlag {
    census_date: NaiveDate,
}

impl PostCensusFlag {
    pub fn new(census_date: NaiveDate) -> Self {
        PostCensusFlag { census_date }
    }
}

impl Transform for PostCensusFlag {
    fn apply(&self, dataset: &Dataset) -> Dataset {
        let mut out = dataset.clone();
        out.add_column(columns::POST_CENSUS);

        let has_enrollment_date = dataset.has_column(columns::ENROLLMENT_DATE);
        for row in &mut out.rows {
            let flagged = has_enrollment_date
                && row
                    .get_date(columns::ENROLLMENT_DATE)
                    .is_some_and(|d| d >= self.census_date);
            let label = if flagged { "Sim" } else { "-" };
            row.set(columns::POST_CENSUS, Value::String(label.to_string()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::DeParaEntry;
    use model::core::value::FieldValue;
    use model::records::row::RowData;

    fn dataset_with(columns: &[&str], rows: Vec<RowData>) -> Dataset {
        Dataset::new(
            "matriculas",
            columns.iter().map(|c| c.to_string()).collect(),
            rows,
        )
    }

    fn row(fields: &[(&str, Value)]) -> RowData {
        RowData::new(
            "matriculas",
            fields
                .iter()
                .map(|(name, value)| FieldValue::new(name, value.clone()))
                .collect(),
        )
    }

    fn sample_table() -> DeParaTable {
        let mut table = DeParaTable::default();
        table.insert(
            "Educação Infantil",
            "4",
            DeParaEntry {
                curriculum_group: "Pré I".to_string(),
                sort_order: Some(1),
            },
        );
        table
    }

    #[test]
    fn test_depara_join_preserves_row_count() {
        let ds = dataset_with(
            &[columns::COURSE_DESCRIPTION, columns::PERIOD_IN_YEAR],
            vec![
                row(&[
                    (columns::COURSE_DESCRIPTION, Value::String("Educação Infantil".into())),
                    (columns::PERIOD_IN_YEAR, Value::String("4".into())),
                ]),
                row(&[
                    (columns::COURSE_DESCRIPTION, Value::String("Curso Inexistente".into())),
                    (columns::PERIOD_IN_YEAR, Value::String("1".into())),
                ]),
                row(&[]),
            ],
        );
        let out = DeParaJoin::new(sample_table()).apply(&ds);

        assert_eq!(out.row_count(), ds.row_count());
        assert_eq!(
            out.rows[0].get_string(columns::CURRICULUM_GROUP),
            Some("Pré I".to_string())
        );
        assert_eq!(out.rows[0].get_value(columns::SORT_ORDER), Value::Int(1));
        assert_eq!(out.rows[1].get_value(columns::CURRICULUM_GROUP), Value::Null);
        assert_eq!(out.rows[2].get_value(columns::SORT_ORDER), Value::Null);
    }

    #[test]
    fn test_depara_join_skipped_without_key_columns() {
        let ds = dataset_with(&[columns::NAME], vec![row(&[])]);
        let out = DeParaJoin::new(sample_table()).apply(&ds);
        assert!(!out.has_column(columns::CURRICULUM_GROUP));
    }

    #[test]
    fn test_situation_remap_early_childhood() {
        let ds = dataset_with(
            &[columns::COURSE_DESCRIPTION, columns::SITUATION],
            vec![
                row(&[
                    (columns::COURSE_DESCRIPTION, Value::String("Educação Infantil".into())),
                    (columns::SITUATION, Value::String("Aprovado".into())),
                ]),
                row(&[
                    (columns::COURSE_DESCRIPTION, Value::String(" Educação Infantil ".into())),
                    (columns::SITUATION, Value::String("Reprovado".into())),
                ]),
                row(&[
                    (columns::COURSE_DESCRIPTION, Value::String("Ensino Fundamental".into())),
                    (columns::SITUATION, Value::String("Aprovado".into())),
                ]),
            ],
        );
        let out = SituationRemapper.apply(&ds);
        assert_eq!(
            out.rows[0].get_string(columns::SITUATION),
            Some("Sem Movimentação".to_string())
        );
        assert_eq!(
            out.rows[1].get_string(columns::SITUATION),
            Some("Ajuste de Idade".to_string())
        );
        assert_eq!(
            out.rows[2].get_string(columns::SITUATION),
            Some("Aprovado".to_string())
        );
    }

    #[test]
    fn test_partial_progression_shortened_for_any_course() {
        let ds = dataset_with(
            &[columns::SITUATION],
            vec![row(&[(
                columns::SITUATION,
                Value::String("Aprovado com Progressão Parcial".into()),
            )])],
        );
        let out = SituationRemapper.apply(&ds);
        assert_eq!(
            out.rows[0].get_string(columns::SITUATION),
            Some("Aprovado com Prog. Parcial".to_string())
        );
    }

    #[test]
    fn test_situation_date_only_for_transfers() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let ds = dataset_with(
            &[columns::SITUATION, columns::LAST_PROCEDURE_DATE],
            vec![
                row(&[
                    (columns::SITUATION, Value::String("Transferido".into())),
                    (columns::LAST_PROCEDURE_DATE, Value::Date(date)),
                ]),
                row(&[
                    (columns::SITUATION, Value::String("Aprovado".into())),
                    (columns::LAST_PROCEDURE_DATE, Value::Date(date)),
                ]),
                row(&[
                    (columns::SITUATION, Value::String("Transf. Externa".into())),
                    (columns::LAST_PROCEDURE_DATE, Value::Null),
                ]),
            ],
        );
        let out = SituationDateVisibility.apply(&ds);
        assert_eq!(
            out.rows[0].get_date(columns::LAST_PROCEDURE_DATE),
            Some(date)
        );
        assert_eq!(
            out.rows[1].get_string(columns::LAST_PROCEDURE_DATE),
            Some("-".to_string())
        );
        assert_eq!(
            out.rows[2].get_string(columns::LAST_PROCEDURE_DATE),
            Some("-".to_string())
        );
    }

    #[test]
    fn test_post_census_boundary() {
        let census = NaiveDate::from_ymd_opt(2025, 5, 28).unwrap();
        let ds = dataset_with(
            &[columns::ENROLLMENT_DATE],
            vec![
                row(&[(columns::ENROLLMENT_DATE, Value::Date(census))]),
                row(&[(
                    columns::ENROLLMENT_DATE,
                    Value::Date(NaiveDate::from_ymd_opt(2025, 5, 27).unwrap()),
                )]),
                row(&[(columns::ENROLLMENT_DATE, Value::Null)]),
            ],
        );
        let out = PostCensusFlag::new(census).apply(&ds);
        assert_eq!(
            out.rows[0].get_string(columns::POST_CENSUS),
            Some("Sim".to_string())
        );
        assert_eq!(
            out.rows[1].get_string(columns::POST_CENSUS),
            Some("-".to_string())
        );
        assert_eq!(
            out.rows[2].get_string(columns::POST_CENSUS),
            Some("-".to_string())
        );
    }

    #[test]
    fn test_post_census_without_enrollment_column() {
        let census = NaiveDate::from_ymd_opt(2025, 5, 28).unwrap();
        let ds = dataset_with(&[columns::NAME], vec![row(&[])]);
        let out = PostCensusFlag::new(census).apply(&ds);
        assert_eq!(
            out.rows[0].get_string(columns::POST_CENSUS),
            Some("-".to_string())
        );
    }
}
