use crate::group::section::SectionGroup;
use chrono::NaiveDate;
use engine_config::settings::{ReportTrack, SchoolSettings, TrackCalendar};
use model::records::columns;
use serde::Serialize;

/// The two EJA phase courses, which follow the semester calendar instead of
/// the regular one. Matching is exact on the trimmed description; a
/// qualified variant is not a phase.
const EJA_PHASES: [&str; 2] = [
    "Educação de Jovens e Adultos Fases Iniciais",
    "Educação de Jovens e Adultos Fases Finais",
];

pub fn is_eja_phase(course_description: &str) -> bool {
    EJA_PHASES.contains(&course_description.trim())
}

/// Per-group facts printed in the page header. Built once per group and
/// repeated on every page the group spans.
#[derive(Debug, Clone, Serialize)]
pub struct GroupHeader {
    pub section_name: String,
    pub curriculum_label: String,
    pub census_date: NaiveDate,
    pub closing_date: Option<NaiveDate>,
    pub day_count: Option<u16>,
    pub course_description: String,
}

impl GroupHeader {
    pub fn for_group(
        group: &SectionGroup,
        settings: &SchoolSettings,
        track: ReportTrack,
    ) -> Self {
        let course_description = group
            .rows
            .first()
            .and_then(|r| r.get_trimmed(columns::COURSE_DESCRIPTION))
            .unwrap_or_default();

        // Curriculum label: the DEPARA output when any row carries it, then
        // the raw curriculum/course columns.
        let curriculum_label = [columns::CURRICULUM_GROUP, columns::CURRICULUM, columns::COURSE]
            .into_iter()
            .find_map(|col| {
                group
                    .rows
                    .iter()
                    .find_map(|r| r.get_trimmed(col).filter(|v| !v.is_empty()))
            })
            .unwrap_or_default();

        let calendar: Option<TrackCalendar> = match track {
            ReportTrack::EjaSecondSemester => settings.eja_second,
            ReportTrack::Regular => {
                if is_eja_phase(&course_description) {
                    settings.eja_first
                } else {
                    Some(settings.regular)
                }
            }
        };

        GroupHeader {
            section_name: group.section.clone(),
            curriculum_label,
            census_date: settings.census_date,
            closing_date: calendar.map(|c| c.closing_date),
            day_count: calendar.map(|c| c.school_days),
            course_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::{FieldValue, Value};
    use model::records::row::RowData;

    fn settings() -> SchoolSettings {
        SchoolSettings {
            name: "Escola Municipal Modelo".to_string(),
            inep: "12345678".to_string(),
            street: "Rua das Flores".to_string(),
            number: "100".to_string(),
            district: "Centro".to_string(),
            cep: "28000000".to_string(),
            phone: "22999990000".to_string(),
            email: "escola@edu.br".to_string(),
            academic_year: 2025,
            census_date: NaiveDate::from_ymd_opt(2025, 5, 28).unwrap(),
            regular: TrackCalendar {
                closing_date: NaiveDate::from_ymd_opt(2025, 12, 19).unwrap(),
                school_days: 200,
            },
            eja_first: Some(TrackCalendar {
                closing_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
                school_days: 100,
            }),
            eja_second: Some(TrackCalendar {
                closing_date: NaiveDate::from_ymd_opt(2025, 12, 12).unwrap(),
                school_days: 102,
            }),
        }
    }

    fn group_with_course(course: &str) -> SectionGroup {
        SectionGroup {
            section: "Turma A".to_string(),
            rows: vec![RowData::new(
                "matriculas",
                vec![FieldValue::new(
                    columns::COURSE_DESCRIPTION,
                    Value::String(course.to_string()),
                )],
            )],
        }
    }

    #[test]
    fn test_eja_phase_is_exact_match() {
        assert!(is_eja_phase("Educação de Jovens e Adultos Fases Iniciais"));
        assert!(is_eja_phase("  Educação de Jovens e Adultos Fases Finais "));
        // Extra qualifiers do not make a phase.
        assert!(!is_eja_phase(
            "Educação de Jovens e Adultos Fases Finais - Noturno"
        ));
        assert!(!is_eja_phase("Ensino Fundamental"));
    }

    #[test]
    fn test_regular_track_regular_course() {
        let header = GroupHeader::for_group(
            &group_with_course("Ensino Fundamental"),
            &settings(),
            ReportTrack::Regular,
        );
        assert_eq!(
            header.closing_date,
            NaiveDate::from_ymd_opt(2025, 12, 19)
        );
        assert_eq!(header.day_count, Some(200));
    }

    #[test]
    fn test_regular_track_eja_phase_course() {
        let header = GroupHeader::for_group(
            &group_with_course("Educação de Jovens e Adultos Fases Iniciais"),
            &settings(),
            ReportTrack::Regular,
        );
        assert_eq!(header.closing_date, NaiveDate::from_ymd_opt(2025, 7, 15));
        assert_eq!(header.day_count, Some(100));
    }

    #[test]
    fn test_eja_second_semester_track_ignores_course() {
        for course in ["Ensino Fundamental", "Educação de Jovens e Adultos Fases Finais"] {
            let header = GroupHeader::for_group(
                &group_with_course(course),
                &settings(),
                ReportTrack::EjaSecondSemester,
            );
            assert_eq!(
                header.closing_date,
                NaiveDate::from_ymd_opt(2025, 12, 12)
            );
            assert_eq!(header.day_count, Some(102));
        }
    }

    #[test]
    fn test_missing_eja_calendar_yields_none() {
        let mut settings = settings();
        settings.eja_first = None;
        let header = GroupHeader::for_group(
            &group_with_course("Educação de Jovens e Adultos Fases Finais"),
            &settings,
            ReportTrack::Regular,
        );
        assert_eq!(header.closing_date, None);
        assert_eq!(header.day_count, None);
    }

    #[test]
    fn test_curriculum_label_prefers_depara_output() {
        let rows = vec![
            RowData::new(
                "matriculas",
                vec![
                    FieldValue::null(columns::CURRICULUM_GROUP),
                    FieldValue::new(columns::CURRICULUM, Value::String("Matriz 2020".into())),
                ],
            ),
            RowData::new(
                "matriculas",
                vec![FieldValue::new(
                    columns::CURRICULUM_GROUP,
                    Value::String("1º Ano".into()),
                )],
            ),
        ];
        let group = SectionGroup {
            section: "Turma A".to_string(),
            rows,
        };
        let header = GroupHeader::for_group(&group, &settings(), ReportTrack::Regular);
        assert_eq!(header.curriculum_label, "1º Ano");
    }
}
