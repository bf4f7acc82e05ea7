use chrono::NaiveDate;

/// Reference context for one pipeline run. Built once from the validated
/// school settings and passed by value; the transforms never read ambient
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineContext {
    pub academic_year: i32,
    pub census_date: NaiveDate,
}

impl PipelineContext {
    pub fn new(academic_year: i32, census_date: NaiveDate) -> Self {
        PipelineContext {
            academic_year,
            census_date,
        }
    }
}
