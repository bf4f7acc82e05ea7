use chrono::{Datelike, NaiveDate, Weekday};

/// The school-census reference date defaults to the last Wednesday of May
/// of the academic year.
pub fn default_census_date(academic_year: i32) -> Option<NaiveDate> {
    let mut day = NaiveDate::from_ymd_opt(academic_year, 5, 31)?;
    while day.weekday() != Weekday::Wed {
        day = day.pred_opt()?;
    }
    Some(day)
}
