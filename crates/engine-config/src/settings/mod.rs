use crate::error::SettingsError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};

pub mod calendar;
pub mod format;
pub mod validator;

/// Closing date and day count for one academic track.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackCalendar {
    pub closing_date: NaiveDate,
    pub school_days: u16,
}

/// School metadata supplied once per report generation. Immutable during a
/// run; the pipeline never reads ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolSettings {
    pub name: String,
    pub inep: String,
    pub street: String,
    pub number: String,
    pub district: String,
    pub cep: String,
    pub phone: String,
    pub email: String,
    pub academic_year: i32,
    pub census_date: NaiveDate,
    pub regular: TrackCalendar,
    pub eja_first: Option<TrackCalendar>,
    pub eja_second: Option<TrackCalendar>,
}

impl SchoolSettings {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&raw)?;
        Ok(settings)
    }

    /// Base name of the generated document, per the registrar's convention.
    /// The extension is owned by whichever renderer consumes the pages.
    pub fn output_basename(&self, track: ReportTrack) -> String {
        match track {
            ReportTrack::Regular => format!("livro_matricula{}", self.academic_year),
            ReportTrack::EjaSecondSemester => {
                format!("livro_matricula{}2SEM", self.academic_year)
            }
        }
    }
}

/// Which upload variant a run is for: the regular roster (which also carries
/// EJA first-semester sections) or the EJA second-semester roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportTrack {
    Regular,
    EjaSecondSemester,
}

impl FromStr for ReportTrack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "regular" => Ok(ReportTrack::Regular),
            "eja2" | "eja-2" | "eja_second" => Ok(ReportTrack::EjaSecondSemester),
            other => Err(format!("Unknown report track: {other}")),
        }
    }
}
