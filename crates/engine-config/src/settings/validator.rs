use crate::{error::SettingsError, settings::SchoolSettings};

fn is_digit_string(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// Validates the settings before a run starts. Collects every issue instead
/// of failing on the first one so the caller can report them all at once.
pub fn validate(settings: &SchoolSettings) -> Result<(), SettingsError> {
    let mut issues = Vec::new();

    if settings.name.trim().is_empty() {
        issues.push("School name is required".to_string());
    }
    if !is_digit_string(&settings.inep, 8) {
        issues.push("INEP code must be exactly 8 digits".to_string());
    }
    if settings.street.trim().is_empty() {
        issues.push("Street address is required".to_string());
    }
    if settings.number.trim().is_empty() {
        issues.push("Address number is required".to_string());
    }
    if settings.district.trim().is_empty() {
        issues.push("District is required".to_string());
    }
    if !is_digit_string(&settings.cep, 8) {
        issues.push("CEP must be exactly 8 digits".to_string());
    }
    if settings.email.trim().is_empty() || !settings.email.contains('@') {
        issues.push("A valid e-mail is required".to_string());
    }
    let phone_digits = settings.phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=11).contains(&phone_digits) {
        issues.push("Phone must have 10 or 11 digits".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(SettingsError::Invalid { issues })
    }
}
