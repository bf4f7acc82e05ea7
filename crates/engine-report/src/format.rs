use crate::columns::ColumnDef;
use model::{core::value::Value, records::columns};

/// `XXX.XXX.XXX-XX`, zero-filling short digit strings to 11. A value with
/// no digit at all is passed through untouched.
pub fn format_cpf(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    let nums: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if nums.is_empty() {
        return raw.to_string();
    }
    let padded = format!("{nums:0>11}");
    format!(
        "{}.{}.{}-{}",
        &padded[..3],
        &padded[3..6],
        &padded[6..9],
        &padded[9..]
    )
}

/// Presentation value of one cell. Dates print day-first; nulls print
/// empty.
pub fn format_cell(column: &ColumnDef, value: &Value) -> String {
    if column.source.eq_ignore_ascii_case(columns::CPF) {
        return match value.as_string() {
            Some(raw) => format_cpf(&raw),
            None => String::new(),
        };
    }

    match value {
        Value::Null => String::new(),
        Value::Date(d) => d.format("%d/%m/%Y").to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::default_column_spec;
    use chrono::NaiveDate;

    fn column(source_title: &str) -> ColumnDef {
        default_column_spec(2025)
            .columns
            .into_iter()
            .find(|c| c.title == source_title)
            .unwrap()
    }

    #[test]
    fn test_format_cpf_masks_and_pads() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
        assert_eq!(format_cpf("345678901"), "003.456.789-01");
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("  "), "");
        assert_eq!(format_cpf("sem cpf"), "sem cpf");
    }

    #[test]
    fn test_format_cell_date_and_null() {
        let birth = column("Data de Nascimento");
        assert_eq!(
            format_cell(
                &birth,
                &Value::Date(NaiveDate::from_ymd_opt(2019, 3, 31).unwrap())
            ),
            "31/03/2019"
        );
        assert_eq!(format_cell(&birth, &Value::Null), "");
    }

    #[test]
    fn test_format_cell_applies_cpf_mask() {
        let cpf = column("CPF");
        assert_eq!(
            format_cell(&cpf, &Value::String("12345678901".into())),
            "123.456.789-01"
        );
        assert_eq!(format_cell(&cpf, &Value::Null), "");
    }

    #[test]
    fn test_format_cell_display_index() {
        let idx = column("#");
        assert_eq!(format_cell(&idx, &Value::Int(7)), "7");
    }
}
