use model::records::{columns, row::RowData};
use std::collections::HashSet;

/// Dedup key: the CPF digit string left-padded to 11. Rows without any
/// digit in the field have no key and are never deduplicated against each
/// other.
pub fn taxpayer_key(row: &RowData) -> Option<String> {
    let raw = row.get_string(columns::CPF)?;
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("{digits:0>11}"))
    }
}

/// Removes duplicate individuals within one group: among rows sharing a
/// taxpayer key, the earliest parseable enrollment date survives. Rows with
/// an unparseable date order after dated ones, and exact ties keep the
/// first encountered. Keyless rows always survive.
pub fn dedup_keep_earliest(rows: &mut Vec<RowData>) {
    if rows.len() < 2 {
        return;
    }

    let mut by_date = rows.clone();
    // Stable: equal dates keep their encounter order.
    by_date.sort_by_key(|row| {
        let date = row.get_date(columns::ENROLLMENT_DATE);
        (date.is_none(), date)
    });

    let mut seen: HashSet<String> = HashSet::new();
    let mut kept = Vec::with_capacity(by_date.len());
    for row in by_date {
        match taxpayer_key(&row) {
            Some(key) => {
                if seen.insert(key) {
                    kept.push(row);
                }
            }
            None => kept.push(row),
        }
    }

    *rows = kept;
}
