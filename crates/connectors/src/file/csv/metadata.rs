use model::core::data_type::DataType;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CsvColumnMetadata {
    pub name: String,
    pub data_type: DataType,
    pub is_nullable: bool,
    pub ordinal: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CsvMetadata {
    pub name: String,
    pub columns: Vec<CsvColumnMetadata>,
    pub delimiter: char,
    pub has_header: bool,
}

impl CsvMetadata {
    /// Everything a school-management export carries is nominally text;
    /// typed parsing (dates, numbers) happens in the pipeline, not here.
    pub fn from_headers(name: &str, headers: &[String]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(ordinal, hdr)| CsvColumnMetadata {
                name: normalize_col_name(hdr),
                data_type: DataType::String,
                is_nullable: true,
                ordinal,
            })
            .collect();

        CsvMetadata {
            name: name.to_string(),
            columns,
            delimiter: ',',
            has_header: true,
        }
    }
}

pub fn normalize_col_name(name: &str) -> String {
    name.replace(" ", "_")
        .replace("-", "_")
        .replace(".", "_")
        .replace("(", "_")
        .replace(")", "_")
        .replace(",", "_")
        .to_lowercase()
}
