use crate::{columns::ColumnSpec, error::ReportError};
use engine_processing::group::GroupHeader;
use serde_json::json;

/// The boundary to the external page-layout engine. The assembler hands it
/// one fixed-size page at a time; what happens to fonts, borders and line
/// wrapping is entirely the renderer's business.
pub trait PageRenderer {
    fn render_page(
        &mut self,
        header: &GroupHeader,
        rows: &[Vec<String>],
        spec: &ColumnSpec,
    ) -> Result<(), ReportError>;
}

/// Reference renderer: accumulates pages as JSON values. Used by the CLI
/// output and by tests; a real layout engine implements `PageRenderer`
/// against the same page stream.
#[derive(Debug, Default)]
pub struct JsonPageSink {
    pages: Vec<serde_json::Value>,
}

impl JsonPageSink {
    pub fn new() -> Self {
        JsonPageSink { pages: Vec::new() }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn into_pages(self) -> Vec<serde_json::Value> {
        self.pages
    }
}

impl PageRenderer for JsonPageSink {
    fn render_page(
        &mut self,
        header: &GroupHeader,
        rows: &[Vec<String>],
        spec: &ColumnSpec,
    ) -> Result<(), ReportError> {
        let page = json!({
            "section": header.section_name,
            "curriculum": header.curriculum_label,
            "course": header.course_description,
            "census_date": header.census_date.format("%d/%m/%Y").to_string(),
            "closing_date": header
                .closing_date
                .map(|d| d.format("%d/%m/%Y").to_string()),
            "day_count": header.day_count,
            "columns": spec
                .columns
                .iter()
                .map(|c| c.title.clone())
                .collect::<Vec<_>>(),
            "rows": rows,
        });
        self.pages.push(page);
        Ok(())
    }
}
