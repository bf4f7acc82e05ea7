use crate::{
    columns::ColumnSpec,
    error::ReportError,
    format::format_cell,
    render::PageRenderer,
};
use engine_config::settings::{ReportTrack, SchoolSettings};
use engine_processing::group::{GroupHeader, SectionGroup};
use tracing::info;

pub const DEFAULT_ROWS_PER_PAGE: usize = 17;

/// Walks the finalized groups in order and splits each one into fixed-size
/// pages for the renderer. A group never shares a page with another group;
/// every group starts fresh.
pub struct ReportAssembler {
    spec: ColumnSpec,
    rows_per_page: usize,
}

impl ReportAssembler {
    pub fn new(spec: ColumnSpec) -> Self {
        ReportAssembler {
            spec,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page.max(1);
        self
    }

    /// Renders every group and returns the number of pages emitted.
    pub fn assemble(
        &self,
        groups: &[SectionGroup],
        settings: &SchoolSettings,
        track: ReportTrack,
        renderer: &mut dyn PageRenderer,
    ) -> Result<usize, ReportError> {
        let mut pages = 0usize;

        for group in groups {
            if group.rows.is_empty() {
                continue;
            }

            let header = GroupHeader::for_group(group, settings, track);
            let display_rows: Vec<Vec<String>> = group
                .rows
                .iter()
                .map(|row| {
                    self.spec
                        .columns
                        .iter()
                        .map(|col| format_cell(col, &row.get_value(&col.source)))
                        .collect()
                })
                .collect();

            for chunk in display_rows.chunks(self.rows_per_page) {
                renderer.render_page(&header, chunk, &self.spec)?;
                pages += 1;
            }
        }

        info!("Assembled {} page(s) across {} group(s)", pages, groups.len());
        Ok(pages)
    }
}
