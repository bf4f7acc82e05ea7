pub mod dedup;
pub mod header;
pub mod section;

pub use header::GroupHeader;
pub use section::SectionGroup;

use model::records::dataset::Dataset;

/// Partitions the transformed dataset into class-section groups, then
/// deduplicates, orders and indexes each group. Groups come back in
/// ascending section-name order, ready for assembly.
pub fn group_dataset(dataset: &Dataset) -> Vec<SectionGroup> {
    let mut groups = section::partition(dataset);
    for group in &mut groups {
        dedup::dedup_keep_earliest(&mut group.rows);
        section::sort_rows(&mut group.rows);
        section::assign_display_index(&mut group.rows);
    }
    groups
}
