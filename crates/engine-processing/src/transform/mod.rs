use crate::{
    context::PipelineContext,
    lookup::LookupTables,
    transform::{
        enrich::{DeParaJoin, PostCensusFlag, SituationDateVisibility, SituationRemapper},
        normalize::{AgeDerivation, BirthplaceCleaner, DateNormalizer, SpecialNeedsConsolidator},
        pipeline::TransformPipeline,
    },
};

pub mod enrich;
pub mod normalize;
pub mod pipeline;

/// The fixed transformation sequence of the enrollment book: date parsing,
/// age derivation, DEPARA join, birthplace cleanup, special-needs
/// consolidation, situation remap, situation-date visibility, post-census
/// flag. Column-presence checks live inside each step, so the same
/// pipeline is safe on any export variant.
pub fn standard_pipeline(lookups: &LookupTables, ctx: PipelineContext) -> TransformPipeline {
    TransformPipeline::new()
        .add_transform(DateNormalizer::new())
        .add_transform(AgeDerivation::new(ctx.academic_year))
        .add_transform(DeParaJoin::new(lookups.depara.clone()))
        .add_transform(BirthplaceCleaner::new(lookups.municipalities.clone()))
        .add_transform(SpecialNeedsConsolidator)
        .add_transform(SituationRemapper)
        .add_transform(SituationDateVisibility)
        .add_transform(PostCensusFlag::new(ctx.census_date))
}
