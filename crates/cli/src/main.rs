use crate::{commands::Commands, error::CliError};
use clap::Parser;
use connectors::file::csv::{adapter::CsvAdapter, source::CsvDataSource};
use engine_config::settings::{
    format::{format_cep, format_phone},
    validator, ReportTrack, SchoolSettings,
};
use engine_processing::{
    context::PipelineContext, group::group_dataset, lookup::LookupTables,
    transform::standard_pipeline,
};
use engine_report::{
    assembler::ReportAssembler, columns::default_column_spec, render::JsonPageSink,
};
use serde_json::json;
use tracing::{info, Level};

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "matriculas", version = "0.1.0", about = "Enrollment book generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            settings,
            depara,
            municipios,
            track,
            rows_per_page,
            output,
        } => generate(
            &input,
            &settings,
            &depara,
            &municipios,
            &track,
            rows_per_page,
            output,
        ),
        Commands::SourceInfo { input, output } => source_info(&input, output),
    }
}

fn generate(
    input: &str,
    settings_path: &str,
    depara: &str,
    municipios: &str,
    track: &str,
    rows_per_page: usize,
    output: Option<String>,
) -> Result<(), CliError> {
    let settings = SchoolSettings::from_json_file(settings_path)?;
    validator::validate(&settings)?;
    let track: ReportTrack = track.parse().map_err(CliError::InvalidTrack)?;

    let lookups = LookupTables::load_or_empty(depara, municipios);

    let adapter = CsvAdapter::from_path(input)?;
    let dataset = CsvDataSource::new(adapter).read_all()?;
    info!("Loaded {} enrollment row(s) from '{}'", dataset.row_count(), input);

    let ctx = PipelineContext::new(settings.academic_year, settings.census_date);
    let transformed = standard_pipeline(&lookups, ctx).apply(&dataset);
    let groups = group_dataset(&transformed);

    let assembler =
        ReportAssembler::new(default_column_spec(settings.academic_year))
            .with_rows_per_page(rows_per_page);
    let mut sink = JsonPageSink::new();
    let page_count = assembler.assemble(&groups, &settings, track, &mut sink)?;

    let document = json!({
        "school": {
            "name": settings.name.clone(),
            "inep": settings.inep.clone(),
            "address": format!(
                "{}, {}. {}. CEP: {}",
                settings.street,
                settings.number,
                settings.district,
                format_cep(&settings.cep)
            ),
            "contacts": format!("{} | {}", format_phone(&settings.phone), settings.email),
            "academic_year": settings.academic_year,
        },
        "pages": sink.into_pages(),
    });

    let output_path =
        output.unwrap_or_else(|| format!("{}.json", settings.output_basename(track)));
    output::write_json(&document, &output_path)?;
    info!("Wrote {} page(s) to '{}'", page_count, output_path);

    Ok(())
}

fn source_info(input: &str, output: Option<String>) -> Result<(), CliError> {
    let adapter = CsvAdapter::from_path(input)?;
    let source = CsvDataSource::new(adapter);
    let metadata = source.metadata();
    let dataset = source.read_all()?;

    let info = json!({
        "entity": dataset.entity,
        "columns": metadata.columns,
        "row_count": dataset.row_count(),
    });

    match output {
        Some(path) => output::write_json(&info, &path)?,
        None => output::print_json(&info)?,
    }

    Ok(())
}
