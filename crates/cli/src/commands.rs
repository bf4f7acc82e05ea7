use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the enrollment-book page stream from a roster export
    Generate {
        #[arg(long, help = "Roster CSV exported from the school-management system")]
        input: String,

        #[arg(long, help = "School settings JSON file")]
        settings: String,

        #[arg(
            long,
            default_value = "DEPARA.csv",
            help = "Course/period mapping table"
        )]
        depara: String,

        #[arg(
            long,
            default_value = "municipios.csv",
            help = "Municipality-to-state table"
        )]
        municipios: String,

        #[arg(
            long,
            default_value = "regular",
            help = "Report track: \"regular\" (regular + EJA 1st semester) or \"eja2\""
        )]
        track: String,

        #[arg(long, default_value_t = engine_report::assembler::DEFAULT_ROWS_PER_PAGE,
              help = "Table rows per page")]
        rows_per_page: usize,

        #[arg(
            long,
            help = "If specified, writes the document JSON here instead of the default file name"
        )]
        output: Option<String>,
    },

    /// Inspect a roster export: entity, columns, row count
    SourceInfo {
        #[arg(long, help = "Roster CSV path")]
        input: String,

        #[arg(
            long,
            help = "If specified, writes metadata to this file instead of stdout"
        )]
        output: Option<String>,
    },
}
