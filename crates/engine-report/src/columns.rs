use lazy_static::lazy_static;
use model::records::columns;
use serde::Serialize;
use std::collections::HashMap;

/// Width every column falls back to when it has no entry in the width map.
const DEFAULT_WIDTH_MM: f32 = 20.0;

lazy_static! {
    /// Millimetre widths tuned for an A4 landscape table, keyed by column
    /// title.
    static ref COLUMN_WIDTHS: HashMap<&'static str, f32> = build_width_map();
}

fn build_width_map() -> HashMap<&'static str, f32> {
    HashMap::from([
        ("#", 6.0),
        ("Grupo/Ano/Fase", 15.0),
        ("Matrícula", 20.0),
        ("CPF", 18.0),
        ("Nome", 30.0),
        ("Data de Nascimento", 15.0),
        ("Idade (31/03)", 12.0),
        ("Sexo", 8.0),
        ("Filiação 1", 30.0),
        ("Filiação 2", 30.0),
        ("Naturalidade", 18.0),
        ("Nacionalidade", 18.0),
        ("Data de Ingresso", 15.0),
        ("PNE", 8.0),
        ("Pós Censo", 10.0),
        ("Situação", 18.0),
        ("Data da situação", 15.0),
    ])
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One display column: which working-set field it reads, the title printed
/// in the table head (with the wrap points the narrow layout needs), and
/// its geometry.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDef {
    /// Field name in the transformed record set.
    pub source: String,
    /// Single-line column title.
    pub title: String,
    /// Header label as printed, possibly with embedded line breaks.
    pub label: String,
    pub width_mm: f32,
    pub align: Align,
}

impl ColumnDef {
    fn new(source: &str, title: &str, label: &str, align: Align) -> Self {
        ColumnDef {
            source: source.to_string(),
            title: title.to_string(),
            label: label.to_string(),
            width_mm: COLUMN_WIDTHS.get(title).copied().unwrap_or(DEFAULT_WIDTH_MM),
            align,
        }
    }
}

/// Ordered column list handed to the renderer alongside every page.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSpec {
    pub columns: Vec<ColumnDef>,
}

/// The enrollment-book table layout. The age column is named after the
/// academic year, so the column list is built per run.
pub fn default_column_spec(academic_year: i32) -> ColumnSpec {
    use Align::{Center, Left};

    let age_source = columns::age_column(academic_year);
    let columns = vec![
        ColumnDef::new(columns::DISPLAY_INDEX, "#", "#", Center),
        ColumnDef::new(
            columns::CURRICULUM_GROUP,
            "Grupo/Ano/Fase",
            "Grupo/Ano/\nFase",
            Left,
        ),
        ColumnDef::new(columns::ENROLLMENT_ID, "Matrícula", "Matrícula", Center),
        ColumnDef::new(columns::CPF, "CPF", "CPF", Center),
        ColumnDef::new(columns::NAME, "Nome", "Nome", Left),
        ColumnDef::new(
            columns::BIRTH_DATE,
            "Data de Nascimento",
            "Data de\n Nascimento",
            Left,
        ),
        ColumnDef::new(&age_source, "Idade (31/03)", "Idade\n (31/03)", Center),
        ColumnDef::new(columns::SEX, "Sexo", "Sexo", Center),
        ColumnDef::new(columns::MOTHER_NAME, "Filiação 1", "Filiação 1", Left),
        ColumnDef::new(columns::FATHER_NAME, "Filiação 2", "Filiação 2", Left),
        ColumnDef::new(columns::BIRTHPLACE, "Naturalidade", "Naturalidade", Left),
        ColumnDef::new(columns::NATIONALITY, "Nacionalidade", "Nacionalidade", Left),
        ColumnDef::new(
            columns::ENROLLMENT_DATE,
            "Data de Ingresso",
            "Data de\n Ingresso",
            Center,
        ),
        ColumnDef::new(columns::SPECIAL_NEEDS, "PNE", "PNE", Center),
        ColumnDef::new(columns::POST_CENSUS, "Pós Censo", "Pós \n Censo", Center),
        ColumnDef::new(columns::SITUATION, "Situação", "Situação", Left),
        ColumnDef::new(
            columns::LAST_PROCEDURE_DATE,
            "Data da situação",
            "Data da\n Situação",
            Center,
        ),
    ];

    ColumnSpec { columns }
}
