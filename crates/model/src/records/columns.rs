//! Column vocabulary of the school-management export and of the columns the
//! pipeline derives. Raw names are kept exactly as they appear in the export
//! headers.

pub const NAME: &str = "Nome";
pub const CPF: &str = "CPF";
pub const ENROLLMENT_ID: &str = "Matrícula";
pub const BIRTH_DATE: &str = "Data de Nascimento";
pub const ENROLLMENT_DATE: &str = "Data de Matrícula";
pub const LAST_PROCEDURE_DATE: &str = "Data do Último Procedimento";
pub const COURSE_DESCRIPTION: &str = "Descrição do Curso";
pub const PERIOD_IN_YEAR: &str = "Período no Ano Selecionado";
pub const SECTION: &str = "Turma no Ano Selecionado";
pub const SITUATION: &str = "Situação no Ano Selecionado";
pub const BIRTHPLACE: &str = "Naturalidade";
pub const NATIONALITY: &str = "Nacionalidade";
pub const SEX: &str = "Sexo";
pub const MOTHER_NAME: &str = "Nome da Mãe";
pub const FATHER_NAME: &str = "Nome do Pai";
pub const DISABILITY: &str = "Deficiência";
pub const GIFTEDNESS: &str = "Superdotação";
pub const DISORDER: &str = "Transtorno";
pub const CURRICULUM: &str = "Matriz";
pub const COURSE: &str = "Curso";

// Derived by the pipeline.
pub const CURRICULUM_GROUP: &str = "Grupo/Ano/Fase";
pub const SORT_ORDER: &str = "Ordenador";
pub const POST_CENSUS: &str = "Pós Censo";
pub const SPECIAL_NEEDS: &str = "Deficiência, TEA, Altas Habilidades ou Superdotação";
pub const DISPLAY_INDEX: &str = "#";

/// The age column carries the reference date in its name, so it depends on
/// the academic year of the run.
pub fn age_column(academic_year: i32) -> String {
    format!("Idade em 31/03/{academic_year}")
}
