use crate::error::CliError;

pub fn write_json(value: &serde_json::Value, path: &str) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
