use super::SchemaRecord;

const TABLE_HEADER: &str = "| Parameter | Description | Type | Default |\n|-----------|-------------|------|---------|";

/// Generates a markdown table documenting values parameters.
///
/// Pipes are escaped and newlines flattened in every free-text cell so each
/// record stays a single table row. Returns an empty string when there is
/// nothing to document.
pub fn generate_parameter_table(records: &[&SchemaRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let parameter_rows = records
        .iter()
        .map(|record| {
            format!(
                "| `{}` | {} | `{}` | {} |",
                record.parameter,
                escape_cell(&record.description),
                record.value_type,
                escape_cell(&record.default)
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!("{TABLE_HEADER}\n{parameter_rows}")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "\\n")
}
