//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single locale.
pub struct LocaleCoverage {
    /// Locale identifier (e.g., "es-ES", "fr-FR").
    pub locale: String,
    /// Number of keys translated.
    pub translated: usize,
    /// Dot-paths of missing keys.
    pub missing: Vec<String>,
}

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(total: usize, coverage: &[LocaleCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Locale", "Coverage", "Missing"]);

    for entry in coverage {
        table.add_row(vec![
            entry.locale.clone(),
            format!("{}/{}", entry.translated, total),
            entry.missing.len().to_string(),
        ]);
    }

    table
}
