//! Results table rendering
//!
//! Builds the `<tr>` rows the page injects into the results table body.
//! A submission always starts from an empty row set; the page replaces
//! the table body wholesale, so rows never accumulate across searches.

use super::types::VehicleRecord;

/// Number of columns in the results table
pub const COLUMN_COUNT: usize = 7;

/// Placeholder rendered for absent record fields
const ABSENT_CELL: &str = "N/A";

/// Message of the row rendered when the upstream returned no record
const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados";

/// Row set for one render cycle of the results table body.
///
/// Every submission renders from a fresh, empty set (the page clears the
/// table body before posting), so rows cannot accumulate across searches.
#[derive(Debug, Default)]
pub struct ResultsTable {
    rows: Vec<String>,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row with the seven record columns.
    pub fn push_record(&mut self, record: &VehicleRecord) {
        let cells = [
            Some(record.placa.as_str()),
            record.servicio.as_deref(),
            record.departamento.as_deref(),
            record.ciudad.as_deref(),
            record.pais.as_deref(),
            record.color_fondo.as_deref(),
            record.color_letra.as_deref(),
        ];
        let mut row = String::from("<tr>");
        for value in cells {
            row.push_str("<td>");
            row.push_str(&cell_text(value));
            row.push_str("</td>");
        }
        row.push_str("</tr>");
        self.rows.push(row);
    }

    /// Append the single "no results" row spanning all columns.
    pub fn push_no_results(&mut self) {
        self.rows.push(format!(
            r#"<tr><td colspan="{COLUMN_COUNT}" class="text-center">{NO_RESULTS_MESSAGE}</td></tr>"#
        ));
    }

    /// Concatenated row markup for the table body.
    pub fn to_html(&self) -> String {
        self.rows.concat()
    }
}

fn cell_text(value: Option<&str>) -> String {
    match value {
        Some(v) => escape_html(v),
        None => ABSENT_CELL.to_string(),
    }
}

/// Escape a value for interpolation into row markup.
///
/// The upstream record is external input and ends up in `innerHTML`.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> VehicleRecord {
        VehicleRecord {
            placa: "ABC123".to_string(),
            servicio: Some("Particular".to_string()),
            departamento: Some("Antioquia".to_string()),
            ciudad: Some("Medellín".to_string()),
            pais: Some("Colombia".to_string()),
            color_fondo: Some("amarillo".to_string()),
            color_letra: Some("negro".to_string()),
        }
    }

    #[test]
    fn test_record_row_has_all_columns() {
        let mut table = ResultsTable::new();
        table.push_record(&full_record());
        let html = table.to_html();
        assert_eq!(html.matches("<tr>").count(), 1);
        assert_eq!(html.matches("<td>").count(), COLUMN_COUNT);
        assert!(html.contains("<td>ABC123</td>"));
        assert!(html.contains("<td>Medellín</td>"));
    }

    #[test]
    fn test_absent_fields_render_placeholder() {
        let record = VehicleRecord {
            placa: "XYZ789".to_string(),
            servicio: None,
            departamento: None,
            ciudad: None,
            pais: None,
            color_fondo: None,
            color_letra: None,
        };
        let mut table = ResultsTable::new();
        table.push_record(&record);
        let html = table.to_html();
        assert_eq!(html.matches("<td>N/A</td>").count(), COLUMN_COUNT - 1);
    }

    #[test]
    fn test_no_results_row_spans_all_columns() {
        let mut table = ResultsTable::new();
        table.push_no_results();
        let html = table.to_html();
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains(r#"colspan="7""#));
        assert!(html.contains("No se encontraron resultados"));
    }

    #[test]
    fn test_new_search_starts_with_no_rows() {
        let mut first = ResultsTable::new();
        first.push_record(&full_record());
        assert!(!first.to_html().is_empty());

        let second = ResultsTable::new();
        assert!(second.to_html().is_empty());
    }

    #[test]
    fn test_record_values_are_escaped() {
        let mut record = full_record();
        record.ciudad = Some("<script>alert(1)</script>".to_string());
        let mut table = ResultsTable::new();
        table.push_record(&record);
        let html = table.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html_covers_quotes() {
        assert_eq!(escape_html(r#"a"b'c&d"#), "a&quot;b&#39;c&amp;d");
    }
}
