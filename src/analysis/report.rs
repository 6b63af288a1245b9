use crate::analysis::AnalysisResult;

/// One labelled line of the coverage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: &'static str,
    pub value: String,
}

impl ReportRow {
    fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// Rows of the known-word section, in display order.
pub fn known_rows(result: &AnalysisResult) -> Vec<ReportRow> {
    vec![
        ReportRow::new("Total words", result.total_words),
        ReportRow::new("Distinct words", result.distinct_words),
        ReportRow::new("Known words (total)", result.known_occurrences),
        ReportRow::new("Known words (distinct)", result.known_distinct),
        ReportRow::new("Total coverage", format!("{}%", result.coverage_total_known)),
        ReportRow::new(
            "Vocabulary coverage",
            format!("{}%", result.coverage_vocab_known),
        ),
    ]
}

/// Rows of the NGL section; empty when no NGL list took part.
pub fn ngl_rows(result: &AnalysisResult) -> Vec<ReportRow> {
    if !result.has_ngl {
        return Vec::new();
    }
    vec![
        ReportRow::new("NGL words (total)", result.ngl_occurrences),
        ReportRow::new("NGL words (distinct)", result.ngl_distinct),
        ReportRow::new("NGL total coverage", format!("{}%", result.coverage_total_ngl)),
        ReportRow::new(
            "NGL vocabulary coverage",
            format!("{}%", result.coverage_vocab_ngl),
        ),
    ]
}

pub fn report_rows(result: &AnalysisResult) -> Vec<ReportRow> {
    let mut rows = known_rows(result);
    rows.extend(ngl_rows(result));
    rows
}

/// Plain-text report, one `label: value` per line.
pub fn format_report(result: &AnalysisResult) -> String {
    report_rows(result)
        .iter()
        .map(|row| format!("{}: {}", row.label, row.value))
        .collect::<Vec<_>>()
        .join("\n")
}
