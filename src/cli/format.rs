use anyhow::Result;

use crate::models::{IndexSummary, MatchResult, SearchReport};

/// Render a `SearchReport` in human-readable text form.
///
/// Matching paths come first, one per line, followed by the scan
/// summary and the results file location.
pub fn print_search_text(report: &SearchReport) -> Result<()> {
    for path in &report.result.paths {
        println!("{path}");
    }

    println!("{}", scan_summary_line(&report.result));
    println!("Results written to {}", report.results_file.display());

    Ok(())
}

/// Render an `IndexSummary` in human-readable text form.
pub fn print_index_summary_text(summary: &IndexSummary) -> Result<()> {
    println!("index_file   : {}", summary.index_file.display());

    if let Some(root) = &summary.root_path {
        println!("root_path    : {root}");
    }
    if let Some(schema) = &summary.schema_version {
        println!("schema       : {schema}");
    }
    if let Some(tool) = &summary.tool_version {
        println!("tool_version : {tool}");
    }
    if let Some(generated) = &summary.generated_at {
        println!("generated_at : {generated}");
    }

    println!("directories  : {}", summary.directories_indexed);
    println!("files        : {}", summary.files_indexed);

    Ok(())
}

fn scan_summary_line(result: &MatchResult) -> String {
    format!(
        ">> Searched {} records and found {} matches",
        group_digits(result.records_scanned),
        group_digits(result.matches_found)
    )
}

/// Comma-group a count for display, `1234567` -> `"1,234,567"`.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::{group_digits, scan_summary_line};
    use crate::models::MatchResult;

    #[test]
    fn summary_line_reports_both_counters() {
        let result = MatchResult {
            paths: vec!["docs/report.txt".to_string()],
            records_scanned: 3,
            matches_found: 1,
        };

        assert_eq!(
            scan_summary_line(&result),
            ">> Searched 3 records and found 1 matches"
        );
    }

    #[test]
    fn counters_group_digits_by_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");

        let result = MatchResult {
            paths: Vec::new(),
            records_scanned: 12_500,
            matches_found: 0,
        };
        assert_eq!(
            scan_summary_line(&result),
            ">> Searched 12,500 records and found 0 matches"
        );
    }
}
