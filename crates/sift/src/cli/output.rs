//! Terminal and JSON presentation of ranking results.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use sift_engine::{KeywordList, RankedReport};

/// Builds the ranking report table.
pub fn report_table(report: &RankedReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Rank", "Resume", "Score", "Match %", "Top Keywords", "Summary"]);

    for (position, record) in report.iter().enumerate() {
        table.add_row([
            (position + 1).to_string(),
            record.name.clone(),
            format!("{:.4}", record.score),
            format!("{:.1}", record.coverage_percent),
            if record.matched_keywords.is_empty() {
                "None".to_string()
            } else {
                record.matched_keywords.join(", ")
            },
            record.summary.clone(),
        ]);
    }

    table
}

/// Builds the keyword listing table.
pub fn keywords_table(keywords: &KeywordList) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Rank", "Keyword", "Score"]);

    for (position, keyword) in keywords.entries().iter().enumerate() {
        table.add_row([
            (position + 1).to_string(),
            keyword.term.clone(),
            format!("{:.2}", keyword.score),
        ]);
    }

    table
}

/// Serializes the report as pretty JSON.
pub fn report_json(report: &RankedReport) -> String {
    serde_json::to_string_pretty(report).expect("report serialization should not fail")
}

/// Serializes the keyword list as pretty JSON.
pub fn keywords_json(keywords: &KeywordList) -> String {
    serde_json::to_string_pretty(keywords.entries()).expect("keyword serialization should not fail")
}
