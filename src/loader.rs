//! Fetches the odds CSV for the browser build.

use gloo::net::http::Request;

use crate::console;
use crate::error::{Result, SlipError};
use crate::table::RowTable;

/// Fetch and parse the table. Per-row problems are logged, not returned.
pub async fn fetch_table(url: &str) -> Result<RowTable> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| SlipError::DataLoadFailure(e.to_string()))?;
    if !response.ok() {
        return Err(SlipError::DataLoadFailure(format!(
            "HTTP error! status: {}",
            response.status()
        )));
    }
    let text = response
        .text()
        .await
        .map_err(|e| SlipError::DataLoadFailure(e.to_string()))?;

    let (table, issues) = RowTable::parse(&text);
    for issue in &issues {
        console::warn(&format!("{url} line {}: {}", issue.line, issue.reason));
    }
    let ids: Vec<&str> = table.records().map(|r| r.team_id.as_str()).collect();
    console::info(&format!("CSV data loaded: {} teams {:?}", table.len(), ids));
    Ok(table)
}

/// Load failures fall back to an empty table so the board still renders.
pub async fn fetch_table_or_empty(url: &str) -> RowTable {
    match fetch_table(url).await {
        Ok(table) => table,
        Err(e) => {
            console::error(&e.to_string());
            RowTable::empty()
        }
    }
}
