use crate::core::DisplayRow;

/// Render the sorted listing as a pretty JSON array
pub(crate) fn render_listing_json(rows: &[DisplayRow]) -> String {
    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "name": row.record.name,
                "date": row.record.date,
                "days_left": row.classification.days_left(),
                "status": row.tag,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
