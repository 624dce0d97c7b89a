use crate::core::DisplayRow;
use crate::output::format::{create_styled_table, header_cell, right_cell, row_cell, tag_color};

pub(crate) const EMPTY_LISTING: &str = "No items tracked.";

/// Render the sorted listing as a table. Rows are numbered from 1 so they
/// can be selected.
pub(crate) fn render_listing_table(rows: &[DisplayRow], use_color: bool) -> String {
    if rows.is_empty() {
        return EMPTY_LISTING.to_string();
    }

    let mut table = create_styled_table(use_color);
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Item Name", use_color),
        header_cell("Expiration Date", use_color),
        header_cell("Days Left", use_color),
    ]);

    for (i, row) in rows.iter().enumerate() {
        let bg = if use_color { tag_color(row.tag) } else { None };
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), bg),
            row_cell(&row.record.name, bg),
            row_cell(&row.record.date, bg),
            right_cell(&row.classification.to_string(), bg),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, Record, Tag};

    fn row(name: &str, date: &str, classification: Classification, tag: Tag) -> DisplayRow {
        DisplayRow {
            record: Record::new(name, date),
            classification,
            tag,
        }
    }

    #[test]
    fn empty_listing_message() {
        assert_eq!(render_listing_table(&[], false), EMPTY_LISTING);
    }

    #[test]
    fn renders_headers_and_rows() {
        let rows = [
            row("Cheese", "2001-01-01", Classification::DaysLeft(-9200), Tag::Expired),
            row("Eggs", "bad-date", Classification::Invalid, Tag::Invalid),
        ];
        let out = render_listing_table(&rows, false);
        for text in ["Item Name", "Expiration Date", "Days Left", "Cheese", "-9200", "bad-date", "Invalid"] {
            assert!(out.contains(text), "missing {text} in\n{out}");
        }
        assert!(out.find("Cheese").unwrap() < out.find("Eggs").unwrap());
        assert!(!out.contains('\u{1b}'));
    }
}
