use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::Tag;

/// Row background for a tag, `None` for unhighlighted rows
pub(super) fn tag_color(tag: Tag) -> Option<Color> {
    match tag {
        Tag::Expired => Some(Color::Red),
        Tag::Warning => Some(Color::Yellow),
        Tag::Invalid => Some(Color::Grey),
        Tag::Normal => None,
    }
}

pub(super) fn row_cell(text: &str, background: Option<Color>) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(bg) = background {
        cell = cell.bg(bg).fg(Color::Black);
    }
    cell
}

pub(super) fn right_cell(text: &str, background: Option<Color>) -> Cell {
    row_cell(text, background).set_alignment(CellAlignment::Right)
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
/// Colors are forced on or off so output does not depend on the terminal.
pub(super) fn create_styled_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    if use_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}
