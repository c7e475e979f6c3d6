//! Table rendering for the viewer CLI.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mec_model::{ColorToken, ConditionDetail, EligibilityChart, RatingCode};

/// Shared table styling for all commands.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

/// Terminal color for a display token, from the reference palette.
pub fn token_color(token: ColorToken) -> Color {
    let (r, g, b) = token.rgb();
    Color::Rgb { r, g, b }
}

/// Cell for one rating value; absent or unrecognized values render dimmed.
pub fn rating_cell(value: Option<&str>) -> Cell {
    let token = ColorToken::for_code(value);
    let text = value.filter(|v| !v.is_empty()).unwrap_or("-");
    let cell = Cell::new(text)
        .set_alignment(CellAlignment::Center)
        .fg(token_color(token));
    if token == ColorToken::Neutral {
        cell.add_attribute(Attribute::Dim)
    } else {
        cell.add_attribute(Attribute::Bold)
    }
}

/// Table of every chart condition with its applicable-method count.
pub fn conditions_table(chart: &EligibilityChart) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Condition"), header_cell("Methods")]);
    apply_table_style(&mut table);
    for (name, entry) in chart.conditions() {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(entry.applicable_methods().count()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Detail table for one condition: applicable methods with colored ratings.
pub fn detail_table(detail: &ConditionDetail) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Method"),
        header_cell("Initiation"),
        header_cell("Continuation"),
    ]);
    apply_table_style(&mut table);
    for method in &detail.methods {
        table.add_row(vec![
            Cell::new(&method.method),
            rating_cell(method.initiation.as_deref()),
            rating_cell(method.continuation.as_deref()),
        ]);
    }
    table
}

/// Legend table for the four eligibility categories.
pub fn categories_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Meaning")]);
    apply_table_style(&mut table);
    for rating in RatingCode::ALL {
        table.add_row(vec![
            Cell::new(rating.as_str())
                .set_alignment(CellAlignment::Center)
                .fg(token_color(rating.color()))
                .add_attribute(Attribute::Bold),
            Cell::new(rating.description()),
        ]);
    }
    table
}
