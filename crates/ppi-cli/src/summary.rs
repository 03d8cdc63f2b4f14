use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::{FormatOutcome, RunOutcome};

pub fn print_format_summary(outcome: &FormatOutcome) {
    println!("Log: {} ({})", outcome.log_name, outcome.shape);
    println!(
        "Events: {}  Cases: {}  Activities: {}",
        outcome.events, outcome.cases, outcome.activities
    );
    println!("Formatted log: {}", outcome.formatted.display());
}

pub fn print_run_summary(outcome: &RunOutcome) {
    print_format_summary(&outcome.format);
    println!("Results: {}", outcome.results.display());
    println!("Summary: {}", outcome.summary.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dimension"),
        header_cell("Granularity"),
        header_cell("Total"),
        header_cell("Succeeded"),
        header_cell("Missing args"),
        header_cell("Not implemented"),
        header_cell("Failed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = [0usize; 5];
    for summary in &outcome.summaries {
        let counts = [
            summary.total,
            summary.succeeded,
            summary.missing_args,
            summary.not_implemented,
            summary.failed,
        ];
        for (total, count) in totals.iter_mut().zip(counts) {
            *total += count;
        }
        table.add_row(vec![
            Cell::new(summary.dimension)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.granularity),
            Cell::new(summary.total),
            count_cell(summary.succeeded, Color::Green),
            count_cell(summary.missing_args, Color::Yellow),
            dim_cell(summary.not_implemented),
            count_cell(summary.failed, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(totals[0]).add_attribute(Attribute::Bold),
        count_cell(totals[1], Color::Green).add_attribute(Attribute::Bold),
        count_cell(totals[2], Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell(totals[3]).add_attribute(Attribute::Bold),
        count_cell(totals[4], Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
