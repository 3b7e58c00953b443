use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use gosnomer_cli::batch::BatchReport;

use crate::cli::OutputArg;

pub fn print_report(report: &BatchReport, output: OutputArg) {
    match output {
        OutputArg::Table => print_table(report),
        OutputArg::Plain => print_plain(report),
        OutputArg::Json => print_json(report),
    }
}

fn print_table(report: &BatchReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Plate"),
        header_cell("Format"),
        header_cell("Error"),
    ]);
    for outcome in &report.outcomes {
        let row = match &outcome.result {
            Ok(normalized) => vec![
                Cell::new(&outcome.input),
                Cell::new(&normalized.plate).fg(Color::Green),
                Cell::new(normalized.format),
                dim_cell("-"),
            ],
            Err(error) => vec![
                Cell::new(&outcome.input),
                dim_cell("-"),
                dim_cell("-"),
                Cell::new(error).fg(Color::Red),
            ],
        };
        table.add_row(row);
    }
    println!("{table}");
    println!(
        "{} normalized, {} failed",
        report.normalized_count(),
        report.failed_count()
    );
}

fn print_plain(report: &BatchReport) {
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(normalized) => println!("{}", normalized.plate),
            Err(error) => eprintln!("{}: {error}", outcome.input),
        }
    }
}

fn print_json(report: &BatchReport) {
    for outcome in &report.outcomes {
        match serde_json::to_string(&outcome.record()) {
            Ok(line) => println!("{line}"),
            Err(error) => eprintln!("error: failed to serialize result: {error}"),
        }
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::DarkGrey)
}
