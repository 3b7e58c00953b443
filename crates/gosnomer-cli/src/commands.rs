use std::io;

use anyhow::{Context, Result};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use gosnomer_cli::batch::{BatchReport, normalize_batch, read_inputs};
use gosnomer_cli::config::load_options;
use gosnomer_model::PlateFormat;
use gosnomer_normalize::Normalizer;

use crate::cli::NormalizeArgs;
use crate::summary::header_cell;

pub fn run_normalize(args: &NormalizeArgs) -> Result<BatchReport> {
    let options = load_options(args.config.as_deref(), &args.prefer)?;
    let normalizer = Normalizer::new(options);
    let report = if args.plates.is_empty() {
        let inputs = read_inputs(io::stdin().lock()).context("read plates from stdin")?;
        normalize_batch(&normalizer, inputs)
    } else {
        normalize_batch(&normalizer, &args.plates)
    };
    Ok(report)
}

pub fn run_formats() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        header_cell("Format"),
        header_cell("Length"),
        header_cell("GOST type"),
        header_cell("Description"),
    ]);
    for format in PlateFormat::ALL {
        table.add_row(vec![
            format.as_str().to_string(),
            format.len().to_string(),
            format.gost_type().to_string(),
            format.description().to_string(),
        ]);
    }
    println!("{table}");
}
