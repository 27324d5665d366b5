use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::path::Path;
use typeprobe::{ProbeResult, Ranked};

pub fn print_ranking_table(results: &[Ranked]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Zero %"),
        Cell::new("NaN %").fg(Color::Red),
        Cell::new("Deviation"),
        Cell::new("Penalty").fg(Color::Cyan),
    ]);

    for i in [0, 2, 3, 4, 5, 6] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in results {
        let mut type_cell = Cell::new(r.candidate.to_string());
        if r.rank == 1 {
            type_cell = type_cell.fg(Color::Green).add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(r.rank),
            type_cell,
            Cell::new(r.stats.count),
            Cell::new(format!("{:.3}", r.details.zero_fraction * 100.0)),
            Cell::new(format!("{:.3}", r.details.nan_fraction * 100.0)),
            Cell::new(format!("{:.6}", r.details.deviation_ratio)),
            Cell::new(format!("{:.6}", r.details.penalty)),
        ]);
    }

    println!("{}", table);
}

pub fn print_ranking_json(results: &[Ranked]) -> ProbeResult<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

pub fn write_ranking_csv(path: &Path, results: &[Ranked]) -> ProbeResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "rank",
        "type",
        "count",
        "zero_count",
        "nan_count",
        "positive_sum",
        "negative_sum",
        "deviation_ratio",
        "zero_fraction",
        "nan_fraction",
        "penalty",
    ])?;
    for r in results {
        wtr.write_record([
            r.rank.to_string(),
            r.candidate.to_string(),
            r.stats.count.to_string(),
            r.stats.zero_count.to_string(),
            r.stats.nan_count.to_string(),
            r.stats.positive_sum.to_string(),
            r.stats.negative_sum.to_string(),
            r.details.deviation_ratio.to_string(),
            r.details.zero_fraction.to_string(),
            r.details.nan_fraction.to_string(),
            r.details.penalty.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
