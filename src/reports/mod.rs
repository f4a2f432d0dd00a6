use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use serde_json::json;
use shiftbreak::alphabet::{letter_at, letters};
use shiftbreak::command::{CommandError, USAGE};
use shiftbreak::config::OutputFormat;
use shiftbreak::decoder::Evaluation;
use shiftbreak::error::SbResult;
use shiftbreak::frequency::Distribution;
use shiftbreak::reference::ReferenceTable;
use shiftbreak::session::Reply;
use shiftbreak::shift::{normalize_key, shift};

const PREVIEW_CHARS: usize = 40;

pub fn print_banner() {
    println!("##################################");
    println!("#           shiftbreak           #");
    println!("##################################");
    println!("Type 'help' for commands.");
    println!();
}

pub fn print_usage() {
    println!("{}", USAGE);
}

pub fn print_command_error(e: &CommandError) {
    println!("⚠️  {}", e);
    print_usage();
}

pub fn print_json<T: Serialize>(value: &T) -> SbResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_reply(reply: &Reply, format: OutputFormat) -> SbResult<()> {
    match reply {
        Reply::Usage => print_usage(),
        Reply::Quit => {}
        Reply::Shifted(text) => println!("{}", text),
        Reply::Evaluated(evaluation) => match format {
            OutputFormat::Json => print_json(evaluation)?,
            OutputFormat::Text => print_evaluation(evaluation),
        },
        Reply::Failed(e) => match format {
            OutputFormat::Json => print_json(&json!({ "error": e.to_string() }))?,
            OutputFormat::Text => println!("❌ {}", e),
        },
    }
    Ok(())
}

pub fn print_evaluation(evaluation: &Evaluation) {
    let (second, third) = evaluation.alternate_keys;

    println!("Estimated Shift-Key: {}", evaluation.best_key);
    println!();
    println!("{}", evaluation.decoded);
    println!();
    println!(
        "If the above is still incorrect, try shifting with the following keys: {}, {}",
        second, third
    );
    println!();
    print_candidate_table(evaluation);
}

fn preview(text: &str, key: i32) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .take(PREVIEW_CHARS)
        .collect();
    shift(&flat, key)
}

pub fn print_candidate_table(evaluation: &Evaluation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Key").fg(Color::Cyan),
        Cell::new("Mod 26"),
        Cell::new("Votes"),
        Cell::new("Share"),
        Cell::new("Preview").add_attribute(Attribute::Bold),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let total = evaluation.candidates.total_votes().max(1) as f64;
    for (rank, vote) in evaluation.candidates.ranked().iter().enumerate() {
        let share = vote.votes as f64 / total * 100.0;
        let key_cell = Cell::new(vote.key).fg(Color::Cyan);
        table.add_row(vec![
            Cell::new(rank + 1),
            if rank == 0 {
                key_cell.add_attribute(Attribute::Bold)
            } else {
                key_cell
            },
            Cell::new(normalize_key(vote.key)),
            Cell::new(vote.votes),
            Cell::new(format!("{:.1}%", share)),
            Cell::new(preview(&evaluation.ciphertext, vote.key)),
        ]);
    }

    println!("{table}");
}

pub fn print_frequency_table(distribution: &Distribution, reference: &ReferenceTable) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Letter").add_attribute(Attribute::Bold),
        Cell::new("Count"),
        Cell::new("Observed").fg(Color::Cyan),
        Cell::new("Reference").fg(Color::Green),
        Cell::new("Closest"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (idx, letter) in letters().enumerate() {
        let observed = distribution.percentage(idx);
        table.add_row(vec![
            Cell::new(letter).add_attribute(Attribute::Bold),
            Cell::new(distribution.count(idx)),
            Cell::new(format!("{:.3}", observed)).fg(Color::Cyan),
            Cell::new(format!("{:.3}", reference.percentage(idx))).fg(Color::Green),
            Cell::new(letter_at(reference.closest_letter(observed))),
        ]);
    }

    println!("\n📊 Letter frequencies ({} letters)", distribution.total());
    println!("{table}");
}
