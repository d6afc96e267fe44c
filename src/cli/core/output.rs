//! Terminal rendering of lyric records shared by `search` and `list`.

use clap::ValueEnum;
use crossterm::{
    execute,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io;

use crate::core::record::LyricRecord;
use crate::error::Result;

const ACCENT: Color = Color::Rgb { r: 255, g: 165, b: 0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Detailed,
}

pub fn print_records(records: &[LyricRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(records)?,
        OutputFormat::Detailed => output_detailed(records),
        OutputFormat::Table => output_table(records),
    }
    Ok(())
}

pub fn output_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn output_table(records: &[LyricRecord]) {
    let _ = execute!(io::stdout(), SetForegroundColor(ACCENT));
    println!();
    println!("┌───────┬─────────────────────────┬─────────────────────────┬─────────────────────────┬───────┐");
    println!("│ ID    │ Artist                  │ Title                   │ Source file             │ Lines │");
    println!("├───────┼─────────────────────────┼─────────────────────────┼─────────────────────────┼───────┤");
    let _ = execute!(io::stdout(), ResetColor);

    for record in records {
        println!(
            "│ {:<5} │ {:<23} │ {:<23} │ {:<23} │ {:>5} │",
            record.id,
            truncate_string(record.artist.as_deref().unwrap_or("Unknown"), 23),
            truncate_string(&record.title, 23),
            truncate_string(&record.source_filename, 23),
            record.lyrics.lines().count(),
        );
    }

    let _ = execute!(io::stdout(), SetForegroundColor(ACCENT));
    println!("└───────┴─────────────────────────┴─────────────────────────┴─────────────────────────┴───────┘");
    let _ = execute!(io::stdout(), ResetColor);
    println!("{} record(s)", records.len());
}

fn output_detailed(records: &[LyricRecord]) {
    for record in records {
        print_record(record);
        println!();
    }
}

/// Full view of one record including its lyrics.
pub fn print_record(record: &LyricRecord) {
    let _ = execute!(io::stdout(), SetForegroundColor(ACCENT));
    println!("#{} {}", record.id, record.title);
    let _ = execute!(io::stdout(), ResetColor);
    println!("  Artist: {}", record.artist.as_deref().unwrap_or("Unknown"));
    println!("  Source: {}", record.source_filename);
    println!("  Lines:  {}", record.lyrics.lines().count());
    println!();
    println!("{}", record.lyrics);
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("Bohemian Rhapsody", 8), "Bohemia…");
        assert_eq!(truncate_string("Ärger über Ärger", 5).chars().count(), 5);
    }
}
