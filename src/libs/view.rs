//! Terminal rendering.
//!
//! Takes the structured values from [`crate::libs::formatter`] and prints them
//! with `prettytable`, which is also the only place colors are applied. Colors
//! are dropped automatically when stdout is not a terminal.

use super::formatter::{Field, FormattedInterval, IssueCard};
use prettytable::{format, row, Cell, Row, Table};

const TITLE_STYLE: &str = "bFwBb";
const HEADER_STYLE: &str = "bFg";
const KEY_STYLE: &str = "Fb";
const AUTHOR_STYLE: &str = "bFc";

pub struct View {}

impl View {
    fn clean_table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table
    }

    /// A single highlighted line.
    pub fn title(text: &str) {
        let mut table = Self::clean_table();
        table.add_row(Row::new(vec![Cell::new(text).style_spec(TITLE_STYLE)]));
        table.printstd();
    }

    /// Two-column listing with a header row, keys highlighted.
    pub fn fields(header: (&str, &str), rows: &[Field]) {
        let mut table = Self::clean_table();
        table.set_titles(Row::new(vec![
            Cell::new(header.0).style_spec(HEADER_STYLE),
            Cell::new(header.1).style_spec(HEADER_STYLE),
        ]));
        for field in rows {
            table.add_row(Row::new(vec![
                Cell::new(&field.label).style_spec(KEY_STYLE),
                Cell::new(&field.text),
            ]));
        }
        table.printstd();
    }

    pub fn issue(card: &IssueCard) {
        Self::title(&card.title);
        println!();
        println!("{}", card.summary);
        println!();

        let mut table = Self::clean_table();
        for field in &card.fields {
            table.add_row(Row::new(vec![Cell::new(&field.label), Cell::new(&field.text)]));
        }
        table.printstd();

        println!();
        println!("{}", card.description);
        println!();
    }

    /// Comment body followed by its author, one block per comment.
    pub fn comments(rows: &[Field]) {
        let mut table = Self::clean_table();
        for comment in rows {
            table.add_row(Row::new(vec![Cell::new(&comment.text)]));
            table.add_row(Row::new(vec![Cell::new(&comment.label).style_spec(AUTHOR_STYLE)]));
        }
        table.printstd();
    }

    pub fn intervals(intervals: &[FormattedInterval]) {
        let mut table = Table::new();

        table.add_row(row!["#", "START", "END", "DURATION"]);
        for interval in intervals {
            table.add_row(row![interval.id, interval.start, interval.end, interval.duration]);
        }
        table.printstd();
    }
}
