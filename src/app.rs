//! Interactive session
//!
//! Reads one command per line, keeps the form fields and the current
//! selection, and reports every outcome as a labelled notification.

use std::io::{BufRead, Write};

use chrono::NaiveDateTime;

use crate::cli::{Command, HELP, is_yes, parse_command, split_item};
use crate::consts::DATE_FORMAT;
use crate::core::{DisplayRow, ExpirationStore, local_now};
use crate::error::AppError;
use crate::output::{expiring_alert, render_listing_json, render_listing_table};
use crate::utils::debug_enabled;

const PROMPT: &str = "exptrack> ";
const CLEAR_CONFIRM: &str = "Are you sure you want to clear all items? [y/N] ";

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SessionOptions {
    pub(crate) use_color: bool,
    pub(crate) json: bool,
    /// Skip confirmation prompts
    pub(crate) assume_yes: bool,
    /// Print a prompt before each command (interactive terminals only)
    pub(crate) prompt: bool,
}

pub(crate) struct Session<R, W> {
    input: R,
    output: W,
    options: SessionOptions,
    clock: fn() -> NaiveDateTime,
    store: ExpirationStore,
    name_field: String,
    date_field: String,
    /// Name of the selected listing row
    selection: Option<String>,
    last_rows: Vec<DisplayRow>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, output: W, options: SessionOptions) -> Self {
        Session {
            input,
            output,
            options,
            clock: local_now,
            store: ExpirationStore::new(),
            name_field: String::new(),
            date_field: String::new(),
            selection: None,
            last_rows: Vec::new(),
        }
    }

    #[cfg(test)]
    fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Add a `NAME@DATE` item before the session starts, without notifications
    pub(crate) fn seed(&mut self, raw: &str) -> Result<(), AppError> {
        let (name, date) = split_item(raw)?;
        self.store.add(name, date)?;
        if debug_enabled() {
            eprintln!("[DEBUG] Seeded {raw:?}");
        }
        Ok(())
    }

    /// Run until `quit` or end of input
    pub(crate) fn run(&mut self) -> Result<(), AppError> {
        self.refresh()?;
        loop {
            if self.options.prompt {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }
            let Some(line) = self.read_line()? else {
                break;
            };
            let command = match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.notify("Error", &e.to_string())?;
                    continue;
                }
            };
            if debug_enabled() {
                eprintln!("[DEBUG] Command: {command:?}");
            }
            match self.dispatch(command) {
                Ok(()) => {}
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => self.notify("Error", &e.to_string())?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Name(text) => self.name_field = text,
            Command::Date(text) => self.date_field = text,
            Command::Today => {
                self.date_field = (self.clock)().date().format(DATE_FORMAT).to_string();
                writeln!(self.output, "Date set to {}", self.date_field)?;
            }
            Command::Add(inline) => self.add(inline)?,
            Command::List => self.refresh()?,
            Command::Select(row) => self.select(&row)?,
            Command::Delete(row) => self.delete(row)?,
            Command::Clear => self.clear()?,
            Command::Check => self.check()?,
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn add(&mut self, inline: Option<String>) -> Result<(), AppError> {
        if let Some(raw) = inline {
            let (name, date) = split_item(&raw)?;
            self.name_field = name.to_string();
            self.date_field = date.to_string();
        }
        self.store.add(&self.name_field, &self.date_field)?;
        self.name_field.clear();
        self.date_field.clear();
        self.refresh()?;
        self.notify("Success", "Item added successfully!")
    }

    fn select(&mut self, row: &str) -> Result<(), AppError> {
        let index = row
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1 && n <= self.last_rows.len())
            .ok_or_else(|| AppError::InvalidRow {
                input: row.to_string(),
            })?;
        let record = &self.last_rows[index - 1].record;
        writeln!(self.output, "Selected {} ({})", record.name, record.date)?;
        self.selection = Some(record.name.clone());
        Ok(())
    }

    fn delete(&mut self, row: Option<String>) -> Result<(), AppError> {
        if let Some(row) = row {
            self.select(&row)?;
        }
        let name = self.selection.take().ok_or(AppError::NoSelection)?;
        self.store.delete(&name);
        self.refresh()
    }

    fn clear(&mut self) -> Result<(), AppError> {
        if !self.options.assume_yes {
            write!(self.output, "{CLEAR_CONFIRM}")?;
            self.output.flush()?;
            let answer = self.read_line()?.unwrap_or_default();
            if !self.options.prompt {
                writeln!(self.output)?;
            }
            if !is_yes(&answer) {
                return Ok(());
            }
        }
        self.store.clear_all();
        self.refresh()
    }

    fn check(&mut self) -> Result<(), AppError> {
        let lines = self.store.expiring_soon((self.clock)());
        let (title, body) = expiring_alert(&lines);
        self.notify(title, &body)
    }

    /// Re-sort the store and render the listing
    fn refresh(&mut self) -> Result<(), AppError> {
        let rows = self.store.list_sorted_for_display((self.clock)());
        let rendered = if self.options.json {
            render_listing_json(&rows)
        } else {
            render_listing_table(&rows, self.options.use_color)
        };
        writeln!(self.output, "{rendered}")?;
        self.last_rows = rows;
        if let Some(name) = &self.selection
            && !self.store.contains_name(name)
        {
            self.selection = None;
        }
        Ok(())
    }

    fn notify(&mut self, title: &str, body: &str) -> Result<(), AppError> {
        writeln!(self.output, "[{title}] {body}")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
