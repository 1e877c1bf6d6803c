//! Interactive input collection
//!
//! Asks the operator for batch details, custom columns and the sheet name.
//! Every value handed to the core is already parsed and range-checked here;
//! invalid answers are asked again.

use patchsheet_core::{PatchBatch, DMX_UNIVERSE_SIZE};
use patchsheet_io::validate_sheet_name;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::debug;

/// Line-based prompter over any input and output
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Ask a question and return the trimmed answer
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before all questions were answered",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// True only for an explicit "yes"
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self.ask(question)?.eq_ignore_ascii_case("yes"))
    }

    /// Ask for a number within `range`; a blank answer gives `default` when set
    pub fn ask_number<T>(
        &mut self,
        question: &str,
        default: Option<T>,
        range: RangeInclusive<T>,
    ) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let answer = self.ask(question)?;
            if answer.is_empty() {
                if let Some(value) = default {
                    return Ok(value);
                }
            }

            match answer.parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                Ok(_) => self.say(format!(
                    "Please enter a number from {} to {}.",
                    range.start(),
                    range.end()
                ))?,
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    /// Ask for an optional positive number; blank or 0 means unset
    pub fn ask_optional_number(&mut self, question: &str) -> io::Result<Option<u32>> {
        let value = self.ask_number(question, Some(0), 0..=u32::MAX)?;
        Ok((value != 0).then_some(value))
    }

    /// Ask for optional text; blank means unset
    pub fn ask_optional_text(&mut self, question: &str) -> io::Result<Option<String>> {
        let answer = self.ask(question)?;
        Ok((!answer.is_empty()).then_some(answer))
    }

    /// Collect one batch of fixtures
    pub fn read_batch(&mut self) -> io::Result<PatchBatch> {
        self.say("Patch new fixtures:")?;

        let manufacturer = self.ask("Enter the Fixture Manufacture: ")?;
        let model = self.ask("Enter the Fixture Model: ")?;
        let channel_count =
            self.ask_number("Enter the number of DMX channels: ", None, 1..=DMX_UNIVERSE_SIZE)?;
        let universe = self.ask_number("Enter the Universe: ", Some(1), 1..=u32::MAX)?;
        let starting_address = self.ask_number(
            "Enter the Starting DMX Address: ",
            Some(1),
            1..=DMX_UNIVERSE_SIZE,
        )?;
        let quantity =
            self.ask_number("Enter the Number of Fixtures to Patch: ", None, 1..=u32::MAX)?;
        let starting_fixture_number = self.ask_optional_number(
            "Enter the Starting Fixture Number (or press Enter to skip): ",
        )?;
        let starting_control_channel = self.ask_optional_number(
            "Enter the Starting MA Channel Number (or press Enter to skip): ",
        )?;
        let position =
            self.ask_optional_text("Enter the Position (e.g., Pipe 1, or press Enter to skip): ")?;
        let notes = self.ask_optional_text("Enter any optional notes (or press Enter to skip): ")?;

        let batch = PatchBatch {
            manufacturer,
            model,
            channel_count,
            universe,
            starting_address,
            quantity,
            starting_fixture_number,
            starting_control_channel,
            position,
            notes,
        };
        debug!("Collected batch: {:?}", batch);
        Ok(batch)
    }

    /// Ask for custom column names; empty when the operator declines
    pub fn read_custom_columns(&mut self) -> io::Result<Vec<String>> {
        let mut columns = Vec::new();
        if !self.confirm("Do you want to create your own columns? (yes/no): ")? {
            return Ok(columns);
        }

        loop {
            let name = self.ask("Enter a column name (or press Enter to finish): ")?;
            if name.is_empty() {
                break;
            }
            columns.push(name);
        }
        Ok(columns)
    }

    /// Ask for the sheet name until it is usable as a sheet and file name
    pub fn read_sheet_name(&mut self) -> io::Result<String> {
        loop {
            let name = self.ask("Enter the name for the Excel file and sheet: ")?;
            match validate_sheet_name(&name) {
                Ok(()) => return Ok(name),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Take back the output, for inspection in tests
    pub fn into_output(self) -> W {
        self.output
    }
}
