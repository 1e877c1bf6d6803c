//! Interactive run: patch loop, sheet layout and output

use crate::prompt::Prompter;
use anyhow::{Context, Result};
use patchsheet_core::{compose, PatchSession, SheetSchema};
use patchsheet_io::{ensure_output_dir, output_path, write_sheet, SheetStyle};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Collect batches until the operator stops.
///
/// A rejected batch is reported and must be entered again before the
/// "another batch" question is asked.
pub fn collect_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> io::Result<PatchSession> {
    let mut session = PatchSession::new();

    loop {
        let batch = prompter.read_batch()?;

        if let Err(e) = session.submit_batch(&batch) {
            prompter.say(format!("Error: {}.", e))?;
            prompter.say("Please restart the batch with valid values.")?;
            continue;
        }

        if !prompter.confirm("Do you want to patch another batch of fixtures? (yes/no): ")? {
            break;
        }
    }

    Ok(session)
}

/// Run the whole generator and return the path of the written workbook
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    output_dir: &Path,
    style: &SheetStyle,
) -> Result<PathBuf> {
    prompter.say("Welcome to The Fixture Sheet Generator")?;

    let session = collect_session(prompter).context("Failed to collect fixtures")?;
    info!(
        "Session finished with {} fixtures in {} universes",
        session.len(),
        session.universes().len()
    );

    let custom_columns = prompter.read_custom_columns()?;
    let schema = SheetSchema::with_custom_columns(custom_columns);
    let sheet = compose(session.fixtures(), &schema);

    let sheet_name = prompter.read_sheet_name()?;
    ensure_output_dir(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
    let path = output_path(output_dir, &sheet_name);
    write_sheet(&sheet, &sheet_name, &path, style)
        .with_context(|| format!("Failed to write spreadsheet: {:?}", path))?;

    prompter.say(format!(
        "Spreadsheet created successfully! The file is saved as: {}",
        path.display()
    ))?;
    prompter.say(
        "Please fill in the 'Unit # on position' column manually after opening the spreadsheet.",
    )?;

    Ok(path)
}
