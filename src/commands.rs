
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::{Command, ExportFormat};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::form::{RecordForm, Submission};
use crate::record_store::RecordStore;
use crate::table_view::TableView;

/// Runs one command against the configured data file. Table output goes to
/// `out`; the returned string is the status line.
pub fn run<W: Write>(
    command: Command,
    config: &Config,
    out: &mut W,
    confirm: &mut dyn FnMut(&str) -> Result<bool>,
) -> Result<String> {
    let path = config.data_file.as_path();
    let mut store = RecordStore::load_from(path)?;

    match command {
        Command::List { filter, json } => {
            let view = TableView::new().filter(filter.unwrap_or_default());
            if json {
                serde_json::to_writer_pretty(&mut *out, &view.rows(&store))?;
                writeln!(out)?;
            } else {
                write!(out, "{}", view.render(&store))?;
            }
            Ok(format!("{} of {} records shown.", view.rows(&store).len(), store.len()))
        }
        Command::Find { roll } => {
            let record = store.find(roll).ok_or(Error::RecordNotFound(roll))?;
            serde_json::to_writer_pretty(&mut *out, record)?;
            writeln!(out)?;
            Ok(format!("Found Roll {roll}."))
        }
        Command::Add { roll, name, marks } => {
            let mut form = RecordForm::new().roll(roll).name(name).marks(marks);
            let submission = form.submit(&mut store)?;
            commit(&store, path)?;
            Ok(status_for(submission))
        }
        Command::Update { roll, new_roll, name, marks } => {
            let mut form = RecordForm::new();
            form.begin_edit(store.find(roll).ok_or(Error::RecordNotFound(roll))?);
            if let Some(new_roll) = new_roll {
                form.roll = new_roll;
            }
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(marks) = marks {
                form.marks = marks;
            }
            let submission = form.submit(&mut store)?;
            commit(&store, path)?;
            Ok(status_for(submission))
        }
        Command::Delete { roll, yes } => {
            if store.find(roll).is_none() {
                return Err(Error::RecordNotFound(roll));
            }
            if !yes && !confirm(&format!("Delete record with Roll {roll}?"))? {
                return Ok("Cancelled.".to_string());
            }
            store.delete(roll);
            commit(&store, path)?;
            info!("{:<12} - Roll {roll}", "DELETE");
            Ok(format!("Deleted Roll {roll}."))
        }
        Command::Clear { yes } => {
            let count = store.len();
            if !yes && !confirm(&format!("Delete all {count} records?"))? {
                return Ok("Cancelled.".to_string());
            }
            store.clear();
            commit(&store, path)?;
            info!("{:<12} - {count} records", "CLEAR");
            Ok(format!("Cleared {count} records."))
        }
        Command::Export { path: target, format } => {
            match format {
                ExportFormat::Csv => store.export_csv(&target)?,
                ExportFormat::Json => store.export_json(&target)?,
            }
            info!("{:<12} - {} records to {}", "EXPORT", store.len(), target.display());
            Ok(format!("Exported to {}.", target.display()))
        }
    }
}

fn commit(store: &RecordStore, path: &Path) -> Result<()> {
    store.save(path)?;
    info!("{:<12} - {}", "SAVED", path.display());
    Ok(())
}

fn status_for(submission: Submission) -> String {
    match submission {
        Submission::Added(roll) => format!("Added record for Roll {roll}."),
        Submission::Updated(roll) => format!("Updated record for Roll {roll}."),
    }
}
