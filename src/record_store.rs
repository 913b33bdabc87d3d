
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::record::{format_marks, Record};

/// Ordered student records. Lookups are linear and `add` does not enforce
/// unique roll numbers; the form layer checks before inserting.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: vec![],
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    pub fn add(&mut self, roll: i64, name: impl Into<String>, marks: f64) {
        self.records.push(Record::new(roll, name, marks));
    }

    pub fn find(&self, roll: i64) -> Option<&Record> {
        self.records.iter().find(|search| search.roll_no == roll)
    }

    pub fn find_mut(&mut self, roll: i64) -> Option<&mut Record> {
        self.records.iter_mut().find(|search| search.roll_no == roll)
    }

    /// Reassigns every field of the first record keyed by `old_roll`.
    pub fn update(&mut self, old_roll: i64, record: Record) -> bool {
        match self.find_mut(old_roll) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, roll: i64) -> bool {
        match self.records.iter().position(|search| search.roll_no == roll) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn to_list(&self) -> Vec<(i64, String, f64)> {
        self.records.iter().map(Record::as_tuple).collect()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(create_truncated(path)?);
        for record in &self.records {
            writeln!(writer, "{}", record.to_line())?;
        }
        writer.flush()?;

        debug!("{:<12} - {} records to {}", "SAVE", self.records.len(), path.display());
        Ok(())
    }

    /// Replaces the contents with whatever parses out of `path`. A missing
    /// file leaves the store empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.clear();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{:<12} - {} not found, starting empty", "LOAD", path.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for (n, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            match Record::from_line(&line) {
                Some(record) => self.records.push(record),
                None => debug!("{:<12} - skipping line {}: {line:?}", "LOAD", n + 1),
            }
        }

        debug!("{:<12} - {} records from {}", "LOAD", self.records.len(), path.display());
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "Roll No,Name,Marks\r\n")?;
        for record in &self.records {
            write!(
                writer,
                "{},{},{}\r\n",
                record.roll_no,
                csv_field(&record.name),
                format_marks(record.marks)
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_csv(BufWriter::new(create_truncated(path.as_ref())?))
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.records)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_json(BufWriter::new(create_truncated(path.as_ref())?))
    }
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
