
use tracing::info;

use crate::error::{Error, Result};
use crate::record::{format_marks, Record};
use crate::record_store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Add,
    Update { editing_roll: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Added(i64),
    Updated(i64),
}

/// Raw text entry for one record. Nothing reaches the store until `submit`
/// has parsed every field.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordForm {
    pub roll: String,
    pub name: String,
    pub marks: String,
    pub mode: FormMode,
}

impl RecordForm {
    pub fn new() -> Self {
        Self {
            roll: String::new(),
            name: String::new(),
            marks: String::new(),
            mode: FormMode::Add,
        }
    }

    pub fn roll(mut self, roll: impl Into<String>) -> Self {
        self.roll = roll.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn marks(mut self, marks: impl Into<String>) -> Self {
        self.marks = marks.into();
        self
    }

    pub fn begin_edit(&mut self, record: &Record) {
        self.roll = record.roll_no.to_string();
        self.name = record.name.clone();
        self.marks = format_marks(record.marks);
        self.mode = FormMode::Update { editing_roll: record.roll_no };
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn parse(&self) -> Result<Record> {
        let roll = self.roll.trim();
        let name = self.name.trim();
        let marks = self.marks.trim();

        for (field, value) in [("roll", roll), ("name", name), ("marks", marks)] {
            if value.is_empty() {
                return Err(Error::MissingField(field));
            }
        }

        let roll_no = roll.parse::<i64>().map_err(|_| Error::InvalidNumber {
            field: "roll",
            value: roll.to_string(),
        })?;
        let marks = marks.parse::<f64>().map_err(|_| Error::InvalidNumber {
            field: "marks",
            value: marks.to_string(),
        })?;

        Ok(Record::new(roll_no, name, marks))
    }

    pub fn submit(&mut self, store: &mut RecordStore) -> Result<Submission> {
        let record = self.parse()?;
        let roll = record.roll_no;

        let submission = match self.mode {
            FormMode::Add => {
                if store.find(roll).is_some() {
                    return Err(Error::DuplicateRoll(roll));
                }
                store.add(record.roll_no, record.name, record.marks);
                info!("{:<12} - Roll {roll}", "ADD");
                Submission::Added(roll)
            }
            FormMode::Update { editing_roll } => {
                if roll != editing_roll && store.find(roll).is_some() {
                    return Err(Error::DuplicateRoll(roll));
                }
                if !store.update(editing_roll, record) {
                    return Err(Error::RecordNotFound(editing_roll));
                }
                info!("{:<12} - Roll {editing_roll} -> {roll}", "UPDATE");
                Submission::Updated(roll)
            }
        };

        self.clear();
        Ok(submission)
    }
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::new()
    }
}
