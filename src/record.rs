use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub roll_no: i64,
    pub name: String,
    pub marks: f64,
}

impl Record {
    pub fn new(roll_no: i64, name: impl Into<String>, marks: f64) -> Self {
        Self {
            roll_no,
            name: name.into(),
            marks,
        }
    }

    /// One line of the data file, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{} {} {}", self.roll_no, self.name, format_marks(self.marks))
    }

    /// Parses `roll name marks`. Fields past the third are ignored, and any
    /// line with fewer fields or unparseable numbers yields `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        if parts.len() < 3 {
            return None;
        }

        let roll_no = parts[0].parse::<i64>().ok()?;
        let marks = parts[2].parse::<f64>().ok()?;
        Some(Self::new(roll_no, parts[1], marks))
    }

    pub fn as_tuple(&self) -> (i64, String, f64) {
        (self.roll_no, self.name.clone(), self.marks)
    }
}

/// Shortest round-tripping form, always carrying a fractional part (`90.0`).
pub fn format_marks(marks: f64) -> String {
    format!("{marks:?}")
}
