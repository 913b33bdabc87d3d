
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, strum_macros::AsRefStr)]
pub enum Error {
    FsErr(std::io::Error),
    JsonErr(serde_json::Error),
    ConfigMissingEnv(&'static str),

    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
    DuplicateRoll(i64),
    RecordNotFound(i64),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::FsErr(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::JsonErr(value)
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Text shown to whoever filled in the form. Filesystem and config
    /// failures fall through to their debug representation.
    pub fn user_message(&self) -> String {
        use Error::*;

        match self {
            MissingField(..) => "All fields are required.".to_string(),
            InvalidNumber { .. } => "Roll must be int and Marks must be float.".to_string(),
            DuplicateRoll(..) => "Roll number already exists.".to_string(),
            RecordNotFound(roll) => format!("No record with Roll {roll}."),
            _ => self.to_string(),
        }
    }
}
