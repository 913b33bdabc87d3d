pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod form;
pub mod record;
pub mod record_store;
pub mod table_view;

pub use self::error::{Error, Result};
pub use record::Record;
pub use record_store::RecordStore;
