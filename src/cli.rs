use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[clap(name = "student_records", version, about = "Maintain student roll numbers, names and marks")]
pub struct CommandLine {
    /// Data file; defaults to $STUDENT_RECORDS_FILE, then students.txt.
    #[clap(long, global = true)]
    pub file: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List {
        #[clap(long)]
        filter: Option<String>,
        #[clap(long, action)]
        json: bool,
    },
    Find {
        roll: i64,
    },
    Add {
        roll: String,
        name: String,
        marks: String,
    },
    Update {
        /// Roll number of the record being edited.
        roll: i64,
        #[clap(long = "roll")]
        new_roll: Option<String>,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        marks: Option<String>,
    },
    Delete {
        roll: i64,
        #[clap(long, short, action)]
        yes: bool,
    },
    Clear {
        #[clap(long, short, action)]
        yes: bool,
    },
    Export {
        path: PathBuf,
        #[clap(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandLine, ExportFormat};
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<CommandLine, clap::Error> {
        CommandLine::try_parse_from(std::iter::once("student_records").chain(args.iter().copied()))
    }

    #[test]
    fn parses_add_with_global_file() {
        let args = parse(&["add", "3", "Carol", "77.5", "--file", "x.txt"]).unwrap();
        assert_eq!(args.file.unwrap().to_str(), Some("x.txt"));
        match args.command {
            Command::Add { roll, name, marks } => {
                assert_eq!(roll, "3");
                assert_eq!(name, "Carol");
                assert_eq!(marks, "77.5");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_update_overrides() {
        let args = parse(&["update", "3", "--roll", "4", "--marks", "80"]).unwrap();
        match args.command {
            Command::Update { roll, new_roll, name, marks } => {
                assert_eq!(roll, 3);
                assert_eq!(new_roll.as_deref(), Some("4"));
                assert_eq!(name, None);
                assert_eq!(marks.as_deref(), Some("80"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn export_defaults_to_csv() {
        let args = parse(&["export", "out.csv"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Export { format: ExportFormat::Csv, .. }
        ));

        let args = parse(&["export", "out.json", "--format", "json"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Export { format: ExportFormat::Json, .. }
        ));
    }

    #[test]
    fn delete_requires_numeric_roll() {
        assert!(parse(&["delete", "abc"]).is_err());
    }
}
