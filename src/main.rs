use std::io::{stdin, stdout, Write};

use chrono::Local;
use clap::Parser;
use color_print::{ceprint, ceprintln};
use tracing::error;
use tracing_subscriber::EnvFilter;

use student_records::cli::CommandLine;
use student_records::commands::run;
use student_records::config::Config;
use student_records::Result;

fn confirm(prompt: &str) -> Result<bool> {
    ceprint!("<yellow>{}</yellow> [y/N] ", prompt);
    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CommandLine::parse();
    let config = Config::resolve(args.file);

    let mut out = stdout().lock();
    let status = run(args.command, &config, &mut out, &mut confirm);
    out.flush()?;

    let now = Local::now().format("%H:%M:%S");
    match status {
        Ok(status) => {
            ceprintln!("<dim>[{}]</dim> <green>{}</green>", now, status);
            Ok(())
        }
        Err(e) => {
            error!("{:<12} - {e:?}", e.as_ref());
            ceprintln!("<dim>[{}]</dim> <red>Error</red>: {}", now, e.user_message());
            std::process::exit(1);
        }
    }
}
