use anyhow::Result;
use clap::Parser;
use gridprint::cli::Cli;
use gridprint::dispatch::WriterView;
use gridprint::{logging, shell};
use std::io;
use std::process::ExitCode;

fn run(cli: Cli) -> Result<()> {
    let db = shell::load_database(cli.data.as_deref())?;
    let view = WriterView::stdout();
    let dispatcher = shell::build_dispatcher(&view, db);

    match cli.command_line() {
        Some(line) => shell::run_once(&dispatcher, &line),
        None => shell::run_interactive(&dispatcher, io::stdin().lock(), io::stderr()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
