mod employees;
mod page;
mod paths;
mod settings;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::ArgMatches;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use datatable::RenderContext;
use datatable::error::ConfigError;
use log::{SetLoggerError, error, info, warn};
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use page::EmployeePage;
use settings::{DemoSettings, SettingsError};

#[derive(Parser)]
#[command(name = "datatable-demo")]
#[command(about = "Render the employee directory table", long_about = None)]
struct Cli {
    /// Render as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Emit HTML instead of a text grid
    #[arg(long)]
    html: bool,

    /// Click "edit" on the employee with this name (repeatable, runs in order)
    #[arg(long, value_name = "NAME")]
    edit: Vec<String>,

    /// Click "delete" on the employee with this name (repeatable, runs in order)
    #[arg(long, value_name = "NAME")]
    delete: Vec<String>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid table configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot install logger: {0}")]
    Logger(#[from] SetLoggerError),
}

fn init_logging(settings: &DemoSettings) -> Result<(), DemoError> {
    let level = settings.level_filter()?;
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    let log_file_error = |source: io::Error| DemoError::LogFile {
        path: log_path.clone(),
        source,
    };
    paths::rotate_logs().map_err(log_file_error)?;
    let file = File::create(&log_path).map_err(log_file_error)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

/// A row button click requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageAction {
    Edit(String),
    Delete(String),
}

impl PageAction {
    /// Click the button. `false` if no employee has the name.
    fn apply(&self, page: &mut EmployeePage) -> bool {
        match self {
            Self::Edit(name) => page.edit(name),
            Self::Delete(name) => page.delete(name).is_some(),
        }
    }

    fn describe(&self) -> (&'static str, &str) {
        match self {
            Self::Edit(name) => ("edit", name),
            Self::Delete(name) => ("delete", name),
        }
    }
}

/// `--edit` and `--delete` values interleaved in command-line order.
fn page_actions(cli: &Cli, matches: &ArgMatches) -> Vec<PageAction> {
    let mut actions: Vec<(usize, PageAction)> = Vec::new();
    if let Some(indices) = matches.indices_of("edit") {
        actions.extend(indices.zip(cli.edit.iter().cloned().map(PageAction::Edit)));
    }
    if let Some(indices) = matches.indices_of("delete") {
        actions.extend(indices.zip(cli.delete.iter().cloned().map(PageAction::Delete)));
    }
    actions.sort_by_key(|(index, _)| *index);
    actions.into_iter().map(|(_, action)| action).collect()
}

fn run(cli: Cli, actions: &[PageAction]) -> Result<(), DemoError> {
    let settings = match cli.settings.clone().or_else(paths::settings_file) {
        Some(path) => DemoSettings::load(&path)?,
        None => DemoSettings::default(),
    };
    init_logging(&settings)?;

    let ctx = match cli.today {
        Some(date) => RenderContext::on(date),
        None => RenderContext::now(),
    };
    info!("Rendering employee page at {}", ctx.time());

    let mut page = EmployeePage::new(employees::sample(), &settings)?;

    for action in actions {
        if !action.apply(&mut page) {
            let (verb, name) = action.describe();
            warn!("No employee named {name} to {verb}");
            eprintln!("No employee named '{name}'");
        }
    }

    let table = page.render(&ctx);
    if cli.html {
        print!("{}", table.to_html());
    } else {
        print!("{}", table.to_text());
        println!("{} employees", page.employee_count());
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    let actions = page_actions(&cli, &matches);
    match run(cli, &actions) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions_for(args: &[&str]) -> Vec<PageAction> {
        let matches = Cli::command()
            .try_get_matches_from(std::iter::once("datatable-demo").chain(args.iter().copied()))
            .unwrap();
        let cli = Cli::from_arg_matches(&matches).unwrap();
        page_actions(&cli, &matches)
    }

    #[test]
    fn test_actions_keep_command_line_order() {
        let actions = actions_for(&[
            "--delete",
            "Jane Smith",
            "--edit",
            "John Doe",
            "--html",
            "--delete",
            "Zoe Scott",
        ]);
        assert_eq!(
            actions,
            vec![
                PageAction::Delete("Jane Smith".into()),
                PageAction::Edit("John Doe".into()),
                PageAction::Delete("Zoe Scott".into()),
            ]
        );
    }

    #[test]
    fn test_no_actions() {
        assert!(actions_for(&["--html"]).is_empty());
    }

    #[test]
    fn test_delete_before_edit_misses() {
        let mut page = EmployeePage::new(employees::sample(), &DemoSettings::default()).unwrap();
        let actions = actions_for(&["--delete", "Jane Smith", "--edit", "Jane Smith"]);

        let applied: Vec<bool> = actions.iter().map(|a| a.apply(&mut page)).collect();
        assert_eq!(applied, vec![true, false]);
        assert_eq!(page.employee_count(), 19);
    }
}
