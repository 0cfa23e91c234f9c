//! # Cleat CLI Application
//!
//! Terminal front end for the bolted tension member checks. Form values come
//! from a JSON file (`--input`), individual `--set "Label=value"` overrides,
//! or an interactive prompt session.

mod interactive;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use calc_core::errors::INPUT_ERROR_MESSAGE;
use calc_core::file_io::{export_pdf, load_form, pdf_path_for};
use calc_core::form::{FieldKind, FormSection};
use calc_core::{CalcError, CalcResult, DesignForm, DesignSession};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Check a bolted tension member and export the results to PDF")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every form field with its options
    Fields,
    /// Run the four design checks
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the preview text (parameters plus check results)
    Preview {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Write the preview to a PDF file
    Export {
        #[command(flatten)]
        input: InputArgs,
        /// File name, `.pdf` is appended when missing
        #[arg(short, long)]
        name: String,
        /// Directory to write into
        #[arg(long, env = "CLEAT_OUTPUT_DIR", default_value = ".")]
        dir: PathBuf,
    },
    /// Prompt for each field, check, then optionally export
    Interactive {
        /// Directory to write into
        #[arg(long, env = "CLEAT_OUTPUT_DIR", default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON object of field values keyed by label
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Set one field, e.g. --set "Number of Bolts=3" (repeatable)
    #[arg(short, long = "set", value_name = "LABEL=VALUE")]
    set: Vec<String>,
}

impl InputArgs {
    fn load(&self) -> CalcResult<DesignForm> {
        let mut form = match &self.input {
            Some(path) => load_form(path)?,
            None => DesignForm::new(),
        };

        for assignment in &self.set {
            let (label, value) = assignment.split_once('=').ok_or_else(|| {
                CalcError::invalid_input("--set", assignment.as_str(), "Expected LABEL=VALUE")
            })?;
            let field = form.set_by_label(label, value)?;
            debug!(field = %field, value, "override applied");
        }

        Ok(form)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e.is_input_error() {
                eprintln!("Input Error: {}", INPUT_ERROR_MESSAGE);
            }
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// 2 for bad input, 1 for everything else
fn exit_code_for(e: &CalcError) -> u8 {
    if e.is_input_error() { 2 } else { 1 }
}

fn run(command: Commands) -> CalcResult<()> {
    match command {
        Commands::Fields => {
            print!("{}", fields_listing());
            Ok(())
        }
        Commands::Check { input, json } => {
            let mut session = DesignSession::with_form(input.load()?);
            let result = session.run_checks()?;
            if json {
                println!("{}", serde_json::to_string_pretty(result)?);
            } else {
                println!("{}", result.summary_text());
            }
            Ok(())
        }
        Commands::Preview { input } => {
            let session = checked_session(input.load()?);
            println!("{}", session.preview_text());
            Ok(())
        }
        Commands::Export { input, name, dir } => {
            let session = checked_session(input.load()?);
            match pdf_path_for(&name, &dir) {
                Some(path) => {
                    export_pdf(&session, &path)?;
                    println!("PDF saved as {}", path.display());
                }
                None => println!("PDF generation was canceled."),
            }
            Ok(())
        }
        Commands::Interactive { dir } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive::run(stdin.lock(), stdout.lock(), &dir)
        }
    }
}

/// Run the checks if the inputs allow it; the preview reports an unchecked
/// design otherwise.
fn checked_session(form: DesignForm) -> DesignSession {
    let mut session = DesignSession::with_form(form);
    if let Err(e) = session.run_checks() {
        debug!(error = %e, "preview without results");
    }
    session
}

fn fields_listing() -> String {
    let mut out = String::new();
    for section in FormSection::ALL {
        out.push_str(section.title().trim_end());
        out.push('\n');
        for field in section.fields() {
            match field.kind() {
                FieldKind::FreeText { hint } => {
                    out.push_str(&format!("  {} ({})\n", field.label(), hint));
                }
                FieldKind::Choice { options } => {
                    out.push_str(&format!("  {} [{}]\n", field.label(), options.join(", ")));
                }
            }
        }
    }
    out
}
