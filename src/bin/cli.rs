use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::{Table, settings::Style};
use tracing::info;
use tracing_subscriber::EnvFilter;

use verify_lock::{LockError, LockVerifier, Registry, ReportDocument, ReportOptions, Result};
use verify_lock::{render_text, resolve_root, select_registries, EntryTableRow, EXIT_ERROR, EXIT_OK, ROOT_ENV};

#[derive(Parser)]
#[command(name = "verify-lock")]
#[command(about = "Fail loudly when locked source files drift from their approved content")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root that registry paths are relative to (defaults to two levels above the executable)
    #[arg(long, env = ROOT_ENV, global = true)]
    root: Option<PathBuf>,

    /// Load lock domains from a YAML manifest instead of the builtin tables (repeatable)
    #[arg(long = "registry", global = true)]
    registries: Vec<PathBuf>,

    /// Only check the named lock domain (repeatable)
    #[arg(short, long = "domain", global = true)]
    domains: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify every locked file against its expected digest (default)
    Verify {
        /// Output format: text, json, yaml
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the locked files without reading them
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap exits with 2 on usage errors, which is reserved for violations
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("verify_lock=debug,info")
    } else {
        EnvFilter::new("verify_lock=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();

    colored::control::set_override(atty::is(atty::Stream::Stdout));

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            print_error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn print_error(err: &LockError) {
    eprintln!("{} {}", "✗ Error:".red(), err);
}

fn run(cli: Cli) -> Result<u8> {
    let registries = select_registries(&cli.registries, &cli.domains)?;

    match cli.command.unwrap_or(Commands::Verify { output: OutputFormat::Text }) {
        Commands::Verify { output } => {
            let root = resolve_root(cli.root.as_deref())?;
            cmd_verify(&registries, root, output, cli.verbose)
        }
        Commands::List => {
            cmd_list(&registries);
            Ok(EXIT_OK)
        }
    }
}

fn cmd_verify(registries: &[Registry], root: PathBuf, output: OutputFormat, verbose: bool) -> Result<u8> {
    info!("Checking {} lock domain(s) under {}", registries.len(), root.display());

    let verifier = LockVerifier::new(root);
    let outcome = verifier.verify_all(registries);

    match output {
        OutputFormat::Text => {
            let color = atty::is(atty::Stream::Stdout);
            print!("{}", render_text(&outcome, ReportOptions { verbose, color }));
        }
        OutputFormat::Json => {
            let doc = ReportDocument::new(&outcome, verifier.root());
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Yaml => {
            let doc = ReportDocument::new(&outcome, verifier.root());
            print!("{}", serde_yaml::to_string(&doc)?);
        }
    }

    Ok(outcome.exit_code())
}

fn cmd_list(registries: &[Registry]) {
    if registries.iter().all(Registry::is_empty) {
        println!("No locked files");
        return;
    }

    let rows = EntryTableRow::from_registries(registries);

    let mut table = Table::new(rows);
    table.with(Style::markdown());
    println!("{}", table);
}
