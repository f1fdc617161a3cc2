mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::process;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::annuity::{FvArgs, IpmtArgs, NperArgs, PmtArgs, PvArgs, ScheduleArgs};
use commands::discounting::NpvArgs;
use commands::eval::EvalArgs;

/// Spreadsheet-compatible time-value-of-money calculations
#[derive(Parser)]
#[command(
    name = "finlib",
    version,
    about = "Spreadsheet-compatible time-value-of-money calculations",
    long_about = "A CLI for the classic spreadsheet financial functions: FV, PV, PMT, \
                  NPER, NPV and IPMT, plus a per-period interest schedule. Arguments \
                  follow spreadsheet sign conventions (money paid out is negative)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log resolved inputs to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Future value of a payment stream plus a lump sum
    Fv(FvArgs),
    /// Present value of a payment stream plus a target balance
    Pv(PvArgs),
    /// Level payment per period
    Pmt(PmtArgs),
    /// Number of periods to reach a target balance
    Nper(NperArgs),
    /// Net present value of equally spaced cash flows
    Npv(NpvArgs),
    /// Interest portion of one period's payment
    Ipmt(IpmtArgs),
    /// Interest/principal split for every period
    Schedule(ScheduleArgs),
    /// Evaluate a JSON request naming its function
    Eval(EvalArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Fv(args) => commands::annuity::run_fv(args),
        Commands::Pv(args) => commands::annuity::run_pv(args),
        Commands::Pmt(args) => commands::annuity::run_pmt(args),
        Commands::Nper(args) => commands::annuity::run_nper(args),
        Commands::Ipmt(args) => commands::annuity::run_ipmt(args),
        Commands::Schedule(args) => commands::annuity::run_schedule(args),
        Commands::Npv(args) => commands::discounting::run_npv(args),
        Commands::Eval(args) => commands::eval::run_eval(args),
        Commands::Version => {
            println!("finlib {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            if let Some(Value::Array(warnings)) = value.get("warnings") {
                for w in warnings.iter().filter_map(Value::as_str) {
                    warn!("{w}");
                }
            }
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
