use anyhow::{Context, Result};
use clap::Parser as _;
use log::LevelFilter;

use semver_compat::cli;
use semver_compat::config;
use semver_compat::ui;
use semver_compat::{Parser, SemverCompatError};

#[derive(clap::Parser)]
#[command(
    name = "semver-compat",
    version,
    about = "Validate, compare and sort semantic and legacy version strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Reject legacy shorthand versions such as 1.0.1b2"
    )]
    strict: bool,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Check that each version string is valid
    Check {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Compare two versions by precedence
    Compare { left: String, right: String },
    /// Print versions sorted by precedence
    Sort {
        #[arg(short, long, help = "Highest precedence first")]
        reverse: bool,

        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print the highest-precedence version
    Max {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

/// Report a failed command and exit with a validation failure.
fn fail(err: SemverCompatError) -> ! {
    ui::display_error(&err.to_string());
    std::process::exit(1);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Load configuration
    let config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    ui::configure_colors(config.output.color);

    let mut parser_config = config.parser.clone();
    if args.strict {
        parser_config.compatibility = false;
    }
    let parser = Parser::from_config(&parser_config);
    log::debug!("Using grammars {:?}", parser.grammar_names());

    let canonical = config.output.canonical;
    match args.command {
        Command::Check { versions } => {
            let report = cli::run_check(&parser, &versions);
            ui::display_check_report(&report);
            if !report.all_valid() {
                std::process::exit(1);
            }
        }
        Command::Compare { left, right } => match cli::run_compare(&parser, &left, &right) {
            Ok(comparison) => println!("{}", ui::format_comparison(&comparison, canonical)),
            Err(e) => fail(e),
        },
        Command::Sort { reverse, versions } => match cli::run_sort(&parser, &versions, reverse) {
            Ok(sorted) => ui::display_versions(&sorted, canonical),
            Err(e) => fail(e),
        },
        Command::Max { versions } => match cli::run_max(&parser, &versions) {
            Ok(Some(max)) => println!("{}", ui::version_label(&max, canonical)),
            Ok(None) => {}
            Err(e) => fail(e),
        },
    }

    Ok(())
}
