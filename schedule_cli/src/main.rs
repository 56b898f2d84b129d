use clap::{Parser, Subcommand};
use schedule_core::render::format_date;
use schedule_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schedule-maker")]
#[command(about = "Course schedule page generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Term configuration file (TOML) to use instead of the built-in term
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the schedule page (default)
    Build {
        /// Learning objectives Markdown file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Schedule page to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include each session's topics list
        #[arg(long)]
        show_topics: bool,
    },

    /// Print the dated sessions without rendering
    Plan {
        /// Learning objectives Markdown file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print sessions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective term configuration as TOML
    Config {
        /// Write the configuration to this file instead of stdout
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        schedule_core::logging::init_with_level("debug");
    } else {
        schedule_core::logging::init();
    }

    let mut term = match cli.config {
        Some(ref path) => TermConfig::load_from(path)?,
        None => TermConfig::load()?,
    };
    tracing::debug!(
        "Using term {} with {} sessions",
        term.term,
        term.number_of_sessions
    );

    match cli.command {
        Some(Commands::Build {
            input,
            output,
            show_topics,
        }) => {
            term.show_topics |= show_topics;
            cmd_build(&term, input, output)
        }
        Some(Commands::Plan { input, json }) => cmd_plan(&term, input, json),
        Some(Commands::Config { write }) => cmd_config(&term, write),
        None => {
            // Default to "build" command
            cmd_build(&term, None, None)
        }
    }
}

fn cmd_build(term: &TermConfig, input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let input = input.unwrap_or_else(|| term.input_path());
    let output = output.unwrap_or_else(|| term.output_path());

    ScheduleMaker::new(term).make_schedule(&input, &output)?;

    println!("✓ Schedule for term {} written", term.term);
    println!("  Page: {}", output.display());
    Ok(())
}

fn cmd_plan(term: &TermConfig, input: Option<PathBuf>, json: bool) -> Result<()> {
    let input = input.unwrap_or_else(|| term.input_path());
    let sessions = ScheduleMaker::new(term).plan_file(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sessions)?);
        return Ok(());
    }

    for session in &sessions {
        println!("{}", plan_line(session));
    }
    Ok(())
}

fn plan_line(session: &Session) -> String {
    let date = session
        .date()
        .map(format_date)
        .unwrap_or_else(|| "(undated)".into());

    match session {
        Session::Regular(regular) => {
            let exam = if regular.kind == SessionKind::EveningExam {
                "  [evening exam]"
            } else {
                ""
            };
            format!(
                "{:<14} {:>3}  {}{}",
                date,
                regular.number.map(|n| n.to_string()).unwrap_or_default(),
                regular.title,
                exam
            )
        }
        Session::NoClass(no_class) => format!("{:<14}   -  {}", date, no_class.title),
    }
}

fn cmd_config(term: &TermConfig, write: Option<PathBuf>) -> Result<()> {
    match write {
        Some(path) => {
            term.save_to(&path)?;
            println!("✓ Configuration written to {}", path.display());
        }
        None => print!("{}", term.to_toml()?),
    }
    Ok(())
}
