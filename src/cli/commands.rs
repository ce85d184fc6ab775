use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand};

use super::prompt::PromptSelector;
use crate::clipboard::read_transcript_from_clipboard;
use crate::config::{ImportConfig, resolve_config};
use crate::importer::{ImportSummary, import_records, parse_and_validate};
use crate::majors::{MajorSelector, PresetSelector, group_courses_by_prefix};
use crate::models::CourseRecord;
use crate::store::{InMemoryStore, load_snapshot, save_snapshot};
use crate::summary::summarize;
use crate::telemetry::{init_tracing, level_for_verbosity};
use crate::utils::paths::STDIN_PATH;
use crate::utils::{format_path_with_tilde, read_transcript, resolve_state_path};

#[derive(Parser)]
#[command(name = "transcript-importer")]
#[command(version)]
#[command(about = "Import a pasted academic transcript into a course planner", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// JSON config file overriding the built-in vocabulary and throttling
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import a transcript, replacing the planner's semesters, categories and courses
    Import(ImportArgs),
    /// Parse and validate a transcript without importing; prints records as JSON
    Parse(InputArgs),
    /// Show credit and GPA statistics of the saved planner
    Stats {
        /// Planner state file
        #[arg(long, value_name = "PATH")]
        state: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Transcript file, or `-` for standard input
    #[arg(value_name = "FILE", required_unless_present = "clipboard", conflicts_with = "clipboard")]
    pub file: Option<PathBuf>,

    /// Read the transcript from the system clipboard
    #[arg(long)]
    pub clipboard: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Planner state file
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Course-code prefix of the primary major
    #[arg(long, value_name = "PREFIX")]
    pub primary: Option<String>,

    /// Course-code prefix of the secondary major
    #[arg(long, value_name = "PREFIX", requires = "primary")]
    pub secondary: Option<String>,

    /// Accept the detected majors without asking
    #[arg(long, conflicts_with_all = ["decline", "primary"])]
    pub yes: bool,

    /// Treat every detected major prefix as a general elective
    #[arg(long, conflicts_with = "primary")]
    pub decline: bool,

    /// Never prompt; same as --yes unless another choice flag is given
    #[arg(long)]
    pub non_interactive: bool,

    /// Courses added per batch
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Pause after each course, in milliseconds
    #[arg(long, value_name = "MS")]
    pub record_delay_ms: Option<u64>,

    /// Pause between batches, in milliseconds
    #[arg(long, value_name = "MS")]
    pub batch_delay_ms: Option<u64>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json, level_for_verbosity(cli.verbose));

    match &cli.command {
        Some(Commands::Import(args)) => {
            let config = resolve_config(cli.config.as_deref())?;
            run_import(args, config)?;
        }
        Some(Commands::Parse(args)) => {
            let config = resolve_config(cli.config.as_deref())?;
            run_parse(args, &config)?;
        }
        Some(Commands::Stats { state, json }) => {
            show_stats(state.as_deref(), *json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn read_input(args: &InputArgs) -> Result<String> {
    if args.clipboard {
        return read_transcript_from_clipboard();
    }
    match &args.file {
        Some(path) => read_transcript(path),
        None => Err(anyhow!("No transcript given: pass a FILE, `-` for stdin, or --clipboard")),
    }
}

fn reads_stdin(args: &InputArgs) -> bool {
    args.file.as_deref().is_some_and(|p| p.as_os_str() == STDIN_PATH)
}

fn run_parse(args: &InputArgs, config: &ImportConfig) -> Result<()> {
    let text = read_input(args)?;
    let records = parse_and_validate(&text, config).map_err(|e| anyhow!(e.user_message()))?;

    let json = serde_json::to_string_pretty(&records).context("Failed to serialize records")?;
    println!("{}", json);
    Ok(())
}

fn run_import(args: &ImportArgs, mut config: ImportConfig) -> Result<()> {
    if let Some(batch_size) = args.batch_size {
        config.ingest.batch_size = batch_size;
    }
    if let Some(delay) = args.record_delay_ms {
        config.ingest.record_delay_ms = delay;
    }
    if let Some(delay) = args.batch_delay_ms {
        config.ingest.batch_delay_ms = delay;
    }

    let text = read_input(&args.input)?;
    let records = parse_and_validate(&text, &config).map_err(|e| anyhow!(e.user_message()))?;

    let state_path = resolve_state_path(args.state.as_deref())?;
    let mut store = load_snapshot(&state_path)?.map(|s| s.planner).unwrap_or_default();

    let interactive = args.primary.is_none()
        && !args.yes
        && !args.decline
        && !args.non_interactive
        && !reads_stdin(&args.input)
        && io::stdin().is_terminal();

    let summary = if interactive {
        let course_names: Vec<(String, Vec<String>)> =
            group_courses_by_prefix(&records, &config.vocabulary)
                .into_iter()
                .map(|(prefix, courses)| {
                    (prefix, courses.into_iter().map(|r| r.course_name.clone()).collect::<Vec<_>>())
                })
                .collect();
        let mut selector = PromptSelector::new(io::stdin().lock(), io::stderr())
            .with_course_names(course_names);
        import_into(&records, &mut store, &mut selector, &config)?
    } else {
        let mut selector = preset_selector(args);
        import_into(&records, &mut store, &mut selector, &config)?
    };

    save_snapshot(&state_path, &store)?;
    print_summary(&summary, &state_path);
    Ok(())
}

fn preset_selector(args: &ImportArgs) -> PresetSelector {
    match &args.primary {
        Some(primary) => PresetSelector::with_choice(primary.clone(), args.secondary.clone()),
        None if args.decline => PresetSelector::decline(),
        None => PresetSelector::accept_defaults(),
    }
}

fn import_into(
    records: &[CourseRecord],
    store: &mut InMemoryStore,
    selector: &mut dyn MajorSelector,
    config: &ImportConfig,
) -> Result<ImportSummary> {
    import_records(records, store, selector, config).map_err(|e| anyhow!(e.user_message()))
}

fn print_summary(summary: &ImportSummary, state_path: &Path) {
    println!("Imported {} of {} courses", summary.ingested(), summary.records);
    println!("  Semesters: {}", summary.semesters_created);
    println!(
        "  Categories: {} ({} removed after import)",
        summary.categories_created, summary.categories_removed
    );

    if let Some(resolution) = &summary.resolution {
        println!("  Primary major: {}", resolution.primary_prefix.as_deref().unwrap_or("-"));
        if !resolution.secondary_prefixes.is_empty() {
            println!("  Secondary major: {}", resolution.secondary_prefixes.join(", "));
        }
        if !resolution.other_prefixes.is_empty() {
            println!("  General elective: {}", resolution.other_prefixes.join(", "));
        }
    }

    let ingest = &summary.ingest;
    if !ingest.skipped.is_empty() || !ingest.failed.is_empty() {
        println!();
        for issue in ingest.skipped.iter().chain(&ingest.failed) {
            println!("  Line {}: {} not imported ({})", issue.line_number, issue.course_name, issue.reason);
        }
    }

    println!();
    println!("Planner saved to {}", format_path_with_tilde(state_path));
}

fn show_stats(state: Option<&Path>, json: bool) -> Result<()> {
    let state_path = resolve_state_path(state)?;
    let Some(snapshot) = load_snapshot(&state_path)? else {
        println!("No planner state at {}", format_path_with_tilde(&state_path));
        return Ok(());
    };

    let summary = summarize(&snapshot.planner);
    if json {
        let output = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", output);
        return Ok(());
    }

    println!("Planner Statistics");
    println!("==================");
    println!(
        "Credits: {}/{} ({:.0}%)",
        summary.completed_credits,
        summary.required_credits,
        summary.completion()
    );
    println!("GPA: {:.2}", summary.overall.gpa());
    println!("Major GPA: {:.2}", summary.major.gpa());
    if summary.primary_major.credits > 0.0 {
        println!("  Primary: {:.2}", summary.primary_major.gpa());
    }
    if summary.secondary_major.credits > 0.0 {
        println!("  Secondary: {:.2}", summary.secondary_major.gpa());
    }
    println!("English-taught courses: {}", summary.english_courses);
    println!();

    for category in &summary.categories {
        println!(
            "  {:<24} {:>5}/{:<5}{}",
            category.name,
            category.completed_credits,
            category.required_credits,
            if category.is_major { " (major)" } else { "" }
        );
    }

    println!();
    println!("Planner: {}", format_path_with_tilde(&state_path));
    println!("Saved at: {}", snapshot.saved_at.format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}
