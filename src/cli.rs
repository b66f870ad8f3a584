// File: ./src/cli.rs
//! Command-line front end: argument handling, logging setup, and the
//! commands themselves. The binary in `src/bin/taskdash.rs` only wires these
//! together.

use crate::config::Config;
use crate::context::AppContext;
use crate::model::draft::TaskDraft;
use crate::model::parser::{highlight_smart_input, parse_task_input};
use crate::model::suggest::suggest_dates;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Parse(String),
    Suggest(String),
    Draft(String),
    Highlight(String),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub verbose: bool,
    pub plain: bool,
    pub command: Command,
}

impl CliArgs {
    /// Parses everything after the binary name. Options may appear anywhere;
    /// the first remaining word is the command and the rest is its text.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut root = None;
        let mut today = None;
        let mut verbose = false;
        let mut plain = false;
        let mut words: Vec<&str> = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    return Ok(Self {
                        root,
                        today,
                        verbose,
                        plain,
                        command: Command::Help,
                    });
                }
                "-r" | "--root" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--root needs a path"))?;
                    root = Some(PathBuf::from(value));
                }
                "-t" | "--today" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--today needs a date"))?;
                    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .with_context(|| format!("Invalid --today date '{}'", value))?;
                    today = Some(date);
                }
                "-v" | "--verbose" => verbose = true,
                "--plain" => plain = true,
                other => words.push(other),
            }
        }

        let (name, rest) = match words.split_first() {
            Some((name, rest)) => (*name, rest.join(" ")),
            None => ("help", String::new()),
        };
        let command = match name {
            "parse" => Command::Parse(rest),
            "suggest" => Command::Suggest(rest),
            "draft" => Command::Draft(rest),
            "highlight" => Command::Highlight(rest),
            "help" => Command::Help,
            other => return Err(anyhow::anyhow!("Unknown command '{}'", other)),
        };

        Ok(Self {
            root,
            today,
            verbose,
            plain,
            command,
        })
    }
}

/// Installs the stderr logger, plus a file logger when the config asks for one.
pub fn init_logging(config: &Config, verbose: bool, ctx: &dyn AppContext) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level_filter()
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if config.log_to_file
        && let Some(path) = ctx.get_log_file_path()
    {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
        loggers.push(WriteLogger::new(level, simplelog::Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}

/// Runs one command and returns what should be printed.
pub fn execute(args: &CliArgs, config: &Config, today: NaiveDate) -> Result<String> {
    match &args.command {
        Command::Parse(text) => {
            let parsed = parse_task_input(text, today);
            Ok(serde_json::to_string_pretty(&parsed)?)
        }
        Command::Suggest(query) => {
            let suggestions = suggest_dates(query, today);
            if args.plain {
                let lines: Vec<String> = suggestions
                    .iter()
                    .map(|s| format!("{:<9}{:<22}{}", s.icon.to_string(), s.label, s.description))
                    .collect();
                Ok(lines.join("\n"))
            } else {
                Ok(serde_json::to_string_pretty(&suggestions)?)
            }
        }
        Command::Draft(text) => {
            let parsed = parse_task_input(text, today);
            let draft = TaskDraft::from_parsed(parsed, &config.catalog(), &config.tag_aliases);
            Ok(serde_json::to_string_pretty(&draft)?)
        }
        Command::Highlight(text) => {
            let lines: Vec<String> = highlight_smart_input(text, today)
                .into_iter()
                .map(|t| format!("{:?}\t{}..{}\t{}", t.kind, t.start, t.end, &text[t.start..t.end]))
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Help => Ok(help_text("taskdash")),
    }
}

pub fn print_help(binary_name: &str) {
    println!("{}", help_text(binary_name));
}

fn help_text(binary_name: &str) -> String {
    let mut out = Vec::new();
    out.push(format!(
        "Taskdash v{} - smart input for tasks and dates",
        env!("CARGO_PKG_VERSION")
    ));
    out.push(String::new());
    out.push("USAGE:".to_string());
    out.push(format!("    {} [OPTIONS] parse <text>", binary_name));
    out.push(format!("    {} [OPTIONS] draft <text>", binary_name));
    out.push(format!("    {} [OPTIONS] highlight <text>", binary_name));
    out.push(format!("    {} [OPTIONS] suggest [query]", binary_name));
    out.push(String::new());
    out.push("OPTIONS:".to_string());
    out.push("    -r, --root <path>     Use a different directory for config and data.".to_string());
    out.push("    -t, --today <date>    Treat YYYY-MM-DD as today.".to_string());
    out.push("    -v, --verbose         Log debug output to stderr.".to_string());
    out.push("    --plain               Print suggestions as a table instead of JSON.".to_string());
    out.push("    -h, --help            Show this help message.".to_string());
    out.push(String::new());
    out.push("SMART INPUT SYNTAX:".to_string());
    out.push("    #tag              Add a tag".to_string());
    out.push("    @name             Project or area".to_string());
    out.push("    d/<date>          Deadline (d/fri, d/tomorrow, d/next-week)".to_string());
    out.push("    https://...       Attach a link".to_string());
    out.push("    today, tomorrow   Scheduled date".to_string());
    out.push("    friday            Upcoming friday".to_string());
    out.push("    next friday       The friday after that".to_string());
    out.push("    next week         One week from today".to_string());
    out.push("    21 jan, jan 21    That date, next year if already past".to_string());
    out.push(String::new());
    out.push("EXAMPLES:".to_string());
    out.push(format!(
        "    {} parse \"Ship report #work @dev d/fri https://x.co\"",
        binary_name
    ));
    out.push(format!("    {} --plain suggest mon", binary_name));
    out.join("\n")
}
