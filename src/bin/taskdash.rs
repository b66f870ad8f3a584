use anyhow::Result;
use chrono::Local;
use std::env;
use taskdash::cli::{self, CliArgs, Command};
use taskdash::config::Config;
use taskdash::context::StandardContext;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = CliArgs::parse(&args)?;

    if args.command == Command::Help {
        cli::print_help("taskdash");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    cli::init_logging(&config, args.verbose, &ctx)?;

    // Sampled once so every stage of this run agrees on the date.
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    log::debug!("Using {} as today", today);

    println!("{}", cli::execute(&args, &config, today)?);
    Ok(())
}
