use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use focuskit::cli::args::{Cli, Commands};
use focuskit::cli::commands;
use focuskit::config::{ColorSetting, Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell));
        return Ok(());
    }

    let paths = Paths::resolve(cli.home.clone())?;
    let config = Config::load_from_path(&paths.config_file)
        .with_context(|| format!("could not load {}", paths.config_file.display()))?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    if let Err(e) = focuskit::logging::init(&config.logging, &paths.logs, cli.verbose) {
        eprintln!("{}: {e}", "warning".yellow().bold());
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Run(args) => {
            let ledger = commands::open_timer_ledger(&config, &paths);
            commands::run(ledger, &config, &args, format)?
        }
        Commands::Tui => {
            let ledger = commands::open_timer_ledger(&config, &paths);
            focuskit::tui::run(ledger, config.durations())?;
            String::new()
        }
        Commands::History(args) => {
            let ledger = commands::open_ledger(&config, &paths)
                .context("could not open the session ledger")?;
            commands::history(&*ledger, &args, format)?
        }
        Commands::Stats(args) => {
            let ledger = commands::open_ledger(&config, &paths)
                .context("could not open the session ledger")?;
            commands::stats(&*ledger, &config, &args, format)?
        }
        Commands::Config(args) => commands::config(&config, &paths, &args.command, format)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
