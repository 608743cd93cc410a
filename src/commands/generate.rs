//! Generate command - build a standup summary from recent commits

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::Input;

use crate::cli::GenerateArgs;
use standup_cli::clipboard;
use standup_cli::config::{Defaults, GlobalConfig};
use standup_cli::git::{self, RepoSource};
use standup_cli::output::{OutputMode, StandupReport};

/// Fully resolved generate options
#[derive(Debug)]
struct ResolvedOptions {
    days: u32,
    author: Option<String>,
    path: String,
    copy: bool,
}

/// Generate a standup summary from recent git commits
pub fn generate(args: &GenerateArgs, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = GlobalConfig::load();
    let opts = resolve_options(args, &config.defaults, output_mode)?;

    log::debug!(
        "generate: days={} author={:?} path={} copy={}",
        opts.days,
        opts.author,
        opts.path,
        opts.copy
    );

    if output_mode == OutputMode::Human {
        println!(
            "{}",
            format!("Scanning repo at {} for the last {} day(s)...", opts.path, opts.days)
                .cyan()
                .bold()
        );
    }

    let source = RepoSource::parse(&opts.path);
    let handle = git::open(&source)?;
    let commits = git::recent_commits(handle.repo(), opts.days, opts.author.as_deref())?;

    let report = StandupReport::build(opts.path, opts.days, opts.author, commits);
    report.render(output_mode);

    if opts.copy && report.total_commits > 0 {
        copy_to_clipboard(&report.standup, output_mode);
    }

    Ok(())
}

/// Resolve each option: CLI flag, else prompt (terminal only), else
/// config-file default, else built-in default.
fn resolve_options(
    args: &GenerateArgs,
    defaults: &Defaults,
    output_mode: OutputMode,
) -> anyhow::Result<ResolvedOptions> {
    // Prompting in JSON mode or into a pipe would corrupt the output or
    // hang a non-interactive caller.
    let interactive = output_mode == OutputMode::Human && std::io::stdin().is_terminal();

    let path = match &args.path {
        Some(path) => path.clone(),
        None if interactive => Input::new()
            .with_prompt("Enter repository path or public GitHub URL")
            .default(defaults.path.clone().unwrap_or_else(|| ".".to_string()))
            .interact_text()?,
        None => defaults.path.clone().unwrap_or_else(|| ".".to_string()),
    };

    let days = match args.days {
        Some(days) => days,
        None if interactive => Input::new()
            .with_prompt("Enter number of days to look back")
            .default(defaults.days)
            .interact_text()?,
        None => defaults.days,
    };

    let author = match &args.author {
        Some(author) => Some(author.clone()),
        None if interactive => {
            let answer: String = Input::new()
                .with_prompt("Filter by author (leave empty for all)")
                .allow_empty(true)
                .default(defaults.author.clone().unwrap_or_default())
                .show_default(false)
                .interact_text()?;
            if answer.is_empty() { None } else { Some(answer) }
        },
        None => defaults.author.clone(),
    };

    Ok(ResolvedOptions {
        days,
        author,
        path,
        copy: args.copy || defaults.copy,
    })
}

/// Copy the standup text, downgrading any failure to a warning
fn copy_to_clipboard(standup: &str, output_mode: OutputMode) {
    match clipboard::copy(standup) {
        Ok(()) => {
            if output_mode == OutputMode::Human {
                println!("\n{}", "\u{2713} Copied to clipboard!".green().bold());
            }
        },
        Err(err) => {
            if output_mode == OutputMode::Human {
                println!("{}", format!("Warning: Could not copy to clipboard: {err}").yellow());
            } else {
                log::warn!("could not copy to clipboard: {err}");
            }
        },
    }
}
