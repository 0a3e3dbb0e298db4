use anyhow::{anyhow, Context, Result};
use clap::Parser;
use seqren_core::{
    rename_operation, Config, DiskFs, OutputFormatter, Preview, RenameOptions, RenameResult,
    RenameStatus, SeqrenError,
};
use std::io::{self, BufRead, IsTerminal, Write};
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;
mod status;

use cli::{Cli, OutputFormat};
use status::Status;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let _ = e.print();
            process::exit(i32::from(e.use_stderr()));
        },
    };

    init_logging();

    let config = Config::load().context("Failed to load .seqren/config.toml");
    let configured_color = config
        .as_ref()
        .ok()
        .and_then(|config| config.defaults.use_color);
    let status = Status::new(status_color(
        cli.no_color,
        configured_color,
        io::stderr().is_terminal(),
    ));

    let result = config.and_then(|config| run(cli, &config, &status));

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            status.error(&format!("{e:#}"));
            process::exit(1);
        },
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SEQREN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Status lines go to stderr, so auto-detection looks at stderr.
fn status_color(no_color: bool, configured: Option<bool>, stderr_is_terminal: bool) -> bool {
    !no_color && configured.unwrap_or(stderr_is_terminal)
}

fn run(cli: Cli, config: &Config, status: &Status) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let base_name = match cli.name {
        Some(name) => {
            status.info(&format!("Set rename string: {name}"));
            name
        },
        None => {
            status.info("Please specify rename filename string.");
            prompt_name(&mut input, &mut io::stderr())?
        },
    };

    let seq_width = match cli.seq {
        Some(seq) => usize::try_from(seq).map_err(|_| SeqrenError::InvalidSeqWidth(seq))?,
        None => config.defaults.seq_width,
    };

    let preview = match (cli.preview, cli.output) {
        (Some(preview), _) => preview.into(),
        // No preview for JSON output unless asked for
        (None, OutputFormat::Json) => Preview::None,
        (None, OutputFormat::Summary) => config.defaults.preview_format,
    };

    let options = RenameOptions {
        directory: cli.path,
        base_name,
        seq_width,
        max_rows: if cli.all_show {
            None
        } else {
            Some(cli.num.unwrap_or(config.defaults.show_rows))
        },
        force: cli.force,
        dry_run: cli.dry_run,
        preview,
        chain_resolution: cli
            .chain
            .map_or(config.defaults.chain_resolution, Into::into),
        use_color: if cli.no_color {
            Some(false)
        } else {
            config.defaults.use_color
        },
    };

    let (outcome, result) = if cli.output == OutputFormat::Json {
        // Keep stdout clean for the JSON report
        rename_operation(&DiskFs, &options, &mut input, &mut io::stderr())?
    } else {
        rename_operation(&DiskFs, &options, &mut input, &mut io::stdout().lock())?
    };

    report(outcome, &result, cli.output, status);
    Ok(())
}

fn prompt_name<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<String> {
    write!(prompt, "enter: ")?;
    prompt.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read rename string")?;
    if read == 0 {
        return Err(anyhow!(SeqrenError::EmptyName));
    }
    Ok(line.trim().to_string())
}

fn report(outcome: RenameStatus, result: &RenameResult, output: OutputFormat, status: &Status) {
    match outcome {
        RenameStatus::NothingToDo => status.info("There is no file to rename."),
        RenameStatus::Declined => status.info("Interrupted."),
        RenameStatus::DryRun => {},
        RenameStatus::Completed => status.info("Finished renaming."),
    }

    // JSON reports every outcome; the summary only follows a preview
    let show_report = output == OutputFormat::Json
        || matches!(outcome, RenameStatus::Completed | RenameStatus::DryRun);
    if show_report {
        println!("{}", result.format(output.into()).trim_end());
    }
}
