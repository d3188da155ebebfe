//! CLI entrypoint for votestream
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use votestream_application::{
    DataOrigin, LoadProgressNotifier, NoLoadProgress, PollApi, PollSource, RunLoadTestUseCase,
};
use votestream_domain::{NewPoll, Notice, PollId, ThemeKey};
use votestream_infrastructure::{
    ConfigLoader, FileConfig, HttpLoadTarget, HttpPollApi, JsonlSampleSink, seeded_demo_store,
};
use votestream_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, LoadProgressReporter, OutputFormat, TuiApp,
    parse_choice,
};

/// Exit code when a load test finishes with failed thresholds
const THRESHOLDS_FAILED: u8 = 99;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let command = cli.command();

    let _log_guard = init_tracing(cli.verbose, command == Command::Tui);

    info!("Starting votestream");

    if command == Command::Config {
        print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let api = HttpPollApi::new(&config.api.base_url, config.api.timeout())
        .context("Failed to set up the API client")?;
    let source = PollSource::new(Arc::new(api), Arc::new(seeded_demo_store()));

    match command {
        Command::Tui => {
            let mut app = TuiApp::new(source, config.client.to_behavior());
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Themes => {
            let themes = source.themes().await;
            print_output(
                cli.output,
                || JsonFormatter::themes(&themes.value, themes.origin),
                || ConsoleFormatter::format_themes(&themes.value, themes.origin),
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Polls { theme } => list_polls(&cli, &source, theme).await,
        Command::Show { id } => {
            let Some(poll) = source.poll(PollId(id)).await else {
                bail!("Poll not found");
            };
            let theme = source.theme_for(&poll.value);
            print_output(
                cli.output,
                || JsonFormatter::poll(&poll.value, poll.origin),
                || ConsoleFormatter::format_poll(&poll.value, theme.as_ref(), poll.origin),
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Results { id } => {
            let results = source.results(PollId(id)).await;
            print_output(
                cli.output,
                || JsonFormatter::results(&results.value, results.origin),
                || ConsoleFormatter::format_results(id, &results.value, results.origin),
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Vote { id, choice } => vote(&cli, &source, id, &choice).await,
        Command::Create {
            question,
            theme,
            options,
        } => {
            let new_poll = NewPoll::new(&question, &theme, &options)?;
            match source.api().create_poll(&new_poll).await {
                Ok(poll) => {
                    print_notice(cli.output, &Notice::success("Poll created successfully!"));
                    print_output(
                        cli.output,
                        || JsonFormatter::poll(&poll, DataOrigin::Remote),
                        || ConsoleFormatter::format_poll(&poll, None, DataOrigin::Remote),
                    );
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    warn!("Error creating poll: {}", e);
                    eprintln!(
                        "{}",
                        ConsoleFormatter::format_notice(&Notice::error("Error creating poll"))
                    );
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Load {
            scenario,
            target,
            samples,
        } => run_load(&cli, &config, &scenario, target, samples).await,
        // printed before config loading
        Command::Config => Ok(ExitCode::SUCCESS),
    }
}

/// Initialize logging based on verbosity level.
///
/// The TUI owns the terminal, so it logs to a daily file instead of stderr.
fn init_tracing(verbose: u8, tui: bool) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = dirs::data_dir().map(|d| d.join("votestream"));
    match log_dir {
        Some(dir) if tui => {
            let appender = tracing_appender::rolling::daily(dir, "votestream.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        // no data dir: stay silent rather than draw over the TUI
        None if tui => None,
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn print_config_sources(config_path: Option<&PathBuf>) {
    println!("Configuration sources (later entries win):");
    for source in ConfigLoader::sources(config_path) {
        let mark = if source.found { "✓" } else { "-" };
        println!("  {} {:<10} {}", mark, source.label, source.location);
    }
}

fn print_output(format: OutputFormat, json: impl FnOnce() -> String, text: impl FnOnce() -> String) {
    match format {
        OutputFormat::Json => println!("{}", json()),
        OutputFormat::Text => println!("{}", text()),
    }
}

/// Notices go to stderr when stdout carries JSON
fn print_notice(format: OutputFormat, notice: &Notice) {
    let line = ConsoleFormatter::format_notice(notice);
    match format {
        OutputFormat::Json => eprintln!("{}", line),
        OutputFormat::Text => println!("{}", line),
    }
}

async fn list_polls<A: PollApi>(
    cli: &Cli,
    source: &PollSource<A>,
    theme: Option<String>,
) -> Result<ExitCode> {
    match theme {
        Some(key) => {
            let Some(sourced) = source.theme_polls(&ThemeKey::new(key)).await else {
                bail!("Theme not found");
            };
            let polls = &sourced.value.polls;
            print_output(
                cli.output,
                || JsonFormatter::polls(polls, sourced.origin),
                || ConsoleFormatter::format_polls(&sourced.value.theme.name, polls, sourced.origin),
            );
        }
        None => {
            let polls = source.polls().await;
            print_output(
                cli.output,
                || JsonFormatter::polls(&polls.value, polls.origin),
                || ConsoleFormatter::format_polls("Polls", &polls.value, polls.origin),
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

async fn vote<A: PollApi>(
    cli: &Cli,
    source: &PollSource<A>,
    id: u64,
    choice: &str,
) -> Result<ExitCode> {
    let Some(choice) = parse_choice(choice) else {
        bail!("Invalid choice '{}': use a position (0, 1, ...) or a letter (A, B, ...)", choice);
    };
    let Some(poll) = source.poll(PollId(id)).await else {
        bail!("Poll not found");
    };

    let outcome = source.vote(&poll.value, choice).await?;
    let notice = match outcome.origin {
        DataOrigin::Remote => Notice::success("Vote registered!"),
        DataOrigin::Demo => Notice::success("Vote registered! (demo mode)"),
    };
    print_notice(cli.output, &notice);

    let results = outcome.results;
    print_output(
        cli.output,
        || JsonFormatter::results(&results.value, results.origin),
        || ConsoleFormatter::format_results(id, &results.value, results.origin),
    );
    Ok(ExitCode::SUCCESS)
}

async fn run_load(
    cli: &Cli,
    config: &FileConfig,
    scenarios: &[String],
    target: Option<String>,
    samples: Option<PathBuf>,
) -> Result<ExitCode> {
    let plan = config.load.to_plan()?.with_scenarios(scenarios)?;
    let target_url = target.unwrap_or_else(|| config.load.target.clone());
    let pool_size = plan.scenarios.iter().map(|s| s.max_vus()).sum::<usize>();
    let load_target = HttpLoadTarget::new(&target_url, config.load.timeout(), pool_size)
        .context("Failed to set up the load target")?;

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, stopping load test");
            ctrl_c_token.cancel();
        }
    });

    let mut use_case = RunLoadTestUseCase::new(Arc::new(load_target)).with_cancellation(cancel);
    let sink = match &samples {
        Some(path) => {
            let Some(sink) = JsonlSampleSink::new(path) else {
                bail!("Cannot write samples to {}", path.display());
            };
            let sink = Arc::new(sink);
            use_case = use_case.with_sample_sink(sink.clone());
            Some(sink)
        }
        None => None,
    };

    let progress: Arc<dyn LoadProgressNotifier> = if cli.quiet {
        Arc::new(NoLoadProgress)
    } else {
        Arc::new(LoadProgressReporter::new())
    };

    info!("Running load test against {}", target_url);
    let report = use_case.execute(&plan, progress).await?;

    if let Some(sink) = sink {
        sink.flush();
        info!("Samples written to {}", sink.path().display());
    }

    print_output(
        cli.output,
        || JsonFormatter::load_report(&report),
        || ConsoleFormatter::format_load_report(&report),
    );

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(THRESHOLDS_FAILED))
    }
}
