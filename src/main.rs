use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use microdsi::content::{COURSE_BADGE, LESSONS};
use microdsi::domain::Track;
use microdsi::guide::Guide;
use microdsi::ledger::{LabDocument, write_deliverable};
use microdsi::server::{self, ServerOptions};
use microdsi::storage::{JsonFileStore, KvStore, MemoryStore};
use microdsi::tui::{self, App, AppConfig, TuiRunner};

fn setup_logging(config: &Config, verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("microdsi")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("microdsi.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the config level
    let default_level = if verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_tui(config),
        Some(Commands::Serve { port, root }) => handle_serve_command(*port, root.as_ref(), config),
        Some(Commands::Export { track, input, output }) => {
            handle_export_command(track, input.as_deref(), output.as_deref(), config)
        }
        Some(Commands::Lessons { track }) => handle_lessons_command(track.as_deref(), config),
    }
}

/// Open the on-disk cache, falling back to memory so the TUI still starts.
fn open_store(config: &Config) -> Box<dyn KvStore> {
    match JsonFileStore::open(&config.storage.data_dir) {
        Ok(store) => {
            info!("Using cache at {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            warn!(
                "Cache unavailable at {} ({}), answers will not persist",
                config.storage.data_dir.display(),
                e
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");

    let store = open_store(config);
    let guide = Guide::restore(store.as_ref(), config.tui.default_track);
    let app = App::new(
        AppConfig {
            tick_rate_ms: config.tui.tick_rate_ms,
            export_dir: config.export.dir.clone(),
            report: config.report.options(),
            default_track: config.tui.default_track,
        },
        guide,
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, app, store);
    let result = runtime.block_on(runner.run());

    // Always give the terminal back, even if the loop failed
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn handle_serve_command(port: Option<u16>, root: Option<&PathBuf>, config: &Config) -> Result<()> {
    let mut server_config = config.server.clone();
    if let Some(port) = port {
        server_config.port = port;
    }
    if let Some(root) = root {
        server_config.static_dir = root.clone();
    }

    let options = ServerOptions {
        address: server_config.address(),
        static_root: server_config.static_dir.clone(),
    };
    if !options.static_root.is_dir() {
        println!(
            "{} {} does not exist; only /api/health will answer",
            "Warning:".yellow(),
            options.static_root.display()
        );
    }
    println!(
        "{} http://{} (static: {})",
        "Serving".green().bold(),
        options.address,
        options.static_root.display()
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(server::serve(options)).context("Server failed")?;
    Ok(())
}

fn handle_export_command(track: &str, input: Option<&Path>, output: Option<&Path>, config: &Config) -> Result<()> {
    let track: Track = track.parse()?;

    let document = match input {
        Some(path) => {
            LabDocument::load(path).context(format!("Failed to read Lab document {}", path.display()))?
        }
        None => LabDocument::default(),
    };
    let markdown = document.into_ledger().export(track, &config.report.options());

    match output {
        Some(path) if path == Path::new("-") => {
            io::stdout()
                .write_all(markdown.as_bytes())
                .context("Failed to write to stdout")?;
        }
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
            fs::write(path, &markdown).context(format!("Failed to write {}", path.display()))?;
            info!("Exported {} deliverable to {}", track, path.display());
            println!("{} {}", "Exported".green(), path.display());
        }
        None => {
            let path = write_deliverable(&config.export.dir, track, &markdown)?;
            println!("{} {}", "Exported".green(), path.display());
        }
    }
    Ok(())
}

fn handle_lessons_command(track: Option<&str>, config: &Config) -> Result<()> {
    let track = match track {
        Some(raw) => raw.parse()?,
        None => config.tui.default_track,
    };

    println!("{}", COURSE_BADGE.cyan());
    println!("{} {}\n", "Track:".bold(), track.label().yellow());
    for (i, lesson) in LESSONS.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).bold(), lesson.title.bold());
        println!("   {}", lesson.tag.dimmed());
        println!("   {}", lesson.text);
        for example in lesson.examples(track) {
            println!("   {} {}", "•".cyan(), example);
        }
        println!("   {} {}\n", "✎".green(), lesson.check);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // Setup logging with the configured level
    setup_logging(&config, cli.is_verbose()).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
