use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voxdesk::{
    Acknowledger, Config, ConsoleDisplay, ConsoleSynthesizer, RecognitionScript,
    ScriptedRecognizer, SessionController, SessionMachine,
};

#[derive(Debug, Parser)]
#[command(name = "voxdesk", version, about = "Live dictation with spoken acknowledgements")]
struct Cli {
    /// Configuration file (extension optional)
    #[arg(short, long, default_value = "config/voxdesk")]
    config: String,

    /// JSON recognition script to replay instead of the demo
    #[arg(short, long)]
    script: Option<String>,

    /// Disable acknowledgement speech
    #[arg(long)]
    no_speech: bool,

    /// Delay between replayed recognition events
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level)),
        )
        .init();

    info!("Voxdesk v{}", env!("CARGO_PKG_VERSION"));

    let script = match cli.script.as_ref().or(cfg.recognizer.script_path.as_ref()) {
        Some(path) => RecognitionScript::load(path)
            .with_context(|| format!("Failed to load recognition script {}", path))?,
        None => RecognitionScript::demo(),
    };
    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(cfg.recognizer.event_delay_ms));
    let recognizer = ScriptedRecognizer::new(script).with_event_delay(delay);

    let acknowledger = if cfg.synthesis.enabled && !cli.no_speech {
        Acknowledger::new(Arc::new(ConsoleSynthesizer::new()), &cfg.synthesis_settings())
    } else {
        Acknowledger::disabled()
    };

    let display = ConsoleDisplay::new(cfg.display.placeholder.clone());
    let machine = SessionMachine::new(
        Box::new(recognizer),
        acknowledger,
        display,
        cfg.session_config(),
    );
    let (handle, task) = SessionController::spawn(machine);

    println!("Commands: start, stop, status, quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let sent = match line.trim() {
            "" => continue,
            "start" => handle.request_start(),
            "stop" => handle.request_stop(),
            "status" => match handle.stats().await {
                Ok(stats) => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                    Ok(())
                }
                Err(e) => Err(e),
            },
            "quit" | "exit" => break,
            other => {
                warn!("Unknown command: {}", other);
                continue;
            }
        };

        if sent.is_err() {
            warn!("Session already shut down");
            break;
        }
    }

    let _ = handle.shutdown();
    let machine = task.await.context("Session task panicked")?;

    let stats = machine.stats();
    info!(
        sessions = stats.sessions_started,
        utterances = stats.utterances_recognized,
        "Exiting"
    );
    machine.display().render_transcript();

    Ok(())
}
