//! ink-replay - drive the Inkwell engine from a recorded pointer-event script.
//!
//! Usage: `ink-replay [SCRIPT.json]` (reads stdin when no path is given).
//! The resulting ink model is printed as JSON on stdout.

mod script;

use std::io::Read;

use anyhow::{anyhow, Context, Result};
use ink::{InkEvent, Stroker};
use inkwell_config::InkConfig;
use inkwell_recognizer::{
    DefaultRecognizer, EventType, InkModel, Recognizer, RecognizerContext, RecognizerError,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Everything printed after a replay
#[derive(Serialize)]
struct ReplayOutput {
    model: InkModel,
    redo_count: usize,
    events: Vec<EventType>,
}

fn init_tracing() {
    // RUST_LOG=ink=debug,inkwell_recognizer=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn read_script(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {path}")),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read replay script from stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let path = std::env::args().nth(1);
    let events = script::parse(&read_script(path.as_deref())?)?;

    let config = InkConfig::try_from_env()?;
    info!(
        "Replaying {} events (redo policy {:?}, max redo depth {:?})",
        events.len(),
        config.redo_policy,
        config.max_redo_depth
    );

    let mut stroker = Stroker::with_config(config);
    stroker.add_event_listener(|event| {
        if let InkEvent::StrokeCompleted {
            stroke_id,
            point_count,
        } = event
        {
            info!("Stroke {} completed with {} points", stroke_id, point_count);
        }
    });
    script::replay(&mut stroker, &events)?;

    if stroker.is_writing() {
        return Err(anyhow!("Replay script ended with a stroke still being captured"));
    }

    let recognizer = DefaultRecognizer::new();
    let mut context = RecognizerContext::new();
    let mut settled = None;
    recognizer.init(
        &mut context,
        &InkModel::from_stroker(&stroker),
        Box::new(
            |result: Result<InkModel, RecognizerError>, events: &[EventType]| {
                settled = Some(result.map(|model| (model, events.to_vec())));
            },
        ),
    );
    let (model, events) = settled
        .ok_or_else(|| anyhow!("Recognizer init never settled"))?
        .context("Recognizer init failed")?;

    let output = ReplayOutput {
        model,
        redo_count: stroker.redo_count(),
        events,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
