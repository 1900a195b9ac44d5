//! # Folio Main Entry Point
//!
//! Loads a page document, replays a script of user actions against it and
//! prints the resulting page state.

use anyhow::Result;
use std::io;
use std::sync::{Arc, Mutex};

use folio::cmd_args::CommandLineArgs;
use folio::config::{get_profile_path, SiteSettings, LOG_LEVEL_ENV_VAR};
use folio::{
    Document, HeadlessBrowser, JsonRenderer, ScriptEventSource, SiteSnapshot, TextRenderer,
    ViewController, ViewRenderer,
};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber()?;

    let cmd_args = CommandLineArgs::parse();

    let profile_path = get_profile_path();
    tracing::debug!(
        "Loading profile '{}' from '{}'",
        cmd_args.profile(),
        profile_path
    );
    let settings = SiteSettings::load(&profile_path, cmd_args.profile())?;
    tracing::debug!("Settings: {:?}", settings);

    let document = Document::load(cmd_args.document())?;
    let browser = HeadlessBrowser::new(cmd_args.fragment(), settings.viewport_height);
    let mut controller = ViewController::new(document, settings, browser)?;

    if cmd_args.verbose() {
        let tracer = Arc::new(Mutex::new(TextRenderer::new(io::stdout())));
        controller.subscribe(Box::new(move |event| {
            if let Ok(mut renderer) = tracer.lock() {
                if let Err(e) = renderer.handle_view_event(event) {
                    tracing::warn!("Failed to trace view event: {}", e);
                }
            }
        }));
    }

    let mut source = match cmd_args.script() {
        Some(path) => ScriptEventSource::load(path)?,
        None => ScriptEventSource::new(),
    };
    controller.run(&mut source, cmd_args.realtime()).await?;

    let snapshot = SiteSnapshot::capture(&controller);
    if cmd_args.json() {
        JsonRenderer::new(io::stdout()).render_snapshot(&snapshot)
    } else {
        TextRenderer::new(io::stdout()).render_snapshot(&snapshot)
    }
}

fn init_tracing_subscriber() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("error"))
        .add_directive("tokio=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
    Ok(())
}
