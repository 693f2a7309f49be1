//! SwiftRead terminal host.
//!
//! Owns the platform pieces (terminal, clock, storage paths, network
//! collaborators) and drives the core trainer with a polling loop:
//! tick, draw when asked, fulfil whatever one-shot requests the app
//! surfaced this cycle.

use std::{
    io::stdout,
    path::PathBuf,
    thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use swiftread_core::{
    app::{TickResult, TrainerApp},
    content::{MaterialStore, count_words},
    history::{HistoryStore, SessionRecord},
    settings::{MAX_WPM, MIN_WPM, SettingsStore, TrainerSettings},
};
use swiftread_term::{
    input::TermInput,
    net::HttpMaterialStore,
    render,
    storage::{JsonHistoryStore, JsonSettingsStore},
};

use materials::{draft_from_file, load_materials};
use quiz_worker::QuizWorker;
use settings_sync::SettingsSyncState;

#[path = "main/materials.rs"]
mod materials;
#[path = "main/quiz_worker.rs"]
mod quiz_worker;
#[path = "main/settings_sync.rs"]
mod settings_sync;

const TITLE: &str = "SwiftRead";
const POLL_INTERVAL_MS: u64 = 20;
const SETTINGS_SAVE_DEBOUNCE_MS: u64 = 1_500;

#[derive(Parser)]
#[command(name = "swiftread", about = "RSVP speed-reading trainer", version)]
struct Args {
    /// Base URL of the material catalog service. Without it the
    /// built-in sample texts are used.
    #[arg(long, value_name = "URL")]
    service_url: Option<String>,

    /// Import a plain-text file into the catalog, then exit.
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Directory for settings and history files.
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Override the starting words-per-minute target for this run.
    #[arg(long)]
    wpm: Option<u32>,
}

fn data_dir(args: &Args) -> PathBuf {
    args.data_dir.clone().unwrap_or_else(|| {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".swiftread")
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut catalog = args.service_url.as_deref().map(HttpMaterialStore::new);

    if let Some(path) = &args.import {
        let draft = draft_from_file(path)?;
        let Some(catalog) = catalog.as_mut() else {
            anyhow::bail!("--import requires --service-url");
        };
        let material = catalog
            .create(&draft)
            .with_context(|| format!("importing {}", path.display()))?;
        info!(
            "imported {} ({} words)",
            material.title,
            count_words(&material.content)
        );
        return Ok(());
    }

    let dir = data_dir(&args);
    let mut settings_store = JsonSettingsStore::new(dir.join("settings.json"));
    let mut history_store = JsonHistoryStore::new(dir.join("history.json"));

    let mut settings = match settings_store.load() {
        Ok(Some(settings)) => settings,
        Ok(None) => TrainerSettings::default(),
        Err(err) => {
            warn!("settings unreadable ({err}); using defaults");
            TrainerSettings::default()
        }
    };
    if let Some(wpm) = args.wpm {
        settings.wpm = wpm.clamp(MIN_WPM, MAX_WPM);
    }

    let mut app = TrainerApp::new(TermInput::new(), settings, TITLE);
    app.set_materials(load_materials(&mut catalog));
    match history_store.load() {
        Ok(records) => app.set_history(records),
        Err(err) => warn!("history unreadable ({err}); starting empty"),
    }

    let quiz_worker = QuizWorker::spawn(std::env::var("GEMINI_API_KEY").ok());
    let mut settings_sync = SettingsSyncState::new(app.settings());

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(
        &mut terminal,
        &mut app,
        &mut catalog,
        &mut settings_store,
        &mut history_store,
        &mut settings_sync,
        &quiz_worker,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut TrainerApp<TermInput>,
    catalog: &mut Option<HttpMaterialStore>,
    settings_store: &mut JsonSettingsStore,
    history_store: &mut JsonHistoryStore,
    settings_sync: &mut SettingsSyncState,
    quiz_worker: &QuizWorker,
) -> anyhow::Result<()> {
    let started = Instant::now();

    loop {
        let now_ms = started.elapsed().as_millis() as u64;

        if app.tick(now_ms) == TickResult::RenderRequested {
            let mut drawn = Ok(());
            app.with_screen(|screen| {
                drawn = terminal.draw(|frame| render::draw(frame, &screen)).map(|_| ());
            });
            drawn?;
        }

        if app.exit_requested() {
            break;
        }

        if let Some(request) = app.take_quiz_request() {
            quiz_worker.submit(request);
        }
        if let Some((text_id, questions)) = quiz_worker.try_recv() {
            app.supply_quiz_questions(&text_id, questions);
        }

        if let Some(completed) = app.take_completed_session() {
            let record = SessionRecord {
                date: Local::now().format("%Y-%m-%d %H:%M").to_string(),
                wpm: completed.wpm,
                comprehension_score: completed.comprehension_score,
                duration_seconds: completed.duration_seconds,
                text_id: completed.text_id,
            };
            if let Err(err) = history_store.append(&record) {
                warn!("failed to persist session record ({err})");
            }
            app.push_record(record);
        }

        if let Some(material) = app.take_material_update()
            && let Some(catalog) = catalog.as_mut()
            && let Err(err) = catalog.update(&material)
        {
            warn!("failed to update material {} ({err})", material.id);
        }

        if let Some(id) = app.take_material_deletion()
            && let Some(catalog) = catalog.as_mut()
            && let Err(err) = catalog.delete(&id)
        {
            warn!("failed to delete material {id} ({err})");
        }

        if app.take_history_clear()
            && let Err(err) = history_store.clear()
        {
            warn!("failed to clear history ({err})");
        }

        settings_sync.track_current(app.settings(), now_ms);
        settings_sync.flush_if_due(&mut *settings_store, now_ms);

        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }

    Ok(())
}
