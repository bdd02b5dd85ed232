use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use wayfinder::app::{
    config::AppConfig,
    keymap::ShortcutRegistry,
    persistence::RecentSearches,
    r#loop::{run_loop, Services},
    state::AppState,
};
use wayfinder::domain::{fuzzy::SearchEngine, search_index::SEARCH_INDEX};
use wayfinder::infrastructure::{router::HistoryRouter, storage::FileStore};
use wayfinder::theme::Theme;

static KEYS_DISAMBIGUATED: AtomicBool = AtomicBool::new(false);

/// Legacy terminals send Ctrl+M as Enter and Ctrl+, as a bare comma. Asking
/// for disambiguated escape codes lets those shortcuts reach the keymap.
fn disambiguate_keys<W: Write>(out: &mut W, supported: bool) -> io::Result<()> {
    if supported {
        execute!(
            out,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        KEYS_DISAMBIGUATED.store(true, Ordering::SeqCst);
    }
    Ok(())
}

fn restore_keys<W: Write>(out: &mut W) -> io::Result<()> {
    if KEYS_DISAMBIGUATED.swap(false, Ordering::SeqCst) {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_keys(&mut io::stdout());
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

/// Logs go to a file in the data directory; the terminal belongs to the UI.
fn init_logging(data_dir: &Path, level: Option<&str>) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join("wayfinder.log"))?;

    let filter = EnvFilter::try_from_env("WAYFINDER_LOG")
        .or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail runs BEFORE terminal setup so an error
    // never leaves the terminal in raw mode.
    let config = AppConfig::load();
    let data_dir = config
        .data_dir()
        .ok_or_else(|| anyhow::anyhow!("could not determine a data directory"))?;
    if let Err(e) = init_logging(&data_dir, config.log_level.as_deref()) {
        eprintln!("wayfinder: logging disabled: {e}");
    }
    tracing::info!(data_dir = %data_dir.display(), theme = ?config.theme, "starting");

    let recent = RecentSearches::new(Arc::new(FileStore::new(&data_dir)));
    let router = Arc::new(HistoryRouter::new());

    let (keymap, keymap_error) = ShortcutRegistry::from_config(&config.keys);
    let search = SearchEngine::new(SEARCH_INDEX, config.search);
    let theme = Theme::from_palette_type(config.theme);

    let mut app_state = AppState::new(keymap, search, theme, recent.get_recent());
    if let Some(e) = keymap_error {
        tracing::warn!(error = %e, "keeping default shortcuts");
        app_state.report_config_error(e.to_string());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    disambiguate_keys(&mut stdout, supports_keyboard_enhancement().unwrap_or(false))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let services = Services {
        router,
        recent,
        watch_dir: Some(data_dir),
    };

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    restore_keys(terminal.backend_mut())?;
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "exited with error");
        println!("{:?}", err);
    }

    Ok(())
}
