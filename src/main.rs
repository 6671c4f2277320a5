use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use tracing::{error, info};
use typetest::{
    app::App,
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging::init_tracing,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    ui, TypingSession,
};

const TICK_RATE_MS: u64 = 250;

/// minimal typing speed test
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a random sample of words, one space-separated word at a time. Each word is judged when you press space; accuracy and words per minute are shown at the end."
)]
pub struct Cli {
    /// number of words to use in test [default: 50, or the saved config]
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// newline-delimited word list to sample from instead of the bundled one
    #[clap(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// remember these settings for future runs
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line flags win over the saved config.
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(n) = self.number_of_words {
            cfg.number_of_words = n;
        }
        if let Some(path) = &self.words_file {
            cfg.words_file = Some(path.clone());
        }
        cfg
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let _log_guard = match AppDirs::log_dir() {
        Some(dir) => init_tracing(&dir).ok(),
        None => None,
    };

    let store = FileConfigStore::new();
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store.save(&cfg)?;
        info!(path = %store.path().display(), "config saved");
    }

    // draw words before touching the terminal so errors print normally
    let session = match TypingSession::with_source(cfg.word_source(), cfg.session_config()) {
        Ok(session) => session,
        Err(e) => {
            error!(error = %e, "cannot start typing test");
            Cli::command().error(ErrorKind::Io, e).exit();
        }
    };
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let outcome = runner.drive(&mut app, |app| -> Result<(), Box<dyn Error>> {
        terminal.draw(|f| ui::draw(app, f))?;
        Ok(())
    });

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &outcome {
        error!(error = %e, "typing test aborted");
    }
    outcome
}
