use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use dirpick::api::DirectoryClient;
use dirpick::config::{Config, FormFieldConfig};
use dirpick::form::{Form, SubmittedField};
use dirpick::services::{spawn_search_service, SearchRequest, SearchResult};
use dirpick::{FieldAugmenter, SearchSelect};

mod handlers;
mod ui;

/// Directory group picker for a one-page admin form
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir dirpick-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Initial value of the target field, overriding the config
    #[arg(long)]
    value: Option<String>,
}

pub struct App {
    pub form: Form,
    pub target_field: String,
    /// None when the target field was absent and the form stays plain
    pub control: Option<SearchSelect>,
    pub request_tx: mpsc::UnboundedSender<SearchRequest>,
    pub result_rx: mpsc::UnboundedReceiver<SearchResult>,
    pub should_quit: bool,
    pub submitted: Option<Vec<SubmittedField>>,
}

impl App {
    fn new(config: &Config, initial_value: Option<String>) -> Result<Self> {
        let form = build_form(config, initial_value);
        let control = FieldAugmenter::new(config.augmenter_config()).initialize(&form);

        let client = DirectoryClient::new(
            config.base_url.clone(),
            config.search_path.clone(),
            config.session_cookie.clone(),
            config.request_timeout(),
        )
        .context("Failed to build HTTP client")?;
        let (request_tx, result_rx) = spawn_search_service(Arc::new(client));

        Ok(Self {
            form,
            target_field: config.target_field.clone(),
            control,
            request_tx,
            result_rx,
            should_quit: false,
            submitted: None,
        })
    }

    /// Drain finished searches and fire any settled query
    fn pump(&mut self, now: Instant) {
        let Some(control) = self.control.as_mut() else {
            return;
        };

        while let Ok(result) = self.result_rx.try_recv() {
            control.apply_result(result);
        }

        if let Some(request) = control.tick(now) {
            tracing::debug!(seq = request.seq, term = %request.term, "issuing search");
            let seq = request.seq;
            if let Err(e) = self.request_tx.send(request) {
                tracing::warn!(seq, error = %e, "search service unavailable");
                control.abandon_request(seq, "Directory search is unavailable.");
            }
        }
    }
}

/// Host form from config; the target field exists even if config omits it
fn build_form(config: &Config, initial_value: Option<String>) -> Form {
    let mut fields = config.form.clone();
    if fields.is_empty() {
        fields.push(FormFieldConfig {
            id: config.target_field.clone(),
            label: "Name".to_string(),
            value: String::new(),
        });
    }

    if let Some(value) = initial_value {
        if let Some(target) = fields.iter_mut().find(|f| f.id == config.target_field) {
            target.value = value;
        }
    }

    let form = Form::new();
    for field in &fields {
        form.add_field(&field.id, &field.label, &field.value);
    }
    form
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<PathBuf> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/dirpick/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("dirpick").join("config.yaml");

        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("dirpick")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/dirpick/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(debug: bool) -> Result<()> {
    if !debug {
        return Ok(());
    }

    use tracing_subscriber::{fmt, EnvFilter};

    let log_path = dirpick::utils::get_debug_log_path();
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirpick=debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;
    tracing::debug!("debug mode enabled");

    let config_path = get_config_path(args.config)?;
    tracing::debug!(path = %config_path.display(), "loading config");

    let config_str = fs::read_to_string(&config_path)?;
    let config: Config = serde_yaml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    let mut app = App::new(&config, args.value)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if let Some(submitted) = &app.submitted {
        println!("{}", serde_json::to_string_pretty(submitted)?);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.pump(Instant::now());

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.should_quit {
            break;
        }

        // Short poll keeps debounce deadlines and results timely
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handlers::keyboard::handle_key(app, key, Instant::now());
            }
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}
