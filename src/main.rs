use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use dsa_viewer::content::{builtin, check};
use dsa_viewer::{
    compile, events, logging, ui, App, BuiltinSource, CompileOptions, ContentSource, FileSource,
    RawSite, Settings, Site, ThemeChoice,
};

#[derive(Parser, Debug)]
#[command(name = "dsa-viewer")]
#[command(about = "Terminal viewer for data structures and algorithms tutorials")]
#[command(version)]
struct Args {
    /// JSON content file (defaults to the built-in topics)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Page id to open on start
    #[arg(short, long)]
    page: Option<String>,

    /// Settings file (defaults to ./dsa-viewer.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Reject unrecognized difficulty labels
    #[arg(long)]
    strict: bool,

    /// Content file poll interval in milliseconds
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Validate the content, print the report and exit
    #[arg(long, conflicts_with_all = ["export", "list"])]
    validate: bool,

    /// Export the content as JSON to this path and exit
    #[arg(short, long, conflicts_with_all = ["validate", "list"])]
    export: Option<PathBuf>,

    /// List page ids and exit
    #[arg(short, long, conflicts_with_all = ["validate", "export"])]
    list: bool,
}

impl Args {
    /// Layer command-line flags over file and environment settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(ref content) = self.content {
            settings.content = Some(content.clone());
        }
        if let Some(ref page) = self.page {
            settings.page = Some(page.clone());
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if self.strict {
            settings.strict = true;
        }
        if let Some(refresh) = self.refresh {
            settings.refresh_ms = refresh;
        }
        if let Some(ref log_file) = self.log_file {
            settings.log_file = Some(log_file.clone());
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("Failed to load settings")?;
    args.apply(&mut settings);
    logging::init(&settings)?;

    let options = CompileOptions {
        strict: settings.strict,
    };

    // Non-interactive modes
    if args.validate {
        return validate(&settings, options);
    }
    if let Some(ref export_path) = args.export {
        return export_to_file(&settings, options, export_path);
    }
    if args.list {
        return list_pages(&settings, options);
    }

    let source: Box<dyn ContentSource> = match settings.content {
        Some(ref path) => Box::new(FileSource::with_options(path, options)),
        None => Box::new(BuiltinSource::with_options(options)),
    };

    run_tui(source, &settings)
}

/// Read the authored content named by `settings`.
fn load_raw(settings: &Settings) -> Result<RawSite> {
    match settings.content {
        Some(ref path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            RawSite::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
        }
        None => Ok(builtin::raw_site()),
    }
}

fn load_site(settings: &Settings, options: CompileOptions) -> Result<Site> {
    let raw = load_raw(settings)?;
    let compiled = compile(&raw, options)?;
    for warning in &compiled.warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(compiled.site)
}

fn content_name(settings: &Settings) -> String {
    settings
        .content
        .as_ref()
        .map_or_else(|| "built-in content".to_string(), |p| p.display().to_string())
}

/// Print every defect in the content. Fails when any error was found.
fn validate(settings: &Settings, options: CompileOptions) -> Result<()> {
    let raw = load_raw(settings)?;
    let report = check(&raw, options);

    for error in &report.errors {
        println!("error: {}", error);
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }

    if !report.is_ok() {
        anyhow::bail!(
            "{}: {} error(s), {} warning(s)",
            content_name(settings),
            report.errors.len(),
            report.warnings.len()
        );
    }

    let entries: usize = raw
        .pages
        .iter()
        .flat_map(|p| &p.categories)
        .map(|c| c.entries.len())
        .sum();
    println!(
        "{}: OK ({} pages, {} entries, {} warning(s))",
        content_name(settings),
        raw.pages.len(),
        entries,
        report.warnings.len()
    );
    Ok(())
}

/// Export the content in the JSON authoring format.
fn export_to_file(settings: &Settings, options: CompileOptions, export_path: &Path) -> Result<()> {
    let site = load_site(settings, options)?;
    let json = RawSite::from(&site).to_json_pretty()?;
    std::fs::write(export_path, json)
        .with_context(|| format!("Failed to write {}", export_path.display()))?;

    println!("Exported content to: {}", export_path.display());
    Ok(())
}

fn list_pages(settings: &Settings, options: CompileOptions) -> Result<()> {
    let site = load_site(settings, options)?;
    for page in &site.pages {
        println!(
            "{:<16} {} ({} categories, {} entries)",
            page.id,
            page.title,
            page.categories.len(),
            page.entry_count()
        );
    }
    Ok(())
}

/// Run the TUI with the given content source
fn run_tui(source: Box<dyn ContentSource>, settings: &Settings) -> Result<()> {
    // Detect the theme before raw mode; auto-detection queries the terminal.
    let theme = settings.theme.resolve();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    // Create app and load initial content
    let mut app = App::new(source, theme);
    if let Some(ref page) = settings.page {
        app = app.with_start_page(page.clone());
    }
    if !app.reload_content() {
        if let Some(ref err) = app.load_error {
            error!("Initial load failed: {}", err);
        }
    }

    info!(source = %app.source_description(), "Starting TUI");

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, Duration::from_millis(settings.refresh_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse, ui::INDEX_BODY_ROW),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Pick up content edits periodically
        if last_refresh.elapsed() >= refresh_interval {
            app.reload_content();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}
