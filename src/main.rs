use alatheme::{
    Cli, Commands, Config, PickerResult, SelectionSession, ThemePicker, catalog, debug, directive,
    locator, provision,
};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Hide,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::fs;
use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Application mode
enum AppMode {
    /// Theme repository is being cloned in the background
    Provisioning {
        rx: Receiver<Result<()>>,
        frame: usize,
    },
    /// Theme list is on screen, previews live-apply
    Browsing {
        picker: ThemePicker,
        session: SelectionSession,
    },
}

/// Application state
struct App {
    config: Config,
    mode: AppMode,
    should_quit: bool,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let themes_root = config.paths.themes_directory.clone();
        let mode = if provision::is_repo_installed(&themes_root) {
            Self::browsing_mode(&config)?
        } else {
            debug::log(&format!("provisioning {}", themes_root.display()));
            let rx = provision::spawn_install(config.repo.theme_url.clone(), themes_root);
            AppMode::Provisioning { rx, frame: 0 }
        };

        Ok(Self {
            config,
            mode,
            should_quit: false,
        })
    }

    /// Build the browsing state: catalog, seeded directive, session.
    fn browsing_mode(config: &Config) -> Result<AppMode> {
        let themes_root = &config.paths.themes_directory;
        let config_path = &config.paths.alacritty_config;

        let entries = catalog::list_themes(themes_root).context("Failed to list themes")?;

        // Seed the config with some directive so the locator and every
        // preview write have a file to work on. With an empty catalog there
        // is no directive to seed, but the session still needs a readable
        // file to show the empty-state screen.
        match entries.first() {
            Some(first) => directive::ensure_present(config_path, first)
                .context("Failed to initialize Alacritty config")?,
            None => {
                if !config_path.exists() {
                    fs::write(config_path, "")
                        .context("Failed to create Alacritty config")?;
                }
            }
        }

        let session = SelectionSession::begin(config_path, themes_root)
            .context("Failed to inspect Alacritty config")?;

        Ok(AppMode::Browsing {
            picker: ThemePicker::new(entries),
            session,
        })
    }

    /// Poll the provisioning channel; switch to browsing once the clone ends.
    fn check_provisioning(&mut self) -> Result<()> {
        let outcome = match &mut self.mode {
            AppMode::Provisioning { rx, frame } => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => {
                    *frame = (*frame + 1) % SPINNER_FRAMES.len();
                    None
                }
                Err(TryRecvError::Disconnected) => {
                    Some(Err(anyhow::anyhow!("Theme installation thread exited")))
                }
            },
            AppMode::Browsing { .. } => None,
        };

        if let Some(result) = outcome {
            result.context("Failed to install theme repository")?;
            self.mode = Self::browsing_mode(&self.config)?;
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
            // During provisioning there is no session to unwind; while
            // browsing Ctrl+C behaves like a cancel.
            if let AppMode::Browsing { session, .. } = &mut self.mode {
                session.cancel().context("Failed to restore original theme")?;
            }
            self.should_quit = true;
            return Ok(());
        }

        let AppMode::Browsing { picker, session } = &mut self.mode else {
            return Ok(());
        };

        match picker.handle_key(code) {
            Some(PickerResult::Selected(entry)) => {
                // No-op when the last preview already wrote this theme;
                // covers confirming without ever moving the highlight.
                session
                    .preview(picker.selected_index(), &entry)
                    .context("Failed to apply selected theme")?;
                session.confirm(&entry);
                self.should_quit = true;
            }
            Some(PickerResult::Cancel) => {
                session.cancel().context("Failed to restore original theme")?;
                self.should_quit = true;
            }
            None => {
                // Navigation may have moved the highlight; live-apply it.
                let index = picker.selected_index();
                if let Some(entry) = picker.selected() {
                    session
                        .preview(index, entry)
                        .context("Failed to preview theme")?;
                }
            }
        }
        Ok(())
    }

    /// Message printed after the terminal is restored.
    fn goodbye(&self) -> String {
        match &self.mode {
            AppMode::Browsing { session, .. } => match session.choice() {
                Some(name) => format!("Selected theme: {name}"),
                None => "Not making a selection? That's cool.".to_string(),
            },
            AppMode::Provisioning { .. } => String::new(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    debug::init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Non-TUI subcommands
    match cli.command {
        Some(Commands::List) => {
            for entry in catalog::list_themes(&config.paths.themes_directory)? {
                println!("{}", entry.name);
            }
            return Ok(());
        }
        Some(Commands::Current) => {
            let active = locator::find_active(
                &config.paths.alacritty_config,
                &config.paths.themes_directory,
            )?;
            if active.is_empty() {
                println!("no theme configured");
            } else {
                println!("{}", active.path.display());
            }
            return Ok(());
        }
        None => {}
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    execute!(stdout, crossterm::terminal::SetTitle("alatheme"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            // Cleanup and return error
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                crossterm::cursor::Show,
                LeaveAlternateScreen
            )?;
            return Err(e);
        }
    };
    let result = run(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        crossterm::cursor::Show,
        LeaveAlternateScreen
    )?;

    result?;

    let goodbye = app.goodbye();
    if !goodbye.is_empty() {
        println!("{goodbye}");
    }

    Ok(())
}

/// Main event loop
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.check_provisioning()?;

        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers)?;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Main area
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &mut app.mode {
        AppMode::Provisioning { frame, .. } => {
            let spinner = SPINNER_FRAMES[*frame];
            let text = Paragraph::new(vec![
                Line::from(""),
                Line::from(format!("   {spinner} Installing themes...")),
            ]);
            f.render_widget(text, chunks[1]);
        }
        AppMode::Browsing { picker, .. } => {
            picker.render(f, chunks[1]);
        }
    }
}

/// Render header with key help
fn render_header(f: &mut Frame, area: ratatui::layout::Rect) {
    let spans: Vec<Span> = vec![
        Span::styled(
            " alatheme ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " [Up/Down:preview /:filter Enter:select Esc:restore & quit]",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(Line::from(spans));
    f.render_widget(header, area);
}
