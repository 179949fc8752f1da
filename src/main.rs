mod app;
mod config;
mod content;
mod link;
mod theme;
mod ui;
mod view;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Overlay};
use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "A terminal portfolio viewer")]
struct Args {
    /// Print the project list as JSON
    #[arg(short, long)]
    json: bool,

    /// Open a project's link by (case-insensitive) title match
    #[arg(short, long)]
    open: Option<String>,

    /// Start on a specific section (home, about, skills, projects, contact)
    #[arg(short, long)]
    section: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Handle CLI-only commands
    if args.json {
        return print_projects();
    }

    if let Some(title) = args.open {
        return open_project(&title).await;
    }

    run_tui(args.section).await
}

fn print_projects() -> Result<()> {
    let site = content::Site::bundled();
    println!("{}", serde_json::to_string_pretty(&site.projects)?);
    Ok(())
}

async fn open_project(title: &str) -> Result<()> {
    let site = content::Site::bundled();
    let needle = title.to_lowercase();
    let entry = site
        .projects
        .iter()
        .find(|p| p.title.to_lowercase().contains(&needle))
        .ok_or_else(|| anyhow::anyhow!("no project matching '{}'", title))?;

    let config = AppConfig::load().unwrap_or_default();
    link::open(entry.link, config.browser.as_deref()).await?;
    notify("folio", &format!("Opened {}", entry.title))?;
    Ok(())
}

async fn run_tui(section: Option<String>) -> Result<()> {
    let mut config = AppConfig::load().unwrap_or_default();
    if section.is_some() {
        config.start_section = section;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

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

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.tick(size.width, size.height);

        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if app.overlay == Overlay::None => return Ok(()),
                    KeyCode::Char('c')
                        if key.modifiers.contains(event::KeyModifiers::CONTROL) =>
                    {
                        return Ok(())
                    }
                    _ => {
                        // Handle key and catch any errors to prevent crashes
                        if let Err(e) = app.handle_key(key).await {
                            app.set_status(format!("Error: {}", e));
                        }
                    }
                },
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}

fn notify(summary: &str, body: &str) -> Result<()> {
    notify_rust::Notification::new()
        .summary(summary)
        .body(body)
        .icon("user-info")
        .show()?;
    Ok(())
}
