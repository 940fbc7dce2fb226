mod app;
mod certificate;
mod challenge;
mod config;
mod content;
mod event;
mod session;
mod store;
mod ui;

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::{App, AppScreen};
use config::Config;
use content::{ChallengeItem, ContentSource};
use event::{AppEvent, EventHandler};
use session::Stage;
use ui::components::card::CardView;
use ui::components::feedback::FeedbackPanel;
use ui::components::header::SessionHeader;
use ui::components::results::ResultsPanel;
use ui::components::welcome::WelcomeScreen;
use ui::layout::AppLayout;

#[derive(Parser)]
#[command(name = "kallkoll", version, about = "Terminal media-literacy trainer")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Skip the content request and use embedded challenges")]
    offline: bool,

    #[arg(short, long, help = "Prefill the certificate name")]
    name: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A malformed embedded fallback list is a fatal configuration error;
    // catching it here keeps the fetch thread infallible.
    let fallback_items = content::fallback::items()?;

    let mut app = App::new();
    if cli.offline {
        app.config.offline = true;
    }
    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            let theme: &'static ui::theme::Theme = Box::leak(Box::new(theme));
            app.theme = theme;
        }
    }
    if let Some(name) = cli.name {
        app.name_input = name;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    spawn_content_fetch(&events, &app.config, fallback_items.clone());

    let result = run_app(&mut terminal, &mut app, &events, &fallback_items);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// One fetch per session, off the UI thread; the result (remote, padded or
/// fallback) arrives as an AppEvent. No retry, no cancellation.
fn spawn_content_fetch(events: &EventHandler, config: &Config, fallback: Vec<ChallengeItem>) {
    let tx = events.sender();
    let config = config.clone();
    thread::spawn(move || {
        let source = build_source(&config);
        let resolved = content::resolve(source.as_deref(), fallback);
        let _ = tx.send(AppEvent::Content(resolved));
    });
}

#[cfg(feature = "network")]
fn build_source(config: &Config) -> Option<Box<dyn ContentSource>> {
    if config.offline {
        return None;
    }
    content::gemini::GeminiSource::from_env(config)
        .map(|source| Box::new(source) as Box<dyn ContentSource>)
}

#[cfg(not(feature = "network"))]
fn build_source(_config: &Config) -> Option<Box<dyn ContentSource>> {
    None
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
    fallback_items: &[ChallengeItem],
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key, events, fallback_items),
            // Ticks exist so the snap-judgment unlock and the loading screen
            // refresh without user input.
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
            AppEvent::Content(resolved) => app.content_ready(resolved),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, events: &EventHandler, fallback_items: &[ChallengeItem]) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Loading => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                app.should_quit = true;
            }
        }
        AppScreen::Trainer => handle_trainer_key(app, key, events, fallback_items),
    }
}

fn handle_trainer_key(
    app: &mut App,
    key: KeyEvent,
    events: &EventHandler,
    fallback_items: &[ChallengeItem],
) {
    // Pending feedback swallows everything except acknowledge/quit.
    if app.session.feedback().is_some() {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.acknowledge(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match app.session.stage() {
        Stage::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.start(),
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            _ => {}
        },
        Stage::SnapJudgment
        | Stage::AiDetection
        | Stage::ConfirmationBias
        | Stage::TruthEffect => handle_challenge_key(app, key),
        Stage::LateralReading => {
            if key.code == KeyCode::Char('c') {
                app.toggle_clues();
            } else {
                handle_challenge_key(app, key);
            }
        }
        Stage::Results => handle_results_key(app, key, events, fallback_items),
    }
}

fn handle_challenge_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('1') => app.activate_choice(0),
        KeyCode::Char('2') => app.activate_choice(1),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_results_key(
    app: &mut App,
    key: KeyEvent,
    events: &EventHandler,
    fallback_items: &[ChallengeItem],
) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('r') {
        app.restart();
        spawn_content_fetch(events, &app.config, fallback_items.to_vec());
        return;
    }
    match key.code {
        KeyCode::Enter => app.export_certificate(),
        KeyCode::Backspace => app.backspace_name(),
        KeyCode::Char(ch) => app.push_name_char(ch),
        KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Loading => render_loading(frame, app),
        AppScreen::Trainer => render_trainer(frame, app),
    }
}

fn render_loading(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let centered = ui::layout::centered_rect(50, 30, frame.area());
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Calibrating cognitive defenses...",
            Style::default().fg(colors.accent()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "fetching today's challenges",
            Style::default().fg(colors.muted()),
        )),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .block(Block::bordered().border_style(Style::default().fg(colors.border())));
    frame.render_widget(text, centered);
}

fn render_trainer(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = AppLayout::new(frame.area());

    let header = SessionHeader {
        score: app.session.progress.score,
        progress: app.session.stage().progress(),
        note: app.content_note(),
        theme: app.theme,
    };
    frame.render_widget(header, layout.header);

    let main = ui::layout::centered_rect(70, 90, layout.main);

    if let Some(feedback) = app.session.feedback() {
        let panel = FeedbackPanel {
            feedback,
            is_last: app.session.stage().is_last_challenge(),
            theme: app.theme,
        };
        frame.render_widget(panel, main);
    } else {
        match app.session.stage() {
            Stage::Welcome => frame.render_widget(WelcomeScreen { theme: app.theme }, main),
            Stage::Results => {
                let panel = ResultsPanel {
                    progress: &app.session.progress,
                    name: &app.name_input,
                    export_note: app.export_note.as_deref(),
                    theme: app.theme,
                };
                frame.render_widget(panel, main);
            }
            _ => {
                if let Some(card) = app.current_card() {
                    let view = CardView {
                        card: &card,
                        selected: app.selected,
                        theme: app.theme,
                    };
                    frame.render_widget(view, main);
                }
            }
        }
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        footer_hint(app),
        Style::default().fg(colors.muted()),
    )));
    frame.render_widget(footer, layout.footer);
}

fn footer_hint(app: &App) -> &'static str {
    if app.session.feedback().is_some() {
        return " [Enter] Continue  [q] Quit ";
    }
    match app.session.stage() {
        Stage::Welcome => " [Enter] Start  [q] Quit ",
        Stage::LateralReading => " [c] Check around  [1-2/arrows] Answer  [Enter] Select  [q] Quit ",
        Stage::Results => " [type] Name  [Enter] Export  [Ctrl+R] Play again  [Esc] Quit ",
        _ => " [1-2/arrows] Answer  [Enter] Select  [q] Quit ",
    }
}
