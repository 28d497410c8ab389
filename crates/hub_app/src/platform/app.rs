use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use hub_core::{update, AppState, AppViewModel, Msg, Route};
use hub_logging::{hub_debug, hub_info, hub_warn};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use ratatui::DefaultTerminal;

use super::config::AppConfig;
use super::effects::run_effects;
use super::ui::constants::CARD_COLUMNS;
use super::ui::input::{self, Command, HitMap};
use super::ui::{self, UiState};

/// Everything the main loop reacts to, funnelled through one channel.
pub enum AppEvent {
    Input(Event),
    Msg(Msg),
}

pub fn run_app(config: &AppConfig, year: i32) -> Result<()> {
    let route = Route::parse(&config.start_route);
    hub_info!("Starting at {} with {:?} theme", route.path(), config.theme);
    let handler = AppEventHandler::new(AppState::starting_at(route, config.theme.into()), year);

    let mut terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .context("enable mouse capture")
        .and_then(|()| event_loop(&mut terminal, handler, config.tick_ms));
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
        hub_warn!("Failed to disable mouse capture: {}", err);
    }
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut handler: AppEventHandler,
    tick_ms: u64,
) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let input_tx = event_tx.clone();
    thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                if input_tx.send(AppEvent::Input(event)).is_err() {
                    break;
                }
            }
            Err(err) => {
                hub_warn!("Terminal input stopped: {}", err);
                break;
            }
        }
    });

    // Background tick to throttle rendering.
    thread::spawn(move || {
        let interval = Duration::from_millis(tick_ms.max(1));
        while event_tx.send(AppEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(interval);
        }
    });

    handler.draw(terminal)?;
    for event in event_rx {
        match event {
            AppEvent::Input(event) => handler.handle_input(event),
            AppEvent::Msg(msg) => {
                let is_tick = matches!(msg, Msg::Tick);
                handler.dispatch_msg(msg);
                if is_tick && handler.needs_redraw {
                    handler.draw(terminal)?;
                }
            }
        }
        if handler.should_quit {
            break;
        }
    }
    Ok(())
}

struct AppEventHandler {
    state: AppState,
    view: AppViewModel,
    ui: UiState,
    hits: HitMap,
    year: i32,
    needs_redraw: bool,
    should_quit: bool,
}

impl AppEventHandler {
    fn new(state: AppState, year: i32) -> Self {
        let view = state.view();
        Self {
            state,
            view,
            ui: UiState::default(),
            hits: HitMap::default(),
            year,
            needs_redraw: true,
            should_quit: false,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
            self.needs_redraw = true;
        }
        self.state = state;

        if !effects.is_empty() {
            run_effects(effects, &mut self.ui);
            self.needs_redraw = true;
        }
        self.ui.sync_with(&self.view);
    }

    fn handle_input(&mut self, event: Event) {
        let commands = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                input::on_key(key, &self.ui, &self.view).into_iter().collect()
            }
            Event::Mouse(mouse) => input::on_mouse(mouse, &self.hits, &self.view),
            Event::Resize(width, height) => {
                hub_debug!("Terminal resized to {}x{}", width, height);
                self.needs_redraw = true;
                Vec::new()
            }
            _ => Vec::new(),
        };
        for command in commands {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Dispatch(msg) => self.dispatch_msg(msg),
            Command::Scroll(delta) => {
                let last_row = self.view.content.as_ref().map_or(0, |content| {
                    content.cards.len().div_ceil(CARD_COLUMNS).saturating_sub(1)
                });
                self.ui.scroll_by(delta);
                self.ui.scroll_rows = self
                    .ui
                    .scroll_rows
                    .min(u16::try_from(last_row).unwrap_or(u16::MAX));
                self.needs_redraw = true;
            }
            Command::MoveSuggestion(delta) => {
                self.ui
                    .move_suggestion_cursor(delta, self.view.search.suggestions.len());
                self.needs_redraw = true;
            }
            Command::Focus(focus) => {
                self.ui.focus = focus;
                self.needs_redraw = true;
            }
            Command::Quit => {
                hub_info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let (view, ui_state, year) = (&self.view, &self.ui, self.year);
        let mut hits = HitMap::default();
        terminal
            .draw(|frame| hits = ui::render::render(frame, view, ui_state, year))
            .context("draw frame")?;
        self.hits = hits;
        self.needs_redraw = false;
        Ok(())
    }
}
