//! Top-level application state and the main event loop.
//!
//! [`AppState`] holds everything the screen shows and applies
//! [`AppEvent`]s and probe outcomes to it; it never touches the terminal.
//! [`App::run`] sets up the terminal, drives the crossterm event loop, drains
//! media probes between frames, and tears everything down cleanly on exit or
//! panic.

use crate::{
    event::{self, AppEvent},
    probe::{MediaProber, ProbeOutcome},
    theme::Theme,
    widgets::{
        debug_overlay::DebugOverlay,
        deck::{Deck, DeckState},
        help::HelpPopup,
        location_bar::LocationBar,
    },
};
use chrono::{DateTime, Utc};
use crossterm::{
    event as ct_event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mediadeck_core::{
    card::{self, Activation, CardView},
    config::Config,
    diagnostics::{BuildMode, OverlayState},
    error::FeedError,
    feed::FeedDocument,
    preview::{self, MediaFailures, MediaSlot},
    CanonicalContent, DiagnosticSession, NetworkRequest,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};
use serde_json::{json, Map, Value};
use std::{io, time::Duration};
use tokio::runtime::Handle;

/// Location the app starts at.
pub const HOME: &str = "/";

// ---------------------------------------------------------------------------
// Feed input
// ---------------------------------------------------------------------------

/// The feed handed over by the data layer, plus a label naming where it came
/// from (shown in the request log).
pub struct FeedSource {
    pub label: String,
    pub document: Result<FeedDocument, FeedError>,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// One card: its normalised content and the load failures of its media.
#[derive(Debug, Clone)]
pub struct CardState {
    pub content: CanonicalContent,
    pub failures: MediaFailures,
}

pub struct AppState {
    pub cards: Vec<CardState>,
    pub deck: DeckState,
    /// Visited locations; the last entry is the current one.
    pub history: Vec<String>,
    pub overlay: OverlayState,
    pub build_mode: BuildMode,
    /// Every request made on behalf of the deck, oldest first.
    pub network_log: Vec<NetworkRequest>,
    pub feed_data: Option<Value>,
    pub feed_error: Option<Value>,
    /// Media probes still in flight.
    pub pending_probes: usize,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(feed: FeedSource, config: Config, theme: Theme, build_mode: BuildMode) -> Self {
        let mut network_log = Vec::new();
        let (cards, feed_data, feed_error) = match feed.document {
            Ok(doc) => {
                network_log.push(NetworkRequest::new("GET", &feed.label, Some(200)));
                let cards = doc
                    .contents()
                    .into_iter()
                    .map(|content| CardState {
                        content,
                        failures: MediaFailures::default(),
                    })
                    .collect();
                (cards, Some(doc.to_value()), None)
            }
            Err(e) => {
                tracing::warn!(source = %feed.label, error = %e, "feed failed to load");
                let status = match &e {
                    FeedError::Io { .. } => 404,
                    FeedError::Json(_) | FeedError::Shape { .. } => 422,
                };
                network_log.push(
                    NetworkRequest::new("GET", &feed.label, Some(status)).with_error(e.to_string()),
                );
                let error = json!({ "kind": e.kind(), "message": e.to_string() });
                (Vec::new(), None, Some(error))
            }
        };

        AppState {
            cards,
            deck: DeckState::default(),
            history: vec![HOME.to_string()],
            overlay: OverlayState::new(),
            build_mode,
            network_log,
            feed_data,
            feed_error,
            pending_probes: 0,
            theme,
            config,
            show_help: false,
            quit: false,
        }
    }

    pub fn location(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or(HOME)
    }

    /// Assemble the view of every card for this frame.
    pub fn views(&self, now: DateTime<Utc>) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|c| card::assemble(&c.content, &c.failures, now))
            .collect()
    }

    /// Media URLs to probe, addressed by card index.
    pub fn probe_targets(&self) -> Vec<(usize, MediaSlot, String)> {
        self.cards
            .iter()
            .enumerate()
            .flat_map(|(idx, c)| {
                preview::probe_targets(&c.content)
                    .into_iter()
                    .map(move |(slot, url)| (idx, slot, url))
            })
            .collect()
    }

    /// Snapshot of the deck's state for the diagnostics overlay.
    pub fn session(&self) -> DiagnosticSession {
        let mut info = Map::new();
        info.insert("buildMode".into(), json!(self.build_mode.to_string()));
        info.insert("location".into(), json!(self.location()));
        info.insert("cards".into(), json!(self.cards.len()));
        info.insert(
            "legacyCards".into(),
            json!(self.cards.iter().filter(|c| c.content.is_legacy).count()),
        );
        let selected = self.cards.get(self.deck.selected).map(|c| &c.content);
        info.insert(
            "selected".into(),
            json!(selected.and_then(|c| c.id.clone())),
        );
        info.insert(
            "selectedCard".into(),
            selected
                .and_then(|c| serde_json::to_value(c).ok())
                .unwrap_or(Value::Null),
        );

        DiagnosticSession {
            loading: self.pending_probes > 0,
            error: self.feed_error.clone(),
            data: self.feed_data.clone(),
            network_requests: self.network_log.clone(),
            component_name: self.config.diagnostics.component_name.clone(),
            additional_info: info,
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Help | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Nav(dir) => self.deck.select(dir, self.cards.len()),
            AppEvent::Activate => self.activate_selected(),
            AppEvent::Back => {
                if self.history.len() > 1 {
                    self.history.pop();
                    tracing::debug!(location = %self.location(), "navigated back");
                }
            }
            AppEvent::ToggleDiagnostics => self.overlay.toggle_expanded(),
            AppEvent::CloseDiagnostics => self.overlay.hide(),
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            // Terminal resize is handled automatically by ratatui
            AppEvent::Escape | AppEvent::Resize(_, _) => {}
        }
    }

    fn activate_selected(&mut self) {
        let Some(card) = self.cards.get(self.deck.selected) else {
            return;
        };
        let view = card::assemble(&card.content, &card.failures, Utc::now());
        match view.activate() {
            Activation::Navigate(path) => {
                if self.location() != path {
                    self.history.push(path);
                }
            }
            Activation::Suppressed => {}
        }
    }

    /// Record a finished media probe: log it and, on failure, flip the
    /// card's one-shot failure flag for that slot.
    pub fn apply_probe(&mut self, outcome: ProbeOutcome) {
        let failed = outcome.failed();
        self.network_log.push(outcome.request);
        if !failed {
            return;
        }
        if let Some(card) = self.cards.get_mut(outcome.card) {
            if card.failures.mark_failed(outcome.slot) {
                tracing::debug!(card = outcome.card, slot = ?outcome.slot, "media fell back to placeholder");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    prober: MediaProber,
}

impl App {
    /// Build the app and start probing every card's media on `handle`.
    pub fn new(state: AppState, handle: Handle) -> Self {
        let mut prober = MediaProber::new(handle);
        for (card, slot, url) in state.probe_targets() {
            prober.spawn(card, slot, url);
        }
        let mut app = App { state, prober };
        app.state.pending_probes = app.prober.pending();
        app
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            for outcome in self.prober.drain() {
                self.state.apply_probe(outcome);
            }
            self.state.pending_probes = self.prober.pending();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s, Utc::now()))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                if let Some(ev) = event::to_app_event(ct_event::read()?) {
                    tracing::debug!(event = ?ev, "key event");
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw one frame. `now` anchors the cards' relative timestamps.
pub fn draw(frame: &mut Frame, state: &AppState, now: DateTime<Utc>) {
    let area = frame.area();

    // Vertical: 1-line location bar | deck
    let [bar, body] = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

    frame.render_widget(LocationBar::new(state.location(), state.pending_probes > 0), bar);

    let views = state.views(now);
    frame.render_widget(
        Deck::new(&state.deck, &views, state.config.ui.card_height, &state.theme)
            .show_descriptions(state.config.ui.show_descriptions),
        body,
    );

    let session = state.session();
    frame.render_widget(
        DebugOverlay::new(&session, &state.overlay, state.build_mode, &state.theme),
        body,
    );

    if state.show_help {
        frame.render_widget(HelpPopup, area);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
