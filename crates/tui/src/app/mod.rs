use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{DraftField, Intent, JsonlJournal, Outcome, Session};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        format::Formatter,
        keymap::{AppAction, map_key},
    },
};

const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct HistoryState {
    pub selected: usize,
}

impl HistoryState {
    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}

pub struct AppState {
    pub session: Session,
    pub history: HistoryState,
    pub toast: Option<ToastState>,
    pub format: Formatter,
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let format = Formatter::from_config(&config)?;
        let session = match config.journal_path.as_deref() {
            Some(path) => Session::open(Box::new(JsonlJournal::new(path)))?,
            None => {
                tracing::info!("no journal configured, entries are kept in memory only");
                Session::new()
            }
        };
        Ok(Self::with_session(session, format))
    }

    pub fn with_session(session: Session, format: Formatter) -> Self {
        let mut history = HistoryState::default();
        history.select_last(session.current_entries().len());
        Self {
            state: AppState {
                session,
                history,
                toast: None,
                format,
            },
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }

            self.expire_toast(Instant::now());
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let drafting = self.state.session.flow().is_drafting();
        match map_key(key, drafting) {
            AppAction::Quit => self.should_quit = true,
            AppAction::RequestEntry(kind) => self.dispatch(Intent::RequestNewEntry(kind)),
            AppAction::Cancel => self.dispatch(Intent::Cancel),
            AppAction::NextField => self.dispatch(Intent::FocusNext),
            AppAction::Submit => self.dispatch(Intent::Submit),
            AppAction::Backspace => self.edit_focused(|_, value| {
                value.pop();
            }),
            AppAction::Input(ch) => self.edit_focused(|field, value| {
                // The amount starts out as "0"; typing replaces it.
                if field == DraftField::Amount && value == "0" {
                    value.clear();
                }
                value.push(ch);
            }),
            AppAction::Up => self.state.history.select_prev(),
            AppAction::Down => self
                .state
                .history
                .select_next(self.state.session.current_entries().len()),
            AppAction::None => {}
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(DraftField, &mut String)) {
        let Some(draft) = self.state.session.flow().draft() else {
            return;
        };
        let field = draft.focus();
        let mut value = draft.field(field).to_string();
        edit(field, &mut value);
        self.dispatch(Intent::UpdateField(field, value));
    }

    fn dispatch(&mut self, intent: Intent) {
        match self.state.session.handle(intent) {
            Outcome::Committed {
                transaction,
                persist_error,
            } => {
                self.state
                    .history
                    .select_last(self.state.session.current_entries().len());
                let amount = self.state.format.money(transaction.amount());
                match persist_error {
                    None => self.toast(
                        ToastLevel::Success,
                        format!("{} {amount} recorded", transaction.kind()),
                    ),
                    Some(err) => self.toast(
                        ToastLevel::Error,
                        format!("{} {amount} not saved to journal: {err}", transaction.kind()),
                    ),
                }
            }
            Outcome::Opened(_) | Outcome::Closed | Outcome::Updated | Outcome::Ignored => {}
        }
    }

    fn toast(&mut self, level: ToastLevel, message: String) {
        self.state.toast = Some(ToastState {
            message,
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.state.toast = None;
        }
    }
}
