use std::time::Instant;

use crate::certificate;
use crate::challenge::{self, ChallengeCard};
use crate::challenge::snap_judgment;
use crate::config::Config;
use crate::content::{ChallengeItem, ContentOrigin, ResolvedContent};
use crate::session::{Session, Stage};
use crate::store::NameStore;
use crate::ui::theme::Theme;

/// Top-level screens. The whole trainer sits behind Loading until the
/// content provider has delivered, which is what gates the content-dependent
/// stages: they are unreachable while items are absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Loading,
    Trainer,
}

/// The session controller. Owns the state machine, the fetched content, the
/// per-stage UI sub-state (selection, clue disclosure, the snap-judgment
/// entry instant), and the durable name store. All mutation goes through the
/// methods below; widgets only read.
pub struct App {
    pub screen: AppScreen,
    pub session: Session,
    pub items: Vec<ChallengeItem>,
    pub content_origin: Option<ContentOrigin>,
    pub selected: usize,
    pub clues_shown: bool,
    /// Set on entering SnapJudgment, cleared on leaving it. Clearing is the
    /// timer cancellation: elapsed time is only ever read while on the stage.
    pub stage_entered_at: Option<Instant>,
    pub name_input: String,
    pub export_note: Option<String>,
    pub theme: &'static Theme,
    pub config: Config,
    pub store: Option<NameStore>,
    pub should_quit: bool,
}

const MAX_NAME_LEN: usize = 40;

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let store = NameStore::new().ok();

        Self {
            screen: AppScreen::Loading,
            session: Session::new(),
            items: Vec::new(),
            content_origin: None,
            selected: 0,
            clues_shown: false,
            stage_entered_at: None,
            name_input: String::new(),
            export_note: None,
            theme,
            config,
            store,
            should_quit: false,
        }
    }

    /// Content provider finished; cache the items for the session and open
    /// the trainer at Welcome.
    pub fn content_ready(&mut self, resolved: ResolvedContent) {
        self.items = resolved.items;
        self.content_origin = Some(resolved.origin);
        self.screen = AppScreen::Trainer;
    }

    /// Header note when the session is not running on fresh remote content.
    pub fn content_note(&self) -> Option<&'static str> {
        match self.content_origin {
            Some(ContentOrigin::Remote) | None => None,
            Some(ContentOrigin::Padded) | Some(ContentOrigin::Fallback) => {
                Some("offline content")
            }
        }
    }

    pub fn start(&mut self) {
        if self.session.start().is_ok() {
            self.enter_stage(Stage::SnapJudgment);
        }
    }

    fn enter_stage(&mut self, stage: Stage) {
        self.selected = 0;
        self.clues_shown = false;
        self.stage_entered_at = (stage == Stage::SnapJudgment).then(Instant::now);
        if stage == Stage::Results && self.name_input.is_empty() {
            if let Some(ref store) = self.store {
                self.name_input = store.load();
            }
        }
    }

    /// Whether the snap-judgment reflective choice has unlocked. True for
    /// every other stage (no locked choices elsewhere).
    pub fn snap_unlocked(&self) -> bool {
        match self.stage_entered_at {
            Some(entered) => snap_judgment::reflective_choice_unlocked(entered.elapsed()),
            None => true,
        }
    }

    pub fn current_card(&self) -> Option<ChallengeCard> {
        challenge::card_for(
            self.session.stage(),
            &self.items,
            self.snap_unlocked(),
            self.clues_shown,
        )
    }

    pub fn select_next(&mut self) {
        if let Some(card) = self.current_card() {
            self.selected = (self.selected + 1) % card.choices.len();
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(card) = self.current_card() {
            self.selected = if self.selected == 0 {
                card.choices.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Answer the current challenge with the selected choice. Locked choices
    /// and stale inputs (feedback already up) are no-ops.
    pub fn activate_selected(&mut self) {
        if self.session.feedback().is_some() {
            return;
        }
        let Some(card) = self.current_card() else {
            return;
        };
        let Some(choice) = card.choices.get(self.selected) else {
            return;
        };
        if choice.locked {
            return;
        }
        let _ = self.session.award(choice.outcome.clone());
    }

    pub fn activate_choice(&mut self, index: usize) {
        if let Some(card) = self.current_card() {
            if index < card.choices.len() {
                self.selected = index;
                self.activate_selected();
            }
        }
    }

    /// Reveal or hide the lateral-reading clues. Free and idempotent; never
    /// touches progress.
    pub fn toggle_clues(&mut self) {
        if self.session.stage() == Stage::LateralReading {
            self.clues_shown = !self.clues_shown;
        }
    }

    pub fn acknowledge(&mut self) {
        if let Ok(next) = self.session.acknowledge() {
            self.enter_stage(next);
        }
    }

    /// Full replay: zeroed session back at Welcome, behind Loading until the
    /// caller has re-invoked the content provider.
    pub fn restart(&mut self) {
        self.session.reset();
        self.items.clear();
        self.content_origin = None;
        self.selected = 0;
        self.clues_shown = false;
        self.stage_entered_at = None;
        self.export_note = None;
        self.screen = AppScreen::Loading;
    }

    pub fn push_name_char(&mut self, ch: char) {
        if self.name_input.chars().count() < MAX_NAME_LEN && !ch.is_control() {
            self.name_input.push(ch);
        }
    }

    pub fn backspace_name(&mut self) {
        self.name_input.pop();
    }

    /// Persist the name, then write the printable certificate. Requires a
    /// non-empty name, matching the disabled export of the results screen.
    pub fn export_certificate(&mut self) {
        let name = self.name_input.trim().to_string();
        if name.is_empty() {
            return;
        }
        let Some(ref store) = self.store else {
            return;
        };
        if store.save(&name).is_err() {
            return;
        }
        let today = chrono::Local::now().date_naive();
        match certificate::export(store.base_dir(), &self.session.progress, &name, today) {
            Ok(path) => self.export_note = Some(path.display().to_string()),
            Err(_) => self.export_note = None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
