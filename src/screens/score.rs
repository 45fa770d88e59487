use log::{debug, info};
use ratatui::Frame;

use crate::cooldown::Cooldown;
use crate::input::{Input, Key};
use crate::name_entry::NameEntry;
use crate::round::RoundResult;
use crate::scores::{self, HighScoreTable, ScoreRecord};
use crate::screens::{Screen, Services, Transition};
use crate::ui;

/// Results shown after a round, with name entry when someone made the board.
pub struct ScoreScreen {
    services: Services,
    round: RoundResult,
    high_scores: HighScoreTable,
    is_new_record: bool,
    /// One entry per player slot; only player 1's is wired to input.
    names: Option<[NameEntry; 2]>,
    selection_cooldown: Cooldown,
    input_delay: Cooldown,
    cancel_held: bool,
    confirm_held: bool,
    exit: Option<Transition>,
}

impl ScoreScreen {
    pub fn new(services: Services, round: RoundResult) -> Self {
        let high_scores = scores::load_or_empty(services.store.as_ref());
        let is_new_record = high_scores.is_new_record(round.players().map(|p| p.score));
        if is_new_record {
            info!("new high score this round");
        }

        let mut selection_cooldown = services.cooldown(services.settings.selection_time);
        selection_cooldown.reset();
        let mut input_delay = services.cooldown(services.settings.input_delay);
        input_delay.reset();

        ScoreScreen {
            services,
            round,
            high_scores,
            is_new_record,
            names: is_new_record.then(|| [NameEntry::new(); 2]),
            selection_cooldown,
            input_delay,
            cancel_held: false,
            confirm_held: false,
            exit: None,
        }
    }

    pub fn round(&self) -> &RoundResult {
        &self.round
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    pub fn is_new_record(&self) -> bool {
        self.is_new_record
    }

    /// The name being edited on screen, if there is one.
    pub fn name_entry(&self) -> Option<&NameEntry> {
        self.names.as_ref().map(|names| &names[0])
    }

    pub fn accepting_input(&self) -> bool {
        self.input_delay.is_finished()
    }

    fn finish(&mut self, transition: Transition) {
        info!("leaving score screen with code {}", transition.code());
        if let Some(names) = &self.names {
            let records: Vec<ScoreRecord> = self
                .round
                .players()
                .zip(names.iter())
                .map(|(stats, entry)| ScoreRecord::new(entry.name(), stats.score))
                .collect();
            self.high_scores.commit(records);
            scores::persist(self.services.store.as_ref(), &self.high_scores);
        }
        self.exit = Some(transition);
    }
}

impl Screen for ScoreScreen {
    fn update(&mut self, input: &dyn Input) {
        if self.exit.is_some() {
            return;
        }

        // Edge-triggered so a key carried over from the last screen doesn't count
        let cancel = input.is_down(Key::Cancel);
        let confirm = input.is_down(Key::Confirm);
        let cancel_pressed = cancel && !self.cancel_held;
        let confirm_pressed = confirm && !self.confirm_held;
        self.cancel_held = cancel;
        self.confirm_held = confirm;

        if !self.input_delay.is_finished() {
            return;
        }

        if cancel_pressed {
            self.finish(Transition::Menu);
        } else if confirm_pressed {
            self.finish(Transition::Replay);
        } else if self.selection_cooldown.is_finished() {
            let Some(names) = self.names.as_mut() else { return };
            if names[0].apply(input) {
                debug!("name entry: {} (slot {})", names[0].name(), names[0].selected());
                self.selection_cooldown.reset();
            }
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        ui::score::render(frame, area, self);
    }

    fn exit(&self) -> Option<Transition> {
        self.exit
    }
}
