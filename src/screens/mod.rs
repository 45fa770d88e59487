pub mod score;

use std::rc::Rc;
use std::time::Duration;

use ratatui::Frame;

use crate::config::Settings;
use crate::cooldown::{Clock, Cooldown};
use crate::input::Input;
use crate::scores::ScoreStore;

/// What the caller should show once a screen is done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Back to the title menu.
    Menu,
    /// Start another round.
    Replay,
}

impl Transition {
    pub fn code(&self) -> i32 {
        match self {
            Transition::Menu => 1,
            Transition::Replay => 2,
        }
    }
}

/// Hooks the frame loop calls on whichever screen is active.
pub trait Screen {
    fn update(&mut self, input: &dyn Input);
    fn draw(&self, frame: &mut Frame);
    /// `Some` once the screen has finished.
    fn exit(&self) -> Option<Transition>;
}

/// Shared services handed to every screen on construction.
#[derive(Clone)]
pub struct Services {
    pub store: Rc<dyn ScoreStore>,
    pub clock: Rc<dyn Clock>,
    pub settings: Settings,
}

impl Services {
    pub fn cooldown(&self, duration: Duration) -> Cooldown {
        Cooldown::new(self.clock.clone(), duration)
    }
}
