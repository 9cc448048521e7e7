//! Text widgets
//!
//! Write-only sinks: they format text and hand it to the surface, they never
//! read anything back.

use crate::platform::{Surface, TextSlot};
use crate::settings::Rgb;

/// A one-line message in the prompt slot, drawn once until cleared
#[derive(Debug, Clone)]
pub struct PromptText {
    message: String,
    rendered: bool,
}

impl PromptText {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rendered: false,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.rendered = false;
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) {
        if !self.rendered {
            surface.draw_text(TextSlot::Prompt, &self.message);
            self.rendered = true;
        }
    }

    pub fn clear(&mut self, surface: &mut dyn Surface, background: Rgb) {
        surface.clear_text(TextSlot::Prompt, background);
        self.rendered = false;
    }
}

/// "Player N : SS" labels for both players
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    drawn: Option<[u32; 2]>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(player: usize, score: u32) -> String {
        format!("Player {} : {:02}", player + 1, score)
    }

    /// Force a redraw on the next `draw`
    pub fn invalidate(&mut self) {
        self.drawn = None;
    }

    pub fn draw(&mut self, surface: &mut dyn Surface, scores: [u32; 2]) {
        if self.drawn == Some(scores) {
            return;
        }
        for (player, score) in scores.into_iter().enumerate() {
            surface.draw_text(TextSlot::Score(player), &Self::label(player, score));
        }
        self.drawn = Some(scores);
    }
}
