//! Match state and scoring rules
//!
//! `Match` owns the court, both paddles, the ball and the score. States reach
//! everything they need through it.

use super::ball::{Ball, BallStrategy};
use super::events::BallOffCourt;
use super::paddle::{Paddle, PlayerId, Side};
use super::rect::Rect;
use crate::error::GameError;
use crate::platform::Surface;
use crate::settings::Settings;
use crate::states::StateId;
use crate::widgets::ScoreBoard;

/// Court, entities and score for one match
#[derive(Debug, Clone)]
pub struct Match {
    settings: Settings,
    court: Rect,
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    /// Points per player, indexed by `PlayerId`
    scores: [u32; 2],
    scoreboard: ScoreBoard,
}

impl Match {
    /// Build a match from validated settings. Scores start at 0:0.
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;

        let court = settings.court();
        let paddles = Side::BOTH.map(|side| {
            Paddle::new(side, settings.paddle_dims(), settings.paddle_speed, &court)
        });
        let ball = Ball::new(settings.ball_dims(), settings.serve_angle, settings.ball_speed);

        Ok(Self {
            settings,
            court,
            paddles,
            ball,
            scores: [0, 0],
            scoreboard: ScoreBoard::new(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn court(&self) -> &Rect {
        &self.court
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.player()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.player()]
    }

    /// Reset the score for a fresh match
    pub fn new_match(&mut self) {
        self.scores = [0, 0];
        self.scoreboard.invalidate();
        log::info!("New match");
    }

    /// Award a point. Returns whether that player has now won.
    pub fn score(&mut self, player: PlayerId) -> bool {
        self.scores[player] += 1;
        self.scoreboard.invalidate();
        log::info!("score: {} - {}", self.scores[0], self.scores[1]);
        self.has_won(player)
    }

    /// At least `win_score` points and ahead by at least `win_margin`
    pub fn has_won(&self, player: PlayerId) -> bool {
        let mine = self.scores[player];
        let theirs = self.scores[1 - player];
        mine >= self.settings.win_score && mine.saturating_sub(theirs) >= self.settings.win_margin
    }

    pub fn winner(&self) -> Option<PlayerId> {
        (0..2).find(|&player| self.has_won(player))
    }

    /// Resolve a finished rally and pick the next state.
    ///
    /// The point goes to the last player who touched the ball. A ball nobody
    /// touched is replayed without scoring.
    pub fn on_ball_off_court(&mut self, event: BallOffCourt) -> StateId {
        match event.last_hit_by {
            Some(player) => {
                if self.score(player) {
                    log::info!("player{} won", player + 1);
                    StateId::Won
                } else {
                    StateId::Service
                }
            }
            None => {
                log::warn!(
                    "ball went out {} without a recorded hitter, replaying service",
                    event.side.as_str()
                );
                StateId::Service
            }
        }
    }

    /// Strategy for the ball while waiting for the serve
    pub fn service_strategy(&self) -> BallStrategy {
        BallStrategy::Service {
            server: self.settings.serve_side,
        }
    }

    pub fn set_ball_strategy(&mut self, strategy: BallStrategy) {
        self.ball.strategy = strategy;
    }

    /// Restore the ball's initial vector and let its strategy place it
    pub fn reinit_ball(&mut self) {
        self.ball.reinit(&self.paddles);
    }

    /// Put both paddles back on their marks and the ball on the server
    pub fn reset_positions(&mut self) {
        for paddle in &mut self.paddles {
            paddle.reset_to_side(&self.court);
        }
        self.reinit_ball();
    }

    pub fn halt_paddles(&mut self) {
        for paddle in &mut self.paddles {
            paddle.set_still();
        }
    }

    /// One simulation tick: ball first, then paddles
    pub fn update(&mut self) -> Option<BallOffCourt> {
        let out = self.ball.update(&self.court, &self.paddles);
        for paddle in &mut self.paddles {
            paddle.tick(&self.court);
        }
        out
    }

    /// Redraw the score widgets if the score changed since the last draw
    pub fn draw_scoreboard(&mut self, surface: &mut dyn Surface) {
        self.scoreboard.draw(surface, self.scores);
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, scores: [u32; 2]) {
        self.scores = scores;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn new_match() -> Match {
        Match::new(Settings::default()).expect("default settings are valid")
    }

    fn has_won_at(left: u32, right: u32) -> bool {
        let mut m = new_match();
        m.set_scores([left, right]);
        m.has_won(0)
    }

    #[test]
    fn test_win_rule_table() {
        assert!(!has_won_at(20, 19));
        assert!(!has_won_at(21, 20));
        assert!(!has_won_at(22, 21));
        assert!(has_won_at(21, 19));
        assert!(has_won_at(25, 23));
        assert!(has_won_at(21, 0));
    }

    #[test]
    fn test_huge_margin_never_wins() {
        let settings = Settings::from_json(r#"{"win_margin": 4294967295}"#).expect("valid");
        let mut m = Match::new(settings).expect("valid");
        m.set_scores([21, 1]);
        assert!(!m.has_won(0));
        assert!(!m.has_won(1));
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_match_point_needs_two_clear() {
        let mut m = new_match();
        m.set_scores([20, 20]);

        assert!(!m.score(0), "21-20 is not a win");
        assert_eq!(m.scores(), [21, 20]);

        assert!(m.score(0), "22-20 wins");
        assert_eq!(m.scores(), [22, 20]);
        assert_eq!(m.winner(), Some(0));
    }

    #[test]
    fn test_new_match_resets_scores() {
        let mut m = new_match();
        m.set_scores([21, 3]);
        m.new_match();
        assert_eq!(m.scores(), [0, 0]);
        assert_eq!(m.winner(), None);
    }

    #[test]
    fn test_off_court_scores_for_last_hitter() {
        let mut m = new_match();
        let next = m.on_ball_off_court(BallOffCourt {
            side: Side::Right,
            last_hit_by: Some(0),
        });
        assert_eq!(next, StateId::Service);
        assert_eq!(m.scores(), [1, 0]);
    }

    #[test]
    fn test_unattributed_exit_does_not_score() {
        let mut m = new_match();
        let next = m.on_ball_off_court(BallOffCourt {
            side: Side::Left,
            last_hit_by: None,
        });
        assert_eq!(next, StateId::Service);
        assert_eq!(m.scores(), [0, 0]);
    }

    #[test]
    fn test_winning_point_goes_to_won() {
        let mut m = new_match();
        m.set_scores([5, 20]);
        let next = m.on_ball_off_court(BallOffCourt {
            side: Side::Left,
            last_hit_by: Some(1),
        });
        assert_eq!(next, StateId::Won);
        assert_eq!(m.winner(), Some(1));
    }

    #[test]
    fn test_invalid_settings_are_fatal() {
        let settings = Settings {
            paddle_size: (-1.0, 64.0),
            ..Default::default()
        };
        assert!(Match::new(settings).is_err());
    }

    #[test]
    fn test_reset_positions_serves_from_left() {
        let mut m = new_match();
        m.paddles[0].rect.pos.y = 0.0;
        m.set_ball_strategy(m.service_strategy());
        m.reset_positions();

        assert_eq!(m.paddles[0].rect.center_y(), 240.0);
        assert_eq!(m.ball.rect.left(), m.paddles[0].rect.right());
        assert_eq!(m.ball.last_hit_by, Some(0));
    }

    #[test]
    fn test_update_moves_ball_before_paddles() {
        let mut m = new_match();
        m.set_ball_strategy(m.service_strategy());
        m.reset_positions();
        m.paddles[0].set_moving(crate::sim::Motion::MovingDown);

        m.update();
        // Ball snapped to the paddle's pre-move position
        assert_eq!(m.ball.rect.center_y(), 240.0);
        assert_eq!(m.paddles[0].rect.center_y(), 250.0);
    }

    proptest! {
        #[test]
        fn prop_win_rule(left in 0u32..40, right in 0u32..40) {
            let mut m = new_match();
            m.set_scores([left, right]);
            let expected = left >= 21 && left >= right + 2;
            prop_assert_eq!(m.has_won(0), expected);
            let expected = right >= 21 && right >= left + 2;
            prop_assert_eq!(m.has_won(1), expected);
        }
    }
}
