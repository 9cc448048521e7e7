//! Free-flight ball physics
//!
//! One tick: move the ball, then either resolve a paddle hit (ball still in
//! court) or work out which edge it crossed (ball partly outside).
//!
//! Known quirk: a ball leaving near a corner can trip both the top/bottom
//! reflection and the left/right exit in the same tick. The reflection is
//! applied first and the exit is still reported.

use std::f32::consts::PI;

use super::ball::Ball;
use super::events::BallOffCourt;
use super::paddle::{Paddle, Side};
use super::rect::Rect;
use crate::normalize_angle;

/// Which edges of the court a rect has crossed, from its corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourtExit {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CourtExit {
    /// Classify `rect` against `court`. An edge counts as crossed only when
    /// both corners on that edge lie outside the court.
    pub fn of(court: &Rect, rect: &Rect) -> Self {
        let tl = !court.contains_point(rect.top_left());
        let tr = !court.contains_point(rect.top_right());
        let bl = !court.contains_point(rect.bottom_left());
        let br = !court.contains_point(rect.bottom_right());

        Self {
            top: tl && tr,
            bottom: bl && br,
            left: tl && bl,
            right: tr && br,
        }
    }
}

/// Advance a free-flying ball by one tick
pub fn advance(ball: &mut Ball, court: &Rect, paddles: &[Paddle; 2]) -> Option<BallOffCourt> {
    ball.rect = ball.rect.translate(ball.displacement());
    if check_hit(ball, court, paddles) {
        None
    } else {
        check_out(ball, court)
    }
}

/// Paddle collision. Returns false when the ball is no longer fully inside the
/// court, in which case nothing is checked.
///
/// A latched `hit` is released on the next in-court check without testing the
/// paddles, so a ball still overlapping the paddle it just bounced off cannot
/// bounce a second time.
pub fn check_hit(ball: &mut Ball, court: &Rect, paddles: &[Paddle; 2]) -> bool {
    if !court.contains(&ball.rect) {
        return false;
    }

    if ball.hit {
        ball.hit = false;
        return true;
    }

    // Left paddle first
    if let Some(paddle) = paddles.iter().find(|p| ball.rect.collide(&p.rect)) {
        log::debug!("ball hit by {}", paddle);
        ball.hit = true;
        ball.last_hit_by = Some(paddle.player);
        ball.angle = normalize_angle(PI - ball.angle);
    }

    true
}

/// Wall handling for a ball that is at least partly outside the court.
///
/// Top/bottom: mirror the angle. Left/right: report the exit and forget the
/// last hitter.
pub fn check_out(ball: &mut Ball, court: &Rect) -> Option<BallOffCourt> {
    if court.contains(&ball.rect) {
        return None;
    }

    let exit = CourtExit::of(court, &ball.rect);

    if exit.top || exit.bottom {
        ball.angle = normalize_angle(-ball.angle);
    }

    if exit.left || exit.right {
        let side = if exit.right { Side::Right } else { Side::Left };
        log::debug!("ball going out {}", side.as_str());
        return Some(BallOffCourt {
            side,
            last_hit_by: ball.last_hit_by.take(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ball::BallStrategy;
    use glam::Vec2;
    use proptest::prelude::*;

    fn court() -> Rect {
        Rect::new(0.0, 0.0, 640.0, 480.0)
    }

    fn paddles() -> [Paddle; 2] {
        let size = Vec2::new(10.0, 64.0);
        [
            Paddle::new(Side::Left, size, 10.0, &court()),
            Paddle::new(Side::Right, size, 10.0, &court()),
        ]
    }

    fn ball_at(x: f32, y: f32, angle: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(12.0, 12.0), angle, 13.0);
        ball.rect.pos = Vec2::new(x, y);
        ball.strategy = BallStrategy::Playing;
        ball
    }

    /// Same direction, regardless of how the angle is wrapped
    fn same_heading(a: f32, b: f32) -> bool {
        (a.cos() - b.cos()).abs() < 1e-4 && (a.sin() - b.sin()).abs() < 1e-4
    }

    #[test]
    fn test_right_paddle_reflects_ball() {
        let court = court();
        let paddles = paddles();
        // Overlaps the right paddle (x 630..640, y 208..272)
        let mut ball = ball_at(622.0, 230.0, 0.3);

        assert!(check_hit(&mut ball, &court, &paddles));
        assert!(ball.hit);
        assert_eq!(ball.last_hit_by, Some(1));
        assert!(same_heading(ball.angle, PI - 0.3));
        assert_eq!(ball.speed, 13.0);
    }

    #[test]
    fn test_left_paddle_wins_when_both_overlap() {
        let court = Rect::new(0.0, 0.0, 30.0, 480.0);
        let size = Vec2::new(10.0, 64.0);
        let paddles = [
            Paddle::new(Side::Left, size, 10.0, &court),
            Paddle::new(Side::Right, size, 10.0, &court),
        ];
        // Wide ball touching both paddles at once
        let mut ball = ball_at(5.0, 230.0, 0.0);
        ball.rect.size = Vec2::new(20.0, 12.0);

        check_hit(&mut ball, &court, &paddles);
        assert_eq!(ball.last_hit_by, Some(0));
        assert!(same_heading(ball.angle, PI));
    }

    #[test]
    fn test_hit_latch_suppresses_second_bounce() {
        let court = court();
        let paddles = paddles();
        let mut ball = ball_at(622.0, 230.0, 0.0);

        check_hit(&mut ball, &court, &paddles);
        let after_first = ball.angle;
        assert!(ball.hit);

        // Still overlapping on the next check: latch consumed, no reflection
        check_hit(&mut ball, &court, &paddles);
        assert!(!ball.hit);
        assert_eq!(ball.angle, after_first);
    }

    #[test]
    fn test_check_hit_skips_when_outside_court() {
        let court = court();
        let paddles = paddles();
        let mut ball = ball_at(632.0, 230.0, 0.0);
        assert!(!check_hit(&mut ball, &court, &paddles));
        assert!(!ball.hit);
    }

    #[test]
    fn test_top_wall_reflects() {
        let court = court();
        let mut ball = ball_at(300.0, -3.0, -0.5);
        ball.last_hit_by = Some(0);

        assert!(check_out(&mut ball, &court).is_none());
        assert!(same_heading(ball.angle, 0.5));
        assert_eq!(ball.last_hit_by, Some(0));
    }

    #[test]
    fn test_bottom_wall_reflects() {
        let court = court();
        let mut ball = ball_at(300.0, 470.0, 0.5);
        assert!(check_out(&mut ball, &court).is_none());
        assert!(same_heading(ball.angle, -0.5));
    }

    #[test]
    fn test_right_exit_reports_and_clears_hitter() {
        let court = court();
        let mut ball = ball_at(635.0, 300.0, 0.1);
        ball.last_hit_by = Some(0);

        let out = check_out(&mut ball, &court).expect("ball is out");
        assert_eq!(out.side, Side::Right);
        assert_eq!(out.last_hit_by, Some(0));
        assert_eq!(ball.last_hit_by, None);
    }

    #[test]
    fn test_left_exit_without_hitter() {
        let court = court();
        let mut ball = ball_at(-8.0, 300.0, PI);
        let out = check_out(&mut ball, &court).expect("ball is out");
        assert_eq!(out.side, Side::Left);
        assert_eq!(out.last_hit_by, None);
    }

    #[test]
    fn test_corner_exit_reflects_and_reports() {
        let court = court();
        // Past both the right and bottom edges
        let mut ball = ball_at(635.0, 475.0, 0.4);
        ball.last_hit_by = Some(0);

        let out = check_out(&mut ball, &court).expect("ball is out");
        assert_eq!(out.side, Side::Right);
        assert!(same_heading(ball.angle, -0.4));
    }

    #[test]
    fn test_court_exit_classification() {
        let court = court();
        let exit = CourtExit::of(&court, &Rect::new(-6.0, -6.0, 12.0, 12.0));
        assert!(exit.top && exit.left);
        assert!(!exit.bottom && !exit.right);

        let inside = CourtExit::of(&court, &Rect::new(10.0, 10.0, 12.0, 12.0));
        assert_eq!(inside, CourtExit::default());
    }

    #[test]
    fn test_clean_flight_matches_closed_form() {
        let court = court();
        let paddles = paddles();
        let angle = 0.47_f32;
        let start = Vec2::new(10.0, 234.0);
        let mut ball = ball_at(start.x, start.y, angle);

        let ticks = 30;
        for _ in 0..ticks {
            assert!(advance(&mut ball, &court, &paddles).is_none());
        }

        let expected = start + Vec2::new(13.0 * angle.cos(), 13.0 * angle.sin()) * ticks as f32;
        assert!((ball.rect.pos - expected).length() < 1e-2);
        assert_eq!(ball.angle, angle);
        assert!(!ball.hit);
    }

    proptest! {
        #[test]
        fn prop_paddle_reflection(theta in -10.0f32..10.0) {
            let court = court();
            let paddles = paddles();
            let mut ball = ball_at(622.0, 230.0, theta);
            check_hit(&mut ball, &court, &paddles);
            prop_assert!(same_heading(ball.angle, PI - theta));
            prop_assert_eq!(ball.speed, 13.0);
        }

        #[test]
        fn prop_wall_reflection(theta in -10.0f32..10.0, x in 20.0f32..600.0) {
            let court = court();
            let mut ball = ball_at(x, -4.0, theta);
            prop_assert!(check_out(&mut ball, &court).is_none());
            prop_assert!(same_heading(ball.angle, -theta));
        }
    }
}
