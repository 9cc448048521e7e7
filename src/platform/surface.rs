//! Render target contract
//!
//! The game never owns pixels: it asks the surface to erase rectangles,
//! draw sprites and place text in a few fixed slots.

use crate::settings::Rgb;
use crate::sim::{PlayerId, Rect, Side};

/// Things the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ball,
    Paddle(Side),
}

/// Screen locations for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    /// Centered at the top of the court
    Prompt,
    /// Bottom corner on the player's side
    Score(PlayerId),
}

pub trait Surface {
    /// Fill `rect` with the background color
    fn clear_rect(&mut self, rect: &Rect, color: Rgb);

    fn draw_sprite(&mut self, sprite: Sprite, rect: &Rect);

    fn draw_text(&mut self, slot: TextSlot, text: &str);

    fn clear_text(&mut self, slot: TextSlot, color: Rgb);

    /// Show the finished frame
    fn present(&mut self) {}
}

/// Surface that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _rect: &Rect, _color: Rgb) {}

    fn draw_sprite(&mut self, _sprite: Sprite, _rect: &Rect) {}

    fn draw_text(&mut self, _slot: TextSlot, _text: &str) {}

    fn clear_text(&mut self, _slot: TextSlot, _color: Rgb) {}
}
