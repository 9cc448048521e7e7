//! Platform abstraction layer
//!
//! The collaborators the game loop talks to:
//! - `Surface`: where sprites and text end up
//! - `InputSource`: keyboard and quit events, one batch per frame
//! - `Clock`: frame pacing

pub mod clock;
pub mod input;
pub mod surface;

pub use clock::{Clock, FrameClock, NullClock};
pub use input::{InputSource, ScriptedInput};
pub use surface::{NullSurface, Sprite, Surface, TextSlot};
