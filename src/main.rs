//! Simple Pong entry point
//!
//! Loads optional settings from the JSON file named by the first argument,
//! then plays in the terminal.

#[cfg(unix)]
mod terminal {
    //! Terminal front-end: the court on a character grid, keys from stdin

    use std::collections::HashMap;
    use std::io::{Stdout, Write, stdin, stdout};
    use std::ops::Range;
    use std::sync::mpsc::{Receiver, TryRecvError, channel};
    use std::thread::spawn;
    use std::time::{Duration, Instant};

    use termion::cursor::{Goto, HideCursor};
    use termion::event::Key as TermKey;
    use termion::input::TermRead;
    use termion::raw::{IntoRawMode, RawTerminal};
    use termion::clear;

    use simple_pong::platform::{InputSource, Sprite, Surface, TextSlot};
    use simple_pong::settings::Rgb;
    use simple_pong::sim::{Event, Key, Rect, Side};

    /// Court pixels per character cell
    const CELL_WIDTH: f32 = 8.0;
    const CELL_HEIGHT: f32 = 16.0;

    /// Terminals report presses only. A key counts as released once no
    /// repeat arrived for this long.
    const HOLD: Duration = Duration::from_millis(250);

    pub struct TerminalSurface {
        out: RawTerminal<HideCursor<Stdout>>,
        cols: usize,
        rows: usize,
        cells: Vec<char>,
        texts: HashMap<TextSlot, String>,
    }

    impl TerminalSurface {
        pub fn new(court_size: (f32, f32)) -> std::io::Result<Self> {
            let out = HideCursor::from(stdout()).into_raw_mode()?;
            let cols = (court_size.0 / CELL_WIDTH).ceil().max(1.0) as usize;
            let rows = (court_size.1 / CELL_HEIGHT).ceil().max(1.0) as usize;
            let mut surface = Self {
                out,
                cols,
                rows,
                cells: vec![' '; cols * rows],
                texts: HashMap::new(),
            };
            write!(surface.out, "{}", clear::All)?;
            Ok(surface)
        }

        /// Cell ranges covered by `rect`, clipped to the grid
        fn span(&self, rect: &Rect) -> (Range<usize>, Range<usize>) {
            let cell = |v: f32, size: f32, max: usize| ((v / size).max(0.0) as usize).min(max);
            let cols = cell(rect.left(), CELL_WIDTH, self.cols)
                ..cell(rect.right().ceil() + CELL_WIDTH - 1.0, CELL_WIDTH, self.cols);
            let rows = cell(rect.top(), CELL_HEIGHT, self.rows)
                ..cell(rect.bottom().ceil() + CELL_HEIGHT - 1.0, CELL_HEIGHT, self.rows);
            (cols, rows)
        }

        fn fill(&mut self, rect: &Rect, glyph: char) {
            let (cols, rows) = self.span(rect);
            for row in rows {
                for col in cols.clone() {
                    self.cells[row * self.cols + col] = glyph;
                }
            }
        }

        /// Text rows: prompt on top, scores on the bottom line
        fn text_origin(&self, slot: TextSlot, len: usize) -> (usize, usize) {
            match slot {
                TextSlot::Prompt => (self.cols.saturating_sub(len) / 2, 1),
                TextSlot::Score(0) => (1, self.rows.saturating_sub(1)),
                TextSlot::Score(_) => (self.cols.saturating_sub(len + 1), self.rows.saturating_sub(1)),
            }
        }

        fn write_frame(&mut self) -> std::io::Result<()> {
            let mut lines: Vec<Vec<char>> = self.cells.chunks(self.cols).map(<[char]>::to_vec).collect();
            for (slot, text) in &self.texts {
                let (x, y) = self.text_origin(*slot, text.chars().count());
                if let Some(line) = lines.get_mut(y) {
                    for (offset, c) in text.chars().enumerate() {
                        if let Some(cell) = line.get_mut(x + offset) {
                            *cell = c;
                        }
                    }
                }
            }

            for (y, line) in lines.iter().enumerate() {
                let line: String = line.iter().collect();
                write!(self.out, "{}{}", Goto(1, y as u16 + 1), line)?;
            }
            self.out.flush()
        }
    }

    impl Surface for TerminalSurface {
        fn clear_rect(&mut self, rect: &Rect, _color: Rgb) {
            self.fill(rect, ' ');
        }

        fn draw_sprite(&mut self, sprite: Sprite, rect: &Rect) {
            let glyph = match sprite {
                Sprite::Ball => 'O',
                Sprite::Paddle(Side::Left) => ']',
                Sprite::Paddle(Side::Right) => '[',
            };
            self.fill(rect, glyph);
        }

        fn draw_text(&mut self, slot: TextSlot, text: &str) {
            self.texts.insert(slot, text.to_string());
        }

        fn clear_text(&mut self, slot: TextSlot, _color: Rgb) {
            self.texts.remove(&slot);
        }

        fn present(&mut self) {
            if let Err(err) = self.write_frame() {
                log::warn!("failed to draw frame: {}", err);
            }
        }
    }

    impl Drop for TerminalSurface {
        fn drop(&mut self) {
            let _ = write!(self.out, "{}{}", clear::All, Goto(1, 1));
            let _ = self.out.flush();
        }
    }

    /// Key presses from a stdin reader thread, with synthesized releases
    pub struct TerminalInput {
        keys: Receiver<TermKey>,
        held: HashMap<Key, Instant>,
    }

    impl TerminalInput {
        pub fn spawn() -> Self {
            let (tx, keys) = channel();
            spawn(move || {
                for key in stdin().keys() {
                    let Ok(key) = key else { break };
                    if tx.send(key).is_err() {
                        break;
                    }
                }
            });
            Self {
                keys,
                held: HashMap::new(),
            }
        }

        fn translate(key: TermKey) -> Option<Key> {
            match key {
                TermKey::Char(' ') => Some(Key::Space),
                TermKey::Up => Some(Key::Up),
                TermKey::Down => Some(Key::Down),
                TermKey::Char(c) => Some(Key::Char(c)),
                _ => None,
            }
        }
    }

    impl InputSource for TerminalInput {
        fn poll(&mut self) -> Vec<Event> {
            let mut events = Vec::new();
            let now = Instant::now();

            loop {
                let key = match self.keys.try_recv() {
                    Ok(key) => key,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        events.push(Event::Quit);
                        break;
                    }
                };
                match key {
                    TermKey::Ctrl('c') | TermKey::Esc => events.push(Event::Quit),
                    other => {
                        if let Some(key) = Self::translate(other)
                            && self.held.insert(key, now).is_none()
                        {
                            events.push(Event::KeyDown(key));
                        }
                    }
                }
            }

            let released: Vec<Key> = self
                .held
                .iter()
                .filter(|(_, seen)| now.duration_since(**seen) >= HOLD)
                .map(|(key, _)| *key)
                .collect();
            for key in released {
                self.held.remove(&key);
                events.push(Event::KeyUp(key));
            }

            events
        }
    }
}

#[cfg(unix)]
fn main() {
    use simple_pong::platform::FrameClock;
    use simple_pong::{Game, Outcome, Settings};

    env_logger::init();
    log::info!("Simple Pong starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&path),
        None => Ok(Settings::default()),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("simple-pong: {err}");
            std::process::exit(2);
        }
    };

    let surface = match terminal::TerminalSurface::new(settings.court_size) {
        Ok(surface) => surface,
        Err(err) => {
            eprintln!("simple-pong: cannot set up terminal: {err}");
            std::process::exit(2);
        }
    };
    let input = terminal::TerminalInput::spawn();

    let result = Game::new(settings, surface, input, FrameClock::new()).and_then(|mut game| {
        let outcome = game.run();
        log::info!("played {} frames", game.clock().frames());
        outcome
    });

    match result {
        Ok(Outcome::Quit) | Ok(Outcome::Finished) => {}
        Err(err) => {
            eprintln!("simple-pong: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(unix))]
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::error!("the terminal front-end needs a unix terminal");
}
