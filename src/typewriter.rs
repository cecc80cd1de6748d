//! Typewriter text loop.
//!
//! DESIGN
//! ======
//! Two phases over a fixed, cyclic phrase list:
//!
//! - `Typing`: each tick reveals one more character of the current phrase
//!   and waits `typing_ms`. Once the phrase is complete the next tick waits
//!   `hold_ms` and switches to `Erasing`.
//! - `Erasing`: each tick removes one character and waits `erase_ms`. Once
//!   the text is empty the next tick advances to `(index + 1) % len`, waits
//!   `pause_ms`, and switches back to `Typing`.
//!
//! After every tick the displayed text is exactly the first `offset`
//! characters of the current phrase. Offsets count `char`s, not bytes.
//!
//! [`TypewriterCore`] is the pure state machine. [`Typewriter`] binds it to a
//! [`TextSurface`] and a [`Scheduler`]; each tick schedules the next one only
//! after its own mutation, so ticks never overlap.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::TypewriterConfig;
use crate::error::ConfigError;
use crate::host::{Scheduler, TextSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Erasing,
}

/// Animation progress: which phrase, and how many of its characters are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub phrase: usize,
    pub offset: usize,
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Whether the displayed text changed on this tick.
    pub changed: bool,
    /// Delay before the next tick.
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypewriterCore {
    phrases: Vec<String>,
    /// Character count of each phrase.
    lengths: Vec<usize>,
    typing_ms: u32,
    erase_ms: u32,
    hold_ms: u32,
    pause_ms: u32,
    cursor: Cursor,
    phase: Phase,
}

impl TypewriterCore {
    pub fn new(config: &TypewriterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            lengths: config.phrases.iter().map(|p| p.chars().count()).collect(),
            phrases: config.phrases.clone(),
            typing_ms: config.typing_ms,
            erase_ms: config.erase_ms,
            hold_ms: config.hold_ms,
            pause_ms: config.pause_ms,
            cursor: Cursor::default(),
            phase: Phase::Typing,
        })
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// The phrase currently being typed or erased.
    #[must_use]
    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.cursor.phrase]
    }

    /// Text that should be on screen: the first `offset` characters of the
    /// current phrase.
    #[must_use]
    pub fn display(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.cursor.offset)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Advance the state machine by one tick.
    pub fn tick(&mut self) -> Step {
        let len = self.lengths[self.cursor.phrase];
        match self.phase {
            Phase::Typing if self.cursor.offset < len => {
                self.cursor.offset += 1;
                Step { changed: true, delay_ms: self.typing_ms }
            }
            Phase::Typing => {
                self.phase = Phase::Erasing;
                Step { changed: false, delay_ms: self.hold_ms }
            }
            Phase::Erasing if self.cursor.offset > 0 => {
                self.cursor.offset -= 1;
                Step { changed: true, delay_ms: self.erase_ms }
            }
            Phase::Erasing => {
                self.cursor.phrase = (self.cursor.phrase + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                Step { changed: false, delay_ms: self.pause_ms }
            }
        }
    }
}

/// Timer-driven typewriter bound to an output surface.
///
/// Built from a configuration that may be invalid; in that case the driver
/// is idle and [`Typewriter::start`] does nothing.
pub struct Typewriter {
    core: Option<TypewriterCore>,
    surface: Rc<dyn TextSurface>,
    scheduler: Rc<dyn Scheduler>,
}

impl Typewriter {
    #[must_use]
    pub fn new(config: &TypewriterConfig, surface: Rc<dyn TextSurface>, scheduler: Rc<dyn Scheduler>) -> Self {
        let core = match TypewriterCore::new(config) {
            Ok(core) => Some(core),
            Err(e) => {
                log::warn!("typewriter disabled: {e}");
                None
            }
        };
        Self { core, surface, scheduler }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.core.is_none()
    }

    /// Run the first tick now and keep ticking on the scheduler for as long
    /// as the host lives. Returns `false` when the driver is idle.
    pub fn start(self) -> bool {
        let Some(core) = self.core else {
            return false;
        };
        log::debug!("typewriter started with {} phrases", core.phrase_count());
        run_tick(Rc::new(RefCell::new(core)), self.surface, self.scheduler);
        true
    }
}

fn run_tick(core: Rc<RefCell<TypewriterCore>>, surface: Rc<dyn TextSurface>, scheduler: Rc<dyn Scheduler>) {
    let delay_ms = {
        let mut state = core.borrow_mut();
        let step = state.tick();
        if step.changed {
            surface.set_text(state.display());
        }
        step.delay_ms
    };
    let next_scheduler = Rc::clone(&scheduler);
    scheduler.schedule(delay_ms, Box::new(move || run_tick(core, surface, next_scheduler)));
}
