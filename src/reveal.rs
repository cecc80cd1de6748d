//! One-shot scroll reveal.
//!
//! Each marked region starts hidden and becomes active the first time its
//! top edge rises above `viewport_height - offset_px`. Activation is
//! permanent; active regions are not queried again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Active,
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    states: Vec<RevealState>,
    offset_px: f64,
    remaining: usize,
}

impl RevealTracker {
    #[must_use]
    pub fn new(regions: usize, offset_px: f64) -> Self {
        Self {
            states: vec![RevealState::Hidden; regions],
            offset_px,
            remaining: regions,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Regions still waiting to be revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True once every region is active; the host can stop observing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Check hidden regions against the viewport. `top_of(i)` returns the
    /// viewport-relative top edge of region `i` and is only called for
    /// regions that are still hidden. Returns the newly activated indices.
    pub fn update<F>(&mut self, viewport_height: f64, mut top_of: F) -> Vec<usize>
    where
        F: FnMut(usize) -> f64,
    {
        let mut activated = Vec::new();
        for (index, state) in self.states.iter_mut().enumerate() {
            if *state == RevealState::Active {
                continue;
            }
            if crosses_threshold(top_of(index), viewport_height, self.offset_px) {
                *state = RevealState::Active;
                activated.push(index);
            }
        }
        self.remaining -= activated.len();
        activated
    }
}

/// Whether an element whose top edge sits at `top` is far enough into view.
#[must_use]
pub fn crosses_threshold(top: f64, viewport_height: f64, offset_px: f64) -> bool {
    top < viewport_height - offset_px
}

/// Whether the scroll-to-top button should be shown at this scroll offset.
#[must_use]
pub fn scroll_top_visible(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}
