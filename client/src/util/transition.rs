//! Card fade-out sequencing for the project gallery.
//!
//! When the filter changes while cards are on screen, those cards are marked
//! as fading and the content swap happens after `FADE_OUT_MS`. With nothing on
//! screen the swap is immediate. Each request bumps a generation counter and a
//! deferred swap only lands if no newer request arrived, so the latest filter
//! always wins even when toggles come faster than the fade.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::consts::FADE_OUT_MS;

/// How the caller should carry out a requested swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapPlan {
    /// Content already replaced.
    Immediate,
    /// Call `complete(generation)` after `delay_ms`.
    Deferred { delay_ms: u32, generation: u64 },
}

/// Delay before swapping, given how many cards are currently displayed.
#[must_use]
pub fn fade_delay_ms(displayed: usize) -> u32 {
    if displayed > 0 { FADE_OUT_MS } else { 0 }
}

/// Displayed card indices plus any swap waiting on the fade-out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardTransition {
    shown: Vec<usize>,
    pending: Option<Vec<usize>>,
    generation: u64,
}

impl CardTransition {
    /// Project indices currently rendered as cards.
    #[must_use]
    pub fn shown(&self) -> &[usize] {
        &self.shown
    }

    /// True between a deferred request and its completion.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.pending.is_some()
    }

    /// Ask for `target` to become the displayed set.
    pub fn request(&mut self, target: Vec<usize>) -> SwapPlan {
        self.generation += 1;
        let delay_ms = fade_delay_ms(self.shown.len());
        if delay_ms == 0 {
            self.shown = target;
            self.pending = None;
            return SwapPlan::Immediate;
        }
        self.pending = Some(target);
        SwapPlan::Deferred { delay_ms, generation: self.generation }
    }

    /// Land a deferred swap. Returns `false` for a superseded generation.
    pub fn complete(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(target) => {
                self.shown = target;
                true
            }
            None => false,
        }
    }
}
