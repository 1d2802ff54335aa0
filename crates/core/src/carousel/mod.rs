//! Promotional carousel engine.
//!
//! Owns the visible slide index over a hero + featured-product sequence.
//! Navigation wraps around at both ends. The engine has no clock; the
//! storefront's autoplay task calls [`Carousel::next`] on each tick through
//! the same path as manual navigation.
//!
//! ```text
//!            load(non-empty)
//!   Idle ───────────────────────► Rotating ──┐ next / prev / go_to / tick
//!    ▲                               │  ▲    │
//!    └────────── load(empty) ────────┘  └────┘
//! ```

mod slide;

pub use slide::{HeroSlide, Slide};

use serde::Serialize;
use thiserror::Error;

/// Errors returned by carousel navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// The requested slide does not exist. State was left unchanged.
    #[error("slide {index} out of range ({total} slides)")]
    IndexOutOfRange { index: usize, total: usize },
}

/// Observable carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CarouselState {
    /// No slides; nothing to show and nothing to rotate.
    Idle,
    /// `current < total` always holds.
    #[serde(rename_all = "camelCase")]
    Rotating { current: usize, total: usize },
}

/// Rotation index over a slide sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    slides: Vec<Slide>,
    current: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(slides: Vec<Slide>) -> Self {
        Self { slides, current: 0 }
    }

    /// Replace the slides and return to the first one.
    pub fn load(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.current = 0;
    }

    /// Drop all slides, entering the idle state.
    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        if self.slides.is_empty() {
            CarouselState::Idle
        } else {
            CarouselState::Rotating {
                current: self.current,
                total: self.slides.len(),
            }
        }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The visible slide, or `None` when idle.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        let total = self.slides.len();
        if total > 0 {
            self.current = (self.current + 1) % total;
        }
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        let total = self.slides.len();
        if total > 0 {
            self.current = (self.current + total - 1) % total;
        }
    }

    /// Jump to a slide.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] if `index` is not a valid
    /// slide, including every index while idle. The current slide does not
    /// change.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let total = self.slides.len();
        if index >= total {
            return Err(CarouselError::IndexOutOfRange { index, total });
        }
        self.current = index;
        Ok(())
    }
}
