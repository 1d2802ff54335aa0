//! Carousel autoplay.
//!
//! Wraps the core [`Carousel`] with a recurring timer task. The timer and the
//! manual controls go through the same short critical section, and the timer
//! is cancelled whenever the slide list empties, on [`Autoplay::stop`], and on
//! drop. A cancelled timer never touches the carousel again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use remakeup_core::carousel::{Carousel, CarouselError, CarouselState, Slide};
use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// What a client needs to render the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSnapshot {
    #[serde(flatten)]
    pub state: CarouselState,
    pub slide: Option<Slide>,
}

/// A carousel that advances on its own.
pub struct Autoplay {
    carousel: Arc<Mutex<Carousel>>,
    interval: Duration,
    timer: Mutex<Option<Timer>>,
}

struct Timer {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Autoplay {
    /// Create an idle carousel that will advance every `interval` once loaded.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            carousel: Arc::new(Mutex::new(Carousel::default())),
            interval,
            timer: Mutex::new(None),
        }
    }

    /// Replace the slides.
    ///
    /// Resets to the first slide. A non-empty list restarts the timer so the
    /// first slide gets a full interval; an empty list stops it.
    ///
    /// Must be called from within a tokio runtime when `slides` is non-empty.
    pub fn load(&self, slides: Vec<Slide>) {
        let rotating = !slides.is_empty();
        let total = slides.len();

        let mut timer = lock(&self.timer);
        if let Some(previous) = timer.take() {
            previous.cancel();
        }
        lock(&self.carousel).load(slides);

        if rotating {
            *timer = Some(self.spawn_timer());
            tracing::debug!(total, interval = ?self.interval, "Carousel rotating");
        } else {
            tracing::debug!("Carousel idle");
        }
    }

    /// Load `slides` unless they match what is already showing.
    ///
    /// Returns whether the carousel was reloaded. An unchanged list keeps the
    /// current slide and the running timer.
    pub fn refresh(&self, slides: Vec<Slide>) -> bool {
        if lock(&self.carousel).slides() == slides.as_slice() {
            tracing::debug!("Carousel slides unchanged");
            return false;
        }
        self.load(slides);
        true
    }

    /// Stop the timer. The current slide stays visible.
    pub fn stop(&self) {
        if let Some(timer) = lock(&self.timer).take() {
            timer.cancel();
            tracing::debug!("Carousel autoplay stopped");
        }
    }

    /// Whether the timer task is live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        lock(&self.timer)
            .as_ref()
            .is_some_and(|t| !t.handle.is_finished())
    }

    pub fn next(&self) {
        lock(&self.carousel).next();
    }

    pub fn prev(&self) {
        lock(&self.carousel).prev();
    }

    /// Jump to a slide.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::IndexOutOfRange`] and leaves the carousel
    /// unchanged if `index` is not a valid slide.
    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        lock(&self.carousel).go_to(index)
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        lock(&self.carousel).state()
    }

    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        let carousel = lock(&self.carousel);
        CarouselSnapshot {
            state: carousel.state(),
            slide: carousel.current_slide().cloned(),
        }
    }

    fn spawn_timer(&self) -> Timer {
        let token = CancellationToken::new();
        let carousel = Arc::clone(&self.carousel);
        let period = self.interval;
        let cancelled = token.clone();
        let first_tick = tokio::time::Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval_at(first_tick, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    () = cancelled.cancelled() => break,
                    _ = ticks.tick() => {
                        // Checked under the lock so a cancel that raced the
                        // tick cannot be followed by a mutation.
                        let mut guard = lock(&carousel);
                        if cancelled.is_cancelled() {
                            break;
                        }
                        guard.next();
                    }
                }
            }
        });

        Timer { token, handle }
    }
}

impl Timer {
    fn cancel(self) {
        self.token.cancel();
        self.handle.abort();
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Autoplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoplay")
            .field("state", &self.state())
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

/// Lock, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
