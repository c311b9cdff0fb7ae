//! Hero carousel: slide rotation state and its auto-advance timer.
//!
//! The timer never touches rotation state directly. It bumps a pending-tick
//! counter shared with the [`Carousel`], and the carousel takes and applies
//! those ticks when the shell pumps it, on the same event loop as manual
//! navigation. Manual navigation pumps first, so a tick that
//! fired before a click never lands after it. Dropping the carousel drops its
//! [`AutoRotation`], which aborts the timer task.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::error::StorefrontError;

/// Rotation period used when nothing else is configured.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_millis(5000);

/// Current slide index over a fixed number of slides.
///
/// The index is always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRotator {
    index: usize,
    len: usize,
}

impl SlideRotator {
    /// Start at slide 0.
    pub fn new(len: usize) -> Result<Self, StorefrontError> {
        if len == 0 {
            return Err(StorefrontError::EmptyCarousel);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Automatic advance; same transition as [`SlideRotator::next`].
    pub fn tick(&mut self) -> usize {
        self.next()
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump straight to a slide.
    pub fn go_to(&mut self, index: usize) -> Result<usize, StorefrontError> {
        if index >= self.len {
            return Err(StorefrontError::InvalidSlide {
                index,
                count: self.len,
            });
        }
        self.index = index;
        Ok(self.index)
    }
}

/// Handle to a running auto-rotation timer. Dropping it stops the timer.
#[derive(Debug)]
pub struct AutoRotation {
    task: JoinHandle<()>,
    interval: Duration,
}

impl AutoRotation {
    /// Add one to `pending` every `interval`, starting one interval from now.
    /// The task ends once nobody else holds the counter.
    pub fn start(runtime: &Handle, interval: Duration, pending: Arc<AtomicU64>) -> Self {
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if Arc::strong_count(&pending) == 1 {
                    break;
                }
                pending.fetch_add(1, Ordering::SeqCst);
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "carousel timer started");
        Self { task, interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for AutoRotation {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("carousel timer cancelled");
    }
}

/// A rotator plus, optionally, the timer that advances it.
#[derive(Debug)]
pub struct Carousel {
    rotator: SlideRotator,
    /// Ticks fired by the timer and not yet applied.
    pending: Option<Arc<AtomicU64>>,
    timer: Option<AutoRotation>,
}

impl Carousel {
    /// A carousel that only moves on manual navigation.
    pub fn manual(len: usize) -> Result<Self, StorefrontError> {
        Ok(Self {
            rotator: SlideRotator::new(len)?,
            pending: None,
            timer: None,
        })
    }

    /// A carousel that also advances every `interval` on `runtime`.
    pub fn auto(len: usize, runtime: &Handle, interval: Duration) -> Result<Self, StorefrontError> {
        let rotator = SlideRotator::new(len)?;
        let pending = Arc::new(AtomicU64::new(0));
        Ok(Self {
            rotator,
            timer: Some(AutoRotation::start(runtime, interval, Arc::clone(&pending))),
            pending: Some(pending),
        })
    }

    pub fn index(&self) -> usize {
        self.rotator.index()
    }

    pub fn len(&self) -> usize {
        self.rotator.len()
    }

    pub fn is_auto(&self) -> bool {
        self.timer.is_some()
    }

    /// Weak handle to the pending-tick counter. It stops upgrading once both
    /// the carousel and its timer task are gone.
    pub fn tick_counter(&self) -> Option<Weak<AtomicU64>> {
        self.pending.as_ref().map(Arc::downgrade)
    }

    pub fn next(&mut self) -> usize {
        self.pump();
        self.rotator.next()
    }

    pub fn prev(&mut self) -> usize {
        self.pump();
        self.rotator.prev()
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize, StorefrontError> {
        self.pump();
        self.rotator.go_to(index)
    }

    /// Apply every tick the timer has fired since the last pump. Returns how many.
    pub fn pump(&mut self) -> usize {
        let Some(counter) = self.pending.as_ref() else {
            return 0;
        };

        let pending = counter.swap(0, Ordering::SeqCst);

        // A full cycle of ticks is the identity.
        let steps = pending % self.rotator.len() as u64;
        for _ in 0..steps {
            self.rotator.tick();
        }
        usize::try_from(pending).unwrap_or(usize::MAX)
    }

    /// Stop auto-rotation; manual navigation keeps working.
    pub fn stop(&mut self) {
        self.timer = None;
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotator_starts_at_zero() {
        let rotator = SlideRotator::new(3).unwrap();
        assert_eq!(rotator.index(), 0);
    }

    #[test]
    fn test_empty_rotator_rejected() {
        assert!(matches!(SlideRotator::new(0), Err(StorefrontError::EmptyCarousel)));
    }

    #[test]
    fn test_full_cycle_of_ticks_is_identity() {
        for len in 1..=6 {
            for start in 0..len {
                let mut rotator = SlideRotator::new(len).unwrap();
                rotator.go_to(start).unwrap();
                for _ in 0..len {
                    rotator.tick();
                }
                assert_eq!(rotator.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn test_prev_and_next_cancel_out() {
        for len in 1..=5 {
            for start in 0..len {
                let mut rotator = SlideRotator::new(len).unwrap();
                rotator.go_to(start).unwrap();

                rotator.prev();
                rotator.next();
                assert_eq!(rotator.index(), start);

                rotator.next();
                rotator.prev();
                assert_eq!(rotator.index(), start);
            }
        }
    }

    #[test]
    fn test_wrapping() {
        let mut rotator = SlideRotator::new(3).unwrap();
        assert_eq!(rotator.prev(), 2);
        assert_eq!(rotator.next(), 0);
        assert_eq!(rotator.next(), 1);
        assert_eq!(rotator.next(), 2);
        assert_eq!(rotator.next(), 0);
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut rotator = SlideRotator::new(3).unwrap();
        rotator.go_to(1).unwrap();
        assert!(matches!(
            rotator.go_to(3),
            Err(StorefrontError::InvalidSlide { index: 3, count: 3 })
        ));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn test_manual_carousel_ignores_pump() {
        let mut carousel = Carousel::manual(3).unwrap();
        assert!(!carousel.is_auto());
        assert_eq!(carousel.pump(), 0);
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_rotation_ticks_on_interval() {
        let mut carousel =
            Carousel::auto(3, &Handle::current(), DEFAULT_ROTATION_INTERVAL).unwrap();

        time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(carousel.pump(), 0);
        assert_eq!(carousel.index(), 0);

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(carousel.pump(), 1);
        assert_eq!(carousel.index(), 1);

        time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(carousel.pump(), 2);
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_navigation_interleaves_with_ticks() {
        let mut carousel =
            Carousel::auto(3, &Handle::current(), Duration::from_millis(1000)).unwrap();

        carousel.next();
        time::sleep(Duration::from_millis(1001)).await;
        carousel.pump();
        assert_eq!(carousel.index(), 2);

        carousel.prev();
        assert_eq!(carousel.index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_timer() {
        let pending = Arc::new(AtomicU64::new(0));
        let rotation = AutoRotation::start(
            &Handle::current(),
            Duration::from_millis(100),
            Arc::clone(&pending),
        );
        assert!(rotation.is_running());

        drop(rotation);
        time::sleep(Duration::from_millis(1000)).await;

        assert_eq!(pending.load(Ordering::SeqCst), 0);
        assert_eq!(Arc::strong_count(&pending), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_applies_earlier_ticks_first() {
        let mut carousel =
            Carousel::auto(3, &Handle::current(), DEFAULT_ROTATION_INTERVAL).unwrap();

        time::sleep(Duration::from_millis(5001)).await;
        assert_eq!(carousel.go_to(0).unwrap(), 0);
        assert_eq!(carousel.pump(), 0);
        assert_eq!(carousel.index(), 0);

        time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.pump(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unpumped_ticks_coalesce() {
        let mut carousel =
            Carousel::auto(3, &Handle::current(), Duration::from_millis(10)).unwrap();
        let counter = carousel.tick_counter().unwrap().upgrade().unwrap();

        time::sleep(Duration::from_millis(10_005)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 1000);
        assert_eq!(carousel.pump(), 1000);
        assert_eq!(carousel.index(), 1000 % 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_keeps_index() {
        let mut carousel =
            Carousel::auto(3, &Handle::current(), Duration::from_millis(100)).unwrap();
        time::sleep(Duration::from_millis(101)).await;
        carousel.pump();
        carousel.stop();

        time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(carousel.pump(), 0);
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.is_auto());
    }
}
