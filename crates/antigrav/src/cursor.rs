//! Explicit time cursor for step-by-step force readings.

/// Amount the cursor moves forward on each [`TimeCursor::advance`].
pub const TIME_STEP: f64 = 0.1;

/// A point in simulated time that moves forward by [`TIME_STEP`] each time
/// it is read through [`advance`](Self::advance).
///
/// The cursor is a plain `Copy` value. Forking one and advancing both copies
/// yields identical sequences, which makes cursor-driven readings
/// reproducible.
///
/// # Example
///
/// ```rust
/// use antigrav::TimeCursor;
///
/// let mut cursor = TimeCursor::new();
/// assert_eq!(cursor.advance(), 0.0);
/// assert_eq!(cursor.advance(), 0.1);
/// assert!((cursor.current() - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeCursor {
    time: f64,
}

impl TimeCursor {
    /// Creates a cursor at `t = 0`.
    #[inline]
    pub const fn new() -> Self {
        Self { time: 0.0 }
    }

    /// Creates a cursor at an arbitrary starting time.
    #[inline]
    pub const fn starting_at(time: f64) -> Self {
        Self { time }
    }

    /// Current time, without moving the cursor.
    #[inline]
    pub const fn current(&self) -> f64 {
        self.time
    }

    /// Returns the current time and then moves forward by [`TIME_STEP`].
    #[inline]
    pub fn advance(&mut self) -> f64 {
        let now = self.time;
        self.time += TIME_STEP;
        now
    }

    /// Moves the cursor back to `t = 0`.
    #[inline]
    pub fn reset(&mut self) {
        self.time = 0.0;
    }
}
