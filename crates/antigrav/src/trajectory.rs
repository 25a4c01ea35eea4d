//! Time sampling and forward-Euler integration.
//!
//! # Example
//!
//! ```rust
//! use antigrav::Simulator;
//!
//! let sim = Simulator::new(5.0).unwrap();
//! let trajectory = sim.simulate_trajectory(2.0, 10).unwrap();
//!
//! assert_eq!(trajectory.len(), 10);
//! assert_eq!(trajectory.times()[0], 0.0);
//! assert_eq!(trajectory.times()[9], 2.0);
//! ```

/// Returns `n` evenly spaced samples over `[start, stop]`, both ends included.
///
/// `n == 0` gives an empty vector and `n == 1` gives `[start]`. For `n > 1`
/// the last sample is exactly `stop` regardless of accumulated rounding.
///
/// ```rust
/// use antigrav::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Height of a point mass over time, as produced by
/// [`Simulator::simulate_trajectory`](crate::Simulator::simulate_trajectory).
///
/// `times` and `heights` are parallel and in ascending time order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Trajectory {
    times: Vec<f64>,
    heights: Vec<f64>,
}

impl Trajectory {
    /// Integrates height from rest using forward Euler.
    ///
    /// For each timestamp in order, `force` is sampled, turned into an
    /// acceleration by dividing by `mass`, then
    /// `velocity += a·dt; height += velocity·dt`.
    pub(crate) fn integrate(
        times: Vec<f64>,
        dt: f64,
        mass: f64,
        mut force: impl FnMut(f64) -> f64,
    ) -> Self {
        let mut heights = Vec::with_capacity(times.len());
        let mut velocity = 0.0;
        let mut height = 0.0;

        for &t in &times {
            let acceleration = force(t) / mass;
            velocity += acceleration * dt;
            height += velocity * dt;
            heights.push(height);
        }

        Self { times, heights }
    }

    /// Timestamps in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Cumulative heights in meters.
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the trajectory holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over `(time, height)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.heights.iter().copied())
    }

    /// Height at the last timestamp.
    pub fn final_height(&self) -> Option<f64> {
        self.heights.last().copied()
    }

    /// Highest point reached.
    pub fn max_height(&self) -> Option<f64> {
        self.heights.iter().copied().reduce(f64::max)
    }

    /// Lowest point reached.
    pub fn min_height(&self) -> Option<f64> {
        self.heights.iter().copied().reduce(f64::min)
    }

    /// Splits into `(times, heights)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.heights)
    }
}

/// Force readings sampled at explicit times, as produced by
/// [`Simulator::force_series`](crate::Simulator::force_series).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForceSeries {
    times: Vec<f64>,
    forces: Vec<f64>,
}

impl ForceSeries {
    pub(crate) fn sample(times: Vec<f64>, force: impl Fn(f64) -> f64) -> Self {
        let forces = times.iter().map(|&t| force(t)).collect();
        Self { times, forces }
    }

    /// Sample timestamps in seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Force readings in Newtons.
    pub fn forces(&self) -> &[f64] {
        &self.forces
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns true if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over `(time, force)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.forces.iter().copied())
    }

    /// Largest absolute force in the series (0.0 when empty).
    pub fn peak(&self) -> f64 {
        self.forces.iter().fold(0.0_f64, |acc, f| acc.max(f.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let ts = linspace(0.0, 2.0, 10);
        assert_eq!(ts.len(), 10);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[9], 2.0);
        assert!(ts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_linspace_degenerate() {
        assert!(linspace(0.0, 5.0, 0).is_empty());
        assert_eq!(linspace(0.0, 5.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 5.0, 2), vec![0.0, 5.0]);
        assert_eq!(linspace(0.0, 0.0, 3), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_integrate_constant_force() {
        // a = 2, dt = 0.5: v = 1, 2, 3; h = 0.5, 1.5, 3.0
        let trajectory = Trajectory::integrate(vec![0.0, 0.5, 1.0], 0.5, 1.0, |_| 2.0);
        assert_eq!(trajectory.heights(), &[0.5, 1.5, 3.0]);
        assert_eq!(trajectory.final_height(), Some(3.0));
        assert_eq!(trajectory.max_height(), Some(3.0));
        assert_eq!(trajectory.min_height(), Some(0.5));
    }

    #[test]
    fn test_integrate_divides_by_mass() {
        let light = Trajectory::integrate(vec![0.0, 1.0], 1.0, 1.0, |_| 1.0);
        let heavy = Trajectory::integrate(vec![0.0, 1.0], 1.0, 4.0, |_| 1.0);
        assert_eq!(light.heights(), &[1.0, 3.0]);
        assert_eq!(heavy.heights(), &[0.25, 0.75]);
    }

    #[test]
    fn test_integrate_samples_in_order() {
        let mut seen = Vec::new();
        let _ = Trajectory::integrate(vec![0.0, 0.1, 0.2], 0.1, 1.0, |t| {
            seen.push(t);
            0.0
        });
        assert_eq!(seen, vec![0.0, 0.1, 0.2]);
    }

    #[test]
    fn test_empty_trajectory() {
        let trajectory = Trajectory::integrate(Vec::new(), 0.1, 1.0, |_| 1.0);
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.final_height(), None);
        assert_eq!(trajectory.max_height(), None);
    }

    #[test]
    fn test_into_parts_and_points() {
        let trajectory = Trajectory::integrate(vec![0.0, 1.0], 1.0, 1.0, |_| 1.0);
        let points: Vec<_> = trajectory.points().collect();
        assert_eq!(points, vec![(0.0, 1.0), (1.0, 3.0)]);

        let (times, heights) = trajectory.into_parts();
        assert_eq!(times, vec![0.0, 1.0]);
        assert_eq!(heights, vec![1.0, 3.0]);
    }

    #[test]
    fn test_force_series_peak() {
        let series = ForceSeries::sample(vec![0.0, 1.0, 2.0], |t| 1.0 - t);
        assert_eq!(series.forces(), &[1.0, 0.0, -1.0]);
        assert_eq!(series.peak(), 1.0);
        assert_eq!(series.len(), 3);
    }
}
