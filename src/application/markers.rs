//! Decorative drifting squares for the start screen.
//!
//! Purely cosmetic: nothing here touches the board.

use rand::Rng;

use crate::config::LifeConfig;

/// One marker sliding between its origin and `origin + offset`, back and forth
#[derive(Clone, Debug, PartialEq)]
pub struct DriftMarker {
    pub origin: (f32, f32),
    pub offset: (f32, f32),
    /// Seconds for one leg of the trip
    pub duration: f32,
    elapsed: f32,
}

impl DriftMarker {
    pub fn new(origin: (f32, f32), offset: (f32, f32), duration: f32) -> Self {
        Self {
            origin,
            offset,
            duration,
            elapsed: 0.0,
        }
    }

    /// Random origin inside `bounds`, random offset and duration
    pub fn random(config: &LifeConfig, bounds: (f32, f32), rng: &mut impl Rng) -> Self {
        let drift = config.marker_drift;
        Self::new(
            (
                rng.random_range(0.0..=bounds.0.max(0.0)),
                rng.random_range(0.0..=bounds.1.max(0.0)),
            ),
            (
                rng.random_range(-drift..=drift),
                rng.random_range(-drift..=drift),
            ),
            rng.random_range(config.marker_min_duration..=config.marker_max_duration),
        )
    }

    pub fn update(&mut self, delta_time: f32) {
        // Keep elapsed within one full period so precision doesn't decay
        self.elapsed = (self.elapsed + delta_time.max(0.0)) % (2.0 * self.duration);
    }

    /// Fraction of the offset currently applied, 0 at origin and 1 at the far end
    fn progress(&self) -> f32 {
        let t = self.elapsed / self.duration;
        if t <= 1.0 { t } else { 2.0 - t }
    }

    pub fn position(&self) -> (f32, f32) {
        let p = self.progress();
        (
            self.origin.0 + self.offset.0 * p,
            self.origin.1 + self.offset.1 * p,
        )
    }
}

/// The set of markers shown on the start screen
#[derive(Clone, Debug, Default)]
pub struct MarkerField {
    markers: Vec<DriftMarker>,
}

impl MarkerField {
    /// Spawn `config.marker_count` markers inside `bounds` (width, height)
    pub fn spawn(config: &LifeConfig, bounds: (f32, f32), rng: &mut impl Rng) -> Self {
        let markers = (0..config.marker_count)
            .map(|_| DriftMarker::random(config, bounds, rng))
            .collect();
        Self { markers }
    }

    pub fn update(&mut self, delta_time: f32) {
        self.markers
            .iter_mut()
            .for_each(|marker| marker.update(delta_time));
    }

    pub fn positions(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.markers.iter().map(DriftMarker::position)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn test_spawn_respects_config() {
        let config = LifeConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let field = MarkerField::spawn(&config, (400.0, 800.0), &mut rng);

        assert_eq!(field.len(), 10);
        for marker in &field.markers {
            assert!((0.0..=400.0).contains(&marker.origin.0));
            assert!((0.0..=800.0).contains(&marker.origin.1));
            assert!(marker.offset.0.abs() <= 50.0);
            assert!(marker.offset.1.abs() <= 50.0);
            assert!((2.0..=5.0).contains(&marker.duration));
        }
    }

    #[test]
    fn test_marker_moves_out_and_back() {
        let mut marker = DriftMarker::new((100.0, 100.0), (40.0, -20.0), 2.0);
        assert!(close(marker.position(), (100.0, 100.0)));

        marker.update(1.0);
        assert!(close(marker.position(), (120.0, 90.0)));

        marker.update(1.0);
        assert!(close(marker.position(), (140.0, 80.0)));

        marker.update(1.0);
        assert!(close(marker.position(), (120.0, 90.0)));

        marker.update(1.0);
        assert!(close(marker.position(), (100.0, 100.0)));
    }

    #[test]
    fn test_marker_loops_forever() {
        let mut marker = DriftMarker::new((0.0, 0.0), (10.0, 10.0), 4.0);
        for _ in 0..100 {
            marker.update(8.0);
        }
        assert!(close(marker.position(), (0.0, 0.0)));
    }

    #[test]
    fn test_zero_markers() {
        let config = LifeConfig {
            marker_count: 0,
            ..LifeConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = MarkerField::spawn(&config, (100.0, 100.0), &mut rng);
        field.update(1.0);
        assert!(field.is_empty());
    }
}
