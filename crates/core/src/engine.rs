//! The dual-rate construction animation engine.
//!
//! One engine instance backs one displayed comparison. Each display frame
//! the host calls [`ConstructionEngine::step`]; the engine converts elapsed
//! wall-clock time into completed floors for both tracks and reports via
//! [`ConstructionEngine::is_animating`] whether another frame is wanted.

use std::time::{Duration, Instant};

use crate::catalog::{BuildingId, BuildingSpec};

/// Milliseconds per floor on the fast (Flashblocks) track.
pub const FAST_TRACK_MS: f64 = 200.0;
/// Milliseconds per floor on the slow (Blocks) track. Exactly 10× the fast
/// rate — the whole demo hinges on this ratio.
pub const SLOW_TRACK_MS: f64 = 2000.0;

/// One of the two racing construction tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Fast,
    Slow,
}

impl Track {
    /// Milliseconds it takes this track to complete one floor.
    pub fn ms_per_floor(self) -> f64 {
        match self {
            Self::Fast => FAST_TRACK_MS,
            Self::Slow => SLOW_TRACK_MS,
        }
    }
}

/// Animation state for one side-by-side comparison.
///
/// Single-threaded by construction: the engine is only touched from the
/// frame loop and from selection handling, both on the host's one thread.
/// Call [`dispose`](Self::dispose) on teardown — a loop that keeps stepping
/// a stale engine would double-advance the counters.
#[derive(Debug)]
pub struct ConstructionEngine {
    building: BuildingId,
    fast_floors: u32,
    slow_floors: u32,
    /// Start of the current run; `None` before the first `start`.
    started: Option<Instant>,
    /// Whether another frame should be scheduled. Cleared once both tracks
    /// saturate, and by `dispose`.
    scheduled: bool,
}

impl ConstructionEngine {
    /// Create an engine for `building` and immediately start its first run.
    pub fn new(building: BuildingId) -> Self {
        let mut engine = Self {
            building,
            fast_floors: 0,
            slow_floors: 0,
            started: None,
            scheduled: false,
        };
        engine.start();
        engine
    }

    pub fn building(&self) -> BuildingId {
        self.building
    }

    pub fn spec(&self) -> &'static BuildingSpec {
        self.building.spec()
    }

    /// Switch to another building and restart the race from floor zero.
    /// Selecting the building that is already shown restarts it.
    pub fn select(&mut self, building: BuildingId) {
        self.building = building;
        self.start();
    }

    /// Begin a new run: reset both tracks, record the start instant, and
    /// take the first step so the host sees frame scheduling begin.
    pub fn start(&mut self) {
        self.reset();
        let now = Instant::now();
        self.started = Some(now);
        self.step_at(now);
    }

    /// Cancel any pending frame and zero both counters without starting a
    /// new run.
    pub fn reset(&mut self) {
        self.fast_floors = 0;
        self.slow_floors = 0;
        self.started = None;
        self.scheduled = false;
    }

    /// Tear the engine down. After this no further frames are wanted.
    pub fn dispose(&mut self) {
        self.scheduled = false;
        self.started = None;
    }

    /// Advance both tracks to the floor counts implied by the current time.
    pub fn step(&mut self) {
        self.step_at(Instant::now());
    }

    /// Advance both tracks as of `now`.
    ///
    /// Both counters derive from the same elapsed sample, so the tracks are
    /// never compared against skewed time bases. Counters only move forward
    /// within a run: `now` earlier than the start instant counts as zero
    /// elapsed.
    pub fn step_at(&mut self, now: Instant) {
        let elapsed = match self.started {
            Some(started) => now.saturating_duration_since(started),
            None => Duration::ZERO,
        };
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

        let total = self.spec().floors;
        self.fast_floors = floors_at(elapsed_ms, FAST_TRACK_MS, total);
        self.slow_floors = floors_at(elapsed_ms, SLOW_TRACK_MS, total);

        // Keep scheduling while either track still has floors to build.
        self.scheduled = self.fast_floors < total || self.slow_floors < total;
    }

    /// Whether the host should schedule another frame.
    pub fn is_animating(&self) -> bool {
        self.scheduled
    }

    /// Completed floors on the given track.
    pub fn floors(&self, track: Track) -> u32 {
        match track {
            Track::Fast => self.fast_floors,
            Track::Slow => self.slow_floors,
        }
    }

    /// Completion of the given track as a percentage in `[0, 100]`.
    pub fn progress_percent(&self, track: Track) -> f64 {
        f64::from(self.floors(track)) * 100.0 / f64::from(self.spec().floors)
    }

    /// The track's timer readout in seconds.
    ///
    /// Derived from the floor count, not the wall clock, so the displayed
    /// timer advances in floor-sized steps in sync with the illustration.
    pub fn elapsed_seconds(&self, track: Track) -> f64 {
        f64::from(self.floors(track)) * track.ms_per_floor() / 1000.0
    }

    /// The timer readout formatted to one decimal, e.g. `"6.0s"`.
    pub fn elapsed_label(&self, track: Track) -> String {
        format!("{:.1}s", self.elapsed_seconds(track))
    }
}

/// Floors completed after `elapsed_ms` at `ms_per_floor`, capped at `total`.
fn floors_at(elapsed_ms: f64, ms_per_floor: f64, total: u32) -> u32 {
    let full = (elapsed_ms / ms_per_floor).floor();
    if full >= f64::from(total) {
        total
    } else {
        full as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn engine_at(building: BuildingId, elapsed_ms: u64) -> ConstructionEngine {
        let mut engine = ConstructionEngine::new(building);
        let started = engine.started.unwrap();
        engine.step_at(started + Duration::from_millis(elapsed_ms));
        engine
    }

    #[test]
    fn floor_formula_matches_both_tracks() {
        for t in [0_u64, 1, 199, 200, 201, 1999, 2000, 5999, 6000, 59_999] {
            let engine = engine_at(BuildingId::EiffelTower, t);
            let total = 30;
            assert_eq!(
                engine.floors(Track::Fast),
                total.min((t / 200) as u32),
                "fast track at t={t}ms"
            );
            assert_eq!(
                engine.floors(Track::Slow),
                total.min((t / 2000) as u32),
                "slow track at t={t}ms"
            );
        }
    }

    #[test]
    fn counters_are_monotonic_within_a_run() {
        let mut engine = ConstructionEngine::new(BuildingId::EmpireState);
        let started = engine.started.unwrap();
        let mut prev = (0, 0);
        for t in (0..80_000).step_by(137) {
            engine.step_at(started + Duration::from_millis(t));
            let cur = (engine.floors(Track::Fast), engine.floors(Track::Slow));
            assert!(cur.0 >= prev.0 && cur.1 >= prev.1, "regressed at t={t}ms");
            assert!(cur.0 >= cur.1, "slow track overtook fast at t={t}ms");
            prev = cur;
        }
    }

    #[test]
    fn run_terminates_once_slow_track_saturates() {
        let total = BuildingId::BurjKhalifa.spec().floors;
        let engine = engine_at(BuildingId::BurjKhalifa, 2000 * u64::from(total));
        assert_eq!(engine.floors(Track::Fast), total);
        assert_eq!(engine.floors(Track::Slow), total);
        assert!(!engine.is_animating());
    }

    #[test]
    fn still_animating_after_fast_track_finishes() {
        // Fast track saturates at 8s for the Burj; slow needs 80s.
        let engine = engine_at(BuildingId::BurjKhalifa, 10_000);
        assert_eq!(engine.floors(Track::Fast), 40);
        assert_eq!(engine.floors(Track::Slow), 5);
        assert!(engine.is_animating());
    }

    #[test]
    fn select_resets_counters_and_restarts() {
        let mut engine = engine_at(BuildingId::EiffelTower, 4000);
        assert!(engine.floors(Track::Fast) > 0);

        engine.select(BuildingId::BurjKhalifa);
        assert_eq!(engine.building(), BuildingId::BurjKhalifa);
        assert_eq!(engine.floors(Track::Fast), 0);
        assert_eq!(engine.floors(Track::Slow), 0);
        assert!(engine.is_animating());
    }

    #[test]
    fn dispose_stops_scheduling() {
        let mut engine = ConstructionEngine::new(BuildingId::EiffelTower);
        assert!(engine.is_animating());
        engine.dispose();
        assert!(!engine.is_animating());
    }

    #[test]
    fn progress_percent_spans_zero_to_hundred() {
        let engine = engine_at(BuildingId::EiffelTower, 3000);
        assert_eq!(engine.progress_percent(Track::Fast), 50.0); // 15 of 30
        let slow = engine.progress_percent(Track::Slow); // 1 of 30
        assert!((slow - 100.0 / 30.0).abs() < 1e-9);

        let done = engine_at(BuildingId::EiffelTower, 60_000);
        assert_eq!(done.progress_percent(Track::Fast), 100.0);
        assert_eq!(done.progress_percent(Track::Slow), 100.0);
    }

    #[test]
    fn timer_readout_is_a_step_function_of_floors() {
        // 3.5s in: fast has 17 floors, slow has 1. The readout reflects
        // floor count, not the clock.
        let engine = engine_at(BuildingId::EiffelTower, 3500);
        assert_eq!(engine.elapsed_label(Track::Fast), "3.4s");
        assert_eq!(engine.elapsed_label(Track::Slow), "2.0s");
    }

    #[test]
    fn step_before_start_instant_reads_as_zero_elapsed() {
        let mut engine = ConstructionEngine::new(BuildingId::EiffelTower);
        let started = engine.started.unwrap();
        engine.step_at(started - Duration::from_millis(500));
        assert_eq!(engine.floors(Track::Fast), 0);
        assert_eq!(engine.floors(Track::Slow), 0);
    }
}
