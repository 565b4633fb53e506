use super::compositor::draw_group;
use super::constants::TARGET_FPS_MIN;
use super::settings::AppSettings;
use super::surface::DrawSurface;
use glam::DVec2;
use smallvec::SmallVec;

/// Frame-rate throttle and wall-clock delta source.
///
/// Timestamps are milliseconds on the host's monotonic clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    interval_ms: f64,
    last_admitted_ms: f64,
    last_wall_ms: f64,
}

impl FrameClock {
    pub fn new(target_fps: u32, now_ms: f64) -> Self {
        Self {
            interval_ms: 1000.0 / target_fps.max(TARGET_FPS_MIN) as f64,
            last_admitted_ms: now_ms,
            last_wall_ms: now_ms,
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Returns the wall-clock delta in seconds when the frame is admitted.
    ///
    /// The admitted timestamp keeps the remainder of the interval so the
    /// long-run rate locks to the target instead of drifting.
    pub fn admit(&mut self, now_ms: f64) -> Option<f64> {
        let elapsed = now_ms - self.last_admitted_ms;
        if elapsed < self.interval_ms {
            return None;
        }
        self.last_admitted_ms = now_ms - elapsed % self.interval_ms;
        let delta = (now_ms - self.last_wall_ms) / 1000.0;
        self.last_wall_ms = now_ms;
        Some(delta)
    }
}

/// Per-group simulation time, indexed by position in the render list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationTimes {
    times: SmallVec<[f64; 2]>,
}

impl SimulationTimes {
    pub fn get(&self, index: usize) -> f64 {
        self.times.get(index).copied().unwrap_or(0.0)
    }

    /// Add `delta * speed` to each group's accumulator.
    pub fn advance(&mut self, delta: f64, speeds: impl IntoIterator<Item = f64>) {
        for (i, speed) in speeds.into_iter().enumerate() {
            if self.times.len() <= i {
                self.times.resize(i + 1, 0.0);
            }
            self.times[i] += delta * speed;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Arrived inside the throttle window: nothing drawn, no time advanced.
    Skipped,
    Drawn { groups: usize },
}

/// Drives the compositor once per admitted frame.
#[derive(Clone, Debug)]
pub struct Scheduler {
    clock: FrameClock,
    times: SimulationTimes,
}

impl Scheduler {
    pub fn new(target_fps: u32, now_ms: f64) -> Self {
        Self {
            clock: FrameClock::new(target_fps, now_ms),
            times: SimulationTimes::default(),
        }
    }

    /// Fresh clock for a reinstalled loop. Simulation time carries over.
    pub fn reinstall(&mut self, target_fps: u32, now_ms: f64) {
        self.clock = FrameClock::new(target_fps, now_ms);
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn simulation_time(&self, index: usize) -> f64 {
        self.times.get(index)
    }

    pub fn on_frame<S: DrawSurface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut S,
        viewport: (f64, f64),
        settings: &AppSettings,
        pointer: DVec2,
    ) -> FrameOutcome {
        let Some(delta) = self.clock.admit(now_ms) else {
            return FrameOutcome::Skipped;
        };
        let (width, height) = viewport;
        let groups = settings.render_groups(width, height);
        self.times
            .advance(delta, groups.iter().map(|g| g.settings.speed));

        surface.resize(width, height);
        for (i, group) in groups.iter().enumerate() {
            let time = self.simulation_time(i);
            log::trace!("[loop] {:?} group t={:.3}s", group.side, time);
            draw_group(surface, &group.region, &group.settings, time, pointer);
        }
        log::trace!("[loop] admitted frame dt={:.4}s groups={}", delta, groups.len());
        FrameOutcome::Drawn {
            groups: groups.len(),
        }
    }
}
