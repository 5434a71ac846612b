use log::debug;

use vecmath_impl::Float3;
use vecmath_lists::{ List, SharedFloat3List, SharedFloatList };

/// Trail particles emitted per second when no rate is configured.
pub const DEFAULT_TRAIL_RATE: f32 = 10.0;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrailError {
    #[error("Mismatched particle buffers: {positions} positions, {offsets} offsets, {spans} time spans")]
    LengthMismatch { positions: usize, offsets: usize, spans: usize },
}

/// The interval of simulation time a particle moved through during one step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimeSpan {
    pub start: f32,
    pub duration: f32,
}

impl TimeSpan {
    pub fn new(start: f32, duration: f32) -> TimeSpan {
        TimeSpan { start, duration }
    }

    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Maps `time` into the span: 0 at `start`, 1 at `end`.
    pub fn factor_of(&self, time: f32) -> f32 {
        (time - self.start) / self.duration
    }

    /// Returns `(time, factor)` for every multiple of `1 / rate` in `[start, end)`.
    ///
    /// Samples are aligned to the global time grid, so consecutive spans never
    /// emit the same instant twice.
    pub fn uniform_sample_range(&self, rate: f32) -> Vec<(f32, f32)> {
        if self.duration <= 0.0 || !(rate > 0.0) {
            return Vec::new();
        }
        let end = self.end();
        // Grid indices are integral so the walk terminates at any magnitude of time.
        let rate = rate as f64;
        let first = (self.start as f64 * rate).ceil() as i64;
        let last = (end as f64 * rate).ceil() as i64;
        if last <= first {
            return Vec::new();
        }
        (first..last)
            .filter_map(|k| {
                let time = (k as f64 / rate) as f32;
                // rounding to f32 can land just outside the span
                (time >= self.start && time < end).then(|| (time, self.factor_of(time)))
            })
            .collect()
    }
}

/// Trail particles produced during one step.
#[derive(Debug, Clone)]
pub struct TrailBatch {
    pub positions: SharedFloat3List,
    pub birth_times: SharedFloatList,
}

impl TrailBatch {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Emits trail particles along the path of moving particles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrailEmitter {
    pub rate: f32,
}

impl Default for TrailEmitter {
    fn default() -> Self {
        TrailEmitter { rate: DEFAULT_TRAIL_RATE }
    }
}

impl TrailEmitter {
    pub fn new(rate: f32) -> TrailEmitter {
        TrailEmitter { rate }
    }

    /// Particle `i` moves from `positions[i]` to `positions[i] + offsets[i]` over `spans[i]`.
    pub fn emit(&self, positions: &[Float3], offsets: &[Float3], spans: &[TimeSpan]) -> Result<TrailBatch, TrailError> {
        if positions.len() != offsets.len() || positions.len() != spans.len() {
            return Err(TrailError::LengthMismatch {
                positions: positions.len(),
                offsets: offsets.len(),
                spans: spans.len(),
            });
        }

        let mut new_positions = List::new();
        let mut birth_times = List::new();
        if self.rate > 0.0 {
            for ((&position, &offset), span) in positions.iter().zip(offsets).zip(spans) {
                let target = position + offset;
                for (time, factor) in span.uniform_sample_range(self.rate) {
                    new_positions.append(Float3::interpolate(position, target, factor));
                    birth_times.append(time);
                }
            }
        }

        debug!("Emitted {} trail particles from {} particles", new_positions.len(), positions.len());
        Ok(TrailBatch {
            positions: new_positions.into_shared(),
            birth_times: birth_times.into_shared(),
        })
    }
}
