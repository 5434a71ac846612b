use log::{ debug, info };
use rand::{ Rng, SeedableRng };
use rand_xorshift::XorShiftRng;

use vecmath_impl::Float3;
use vecmath_lists::List;

use crate::settings::Settings;
use crate::trails::{ TimeSpan, TrailEmitter, TrailError };

/// Point particles integrated with semi-implicit Euler steps.
pub struct Particles {
    pub positions: Vec<Float3>,
    pub velocities: Vec<Float3>,
}

impl Particles {
    /// Spawns `count` particles at the origin, each moving along a random unit direction.
    pub fn spawn(count: usize, rng: &mut impl Rng) -> Particles {
        let velocities = (0..count)
            .map(|_| random_direction(&mut *rng))
            .collect();
        Particles {
            positions: vec![Float3::ZERO; count],
            velocities,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Applies `gravity` for `dt` and returns how far each particle moves this step.
    ///
    /// The velocity is updated first and the offset uses the new velocity.
    fn integrate(&mut self, gravity: Float3, dt: f32) -> Vec<Float3> {
        self.velocities.iter_mut()
            .map(|velocity| {
                *velocity += gravity * dt;
                *velocity * dt
            })
            .collect()
    }

    fn advance(&mut self, offsets: &[Float3]) {
        for (position, &offset) in self.positions.iter_mut().zip(offsets) {
            *position += offset;
        }
    }
}

/// Returns a random unit vector; the rare degenerate sample is retried.
fn random_direction(rng: &mut impl Rng) -> Float3 {
    loop {
        let mut v = Float3::new(rng.random_range(-1.0..=1.0),
                                rng.random_range(-1.0..=1.0),
                                rng.random_range(-1.0..=1.0));
        if v.normalize_and_get_length() > 0.0 {
            return v;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub steps: u32,
    pub elapsed: f32,
    pub trail_count: usize,
    pub centroid: Float3,
    pub max_distance: f32,
}

pub struct Simulation {
    particles: Particles,
    emitter: TrailEmitter,
    gravity: Float3,
    time_step: f32,
    time: f32,
    trails: List<Float3>,
}

impl Simulation {
    pub fn new(settings: &Settings) -> Simulation {
        let mut rng = XorShiftRng::seed_from_u64(settings.seed);
        Simulation {
            particles: Particles::spawn(settings.particle_count, &mut rng),
            emitter: TrailEmitter::new(settings.trail_rate),
            gravity: settings.gravity,
            time_step: settings.time_step,
            time: 0.0,
            trails: List::new(),
        }
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    pub fn trails(&self) -> &List<Float3> {
        &self.trails
    }

    pub fn step(&mut self) -> Result<usize, TrailError> {
        let offsets = self.particles.integrate(self.gravity, self.time_step);
        let spans = vec![TimeSpan::new(self.time, self.time_step); self.particles.len()];
        let batch = self.emitter.emit(&self.particles.positions, &offsets, &spans)?;
        self.trails.extend_from_slice(batch.positions.as_slice());
        self.particles.advance(&offsets);
        self.time += self.time_step;
        Ok(batch.len())
    }

    pub fn run(&mut self, steps: u32) -> Result<SimulationSummary, TrailError> {
        for i in 0..steps {
            let emitted = self.step()?;
            debug!("Step {} emitted {} trail particles", i + 1, emitted);
        }
        let summary = self.summary(steps);
        info!("Simulated {} particles for {}s", self.particles.len(), summary.elapsed);
        Ok(summary)
    }

    fn summary(&self, steps: u32) -> SimulationSummary {
        let positions = &self.particles.positions;
        let centroid = if positions.is_empty() {
            Float3::ZERO
        } else {
            positions.iter().fold(Float3::ZERO, |acc, &p| acc + p) / positions.len() as f32
        };
        let max_distance = positions.iter()
            .map(|&p| Float3::distance(p, Float3::ZERO))
            .fold(0.0, f32::max);
        SimulationSummary {
            steps,
            elapsed: self.time,
            trail_count: self.trails.len(),
            centroid,
            max_distance,
        }
    }
}
