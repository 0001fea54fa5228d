use crate::constants::{
    LINK_DISTANCE, PARTICLE_COUNT, RADIUS_MIN, RADIUS_SPAN, VELOCITY_SPREAD,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One moving point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Spawn and linking parameters for a field.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub velocity_spread: f32,
    pub radius_min: f32,
    pub radius_span: f32,
    pub link_distance: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            velocity_spread: VELOCITY_SPREAD,
            radius_min: RADIUS_MIN,
            radius_span: RADIUS_SPAN,
            link_distance: LINK_DISTANCE,
        }
    }
}

/// A connecting line between two particles, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Line opacity for a pair at `distance`: 1 at 0, falling linearly to 0 at `max`.
#[inline]
pub fn link_alpha(distance: f32, max: f32) -> f32 {
    if max <= 0.0 || distance >= max {
        return 0.0;
    }
    (1.0 - distance / max).clamp(0.0, 1.0)
}

/// Decorative particle field simulation.
///
/// The field owns a fixed batch of points moving with constant velocity inside
/// a `width x height` box. Each call to [`ParticleField::step`] advances every
/// point by one unit step and reflects velocity components whose position has
/// crossed an edge. Reflection happens after the move, so a point may sit up to
/// one step outside the box for a single frame. Positions are never clamped.
pub struct ParticleField {
    pub params: FieldParams,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let mut field = Self {
            params,
            width,
            height,
            particles: Vec::with_capacity(params.count),
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn();
        field
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt new bounds and replace the whole batch; prior motion is dropped.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.spawn();
    }

    fn spawn(&mut self) {
        let p = self.params;
        let (w, h) = (self.width.max(0.0), self.height.max(0.0));
        let rng = &mut self.rng;
        self.particles.clear();
        self.particles.extend((0..p.count).map(|_| Particle {
            pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * p.velocity_spread,
                (rng.gen::<f32>() - 0.5) * p.velocity_spread,
            ),
            radius: rng.gen::<f32>() * p.radius_span + p.radius_min,
        }));
    }

    /// Advance one frame: Euler move, then reflect off the box edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 || p.pos.x > w {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > h {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Every unordered pair closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.params.link_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len()).filter_map(move |j| {
                let d = ps[i].pos.distance(ps[j].pos);
                (d < max).then(|| Link {
                    a: i,
                    b: j,
                    alpha: link_alpha(d, max),
                })
            })
        })
    }
}
