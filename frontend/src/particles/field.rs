use rand::Rng;

use crate::config::{NEAR_PLANE, PARTICLE_SPEED, POINTER_DRIFT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Cyan,
    Violet,
}

impl Tint {
    pub fn css(self) -> &'static str {
        match self {
            Tint::Cyan => "#00ffff",
            Tint::Violet => "#a855f7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Depth on the previous frame, the tail end of the trail.
    pub pz: f64,
    pub tint: Tint,
}

/// One trail segment in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub width: f64,
    pub alpha: f64,
    pub tint: Tint,
}

/// Fixed-size pool of star-field particles flying toward the viewer.
///
/// The pool never grows or shrinks: a particle that reaches the near plane is
/// respawned in place.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    pointer: (f64, f64),
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let (width, height) = (width.max(1.0), height.max(1.0));
        let particles = (0..count).map(|_| spawn(rng, width, height)).collect();
        Self {
            particles,
            width,
            height,
            pointer: (width / 2.0, height / 2.0),
        }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Respawns the whole pool for a new viewport size.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for particle in self.particles.iter_mut() {
            *particle = spawn(rng, self.width, self.height);
        }
    }

    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let dx = (self.pointer.0 - self.width / 2.0) * POINTER_DRIFT;
        let dy = (self.pointer.1 - self.height / 2.0) * POINTER_DRIFT;
        for particle in self.particles.iter_mut() {
            particle.pz = particle.z;
            particle.z -= PARTICLE_SPEED;
            particle.x += dx;
            particle.y += dy;
            if particle.z <= NEAR_PLANE {
                *particle = spawn(rng, self.width, self.height);
            }
        }
    }

    pub fn strokes(&self) -> impl Iterator<Item = Stroke> + '_ {
        self.particles.iter().map(move |p| {
            let nearness = (1.0 - p.z / self.width).max(0.0);
            Stroke {
                from: self.project(p.x, p.y, p.pz),
                to: self.project(p.x, p.y, p.z),
                width: nearness * 2.0,
                alpha: nearness * 0.4,
                tint: p.tint,
            }
        })
    }

    fn project(&self, x: f64, y: f64, z: f64) -> (f64, f64) {
        let (half_w, half_h) = (self.width / 2.0, self.height / 2.0);
        (x / z * half_w + half_w, y / z * half_h + half_h)
    }
}

fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
    // gen::<f64>() is in [0, 1), so depth lands in (0, width]
    let z = width * (1.0 - rng.gen::<f64>());
    Particle {
        x: (rng.gen::<f64>() - 0.5) * width * 2.0,
        y: (rng.gen::<f64>() - 0.5) * height * 2.0,
        z,
        pz: z,
        tint: if rng.gen_bool(0.5) {
            Tint::Cyan
        } else {
            Tint::Violet
        },
    }
}
