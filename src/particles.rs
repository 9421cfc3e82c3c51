//! Decorative drifting-dot field.
//!
//! Particles move at a constant per-frame velocity and wrap toroidally at the
//! surface edges. There is no interaction between particles and no despawn:
//! the population is fixed at construction.

use crate::config::ParticleConfig;

/// Pixel extent of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Bring `v` back into `[0, extent)`.
///
/// Past the far edge restarts at zero; below zero re-enters from the far edge.
pub fn wrap_axis(v: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    if v >= extent {
        0.0
    } else if v < 0.0 {
        let w = v.rem_euclid(extent);
        // rem_euclid may round up to `extent` for tiny negative inputs
        if w < extent {
            w
        } else {
            0.0
        }
    } else {
        v
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    color: Rgba,
    css: String,
}

impl Particle {
    pub fn new(x: f64, y: f64, radius: f64, velocity: (f64, f64), color: Rgba) -> Self {
        Self {
            x,
            y,
            radius,
            vx: velocity.0,
            vy: velocity.1,
            css: color.to_css(),
            color,
        }
    }

    /// Draw a particle from `rand`, a uniform source over `[0, 1)`.
    pub fn random(bounds: Bounds, config: &ParticleConfig, rand: &mut impl FnMut() -> f64) -> Self {
        let [r_min, r_max] = config.radius;
        let speed = config.max_speed;
        let x = rand() * bounds.width;
        let y = rand() * bounds.height;
        let radius = r_min + rand() * (r_max - r_min);
        let vx = rand() * 2.0 * speed - speed;
        let vy = rand() * 2.0 * speed - speed;
        let color = config.base_color().with_alpha(rand() * config.max_alpha);
        Self::new(x, y, radius, (vx, vy), color)
    }

    /// Advance one frame and wrap into `bounds`.
    pub fn update(&mut self, bounds: Bounds) {
        self.x = wrap_axis(self.x + self.vx, bounds.width);
        self.y = wrap_axis(self.y + self.vy, bounds.height);
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Fill style string, formatted once at creation.
    pub fn css_color(&self) -> &str {
        &self.css
    }
}

/// Fixed population of particles over a resizable surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    bounds: Bounds,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(bounds: Bounds, config: &ParticleConfig, mut rand: impl FnMut() -> f64) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::random(bounds, config, &mut rand))
            .collect();
        Self { bounds, particles }
    }

    pub fn from_particles(bounds: Bounds, particles: Vec<Particle>) -> Self {
        Self { bounds, particles }
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.update(bounds);
        }
    }

    /// Adopt new surface bounds. Positions are not rescaled; anything left
    /// outside wraps back on the next step.
    pub fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
