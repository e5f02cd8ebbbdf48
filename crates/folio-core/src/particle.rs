use crate::color::Rgb;
use crate::config::FieldConfig;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// One point of the background field. Positions are surface pixels and
/// velocities are pixels per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, cfg: &FieldConfig) -> Self {
        let (size_min, size_max) = cfg.size_range;
        let (op_min, op_max) = cfg.opacity_range;
        // plain unit samples: a zero-sized extent must not panic
        let mut unit = || rng.gen::<f64>();
        Self {
            pos: DVec2::new(unit() * width, unit() * height),
            size: size_min + unit() * (size_max - size_min),
            vel: DVec2::new(
                (unit() - 0.5) * 2.0 * cfg.speed_max,
                (unit() - 0.5) * 2.0 * cfg.speed_max,
            ),
            opacity: op_min + unit() * (op_max - op_min),
        }
    }

    /// Advance one frame. A component whose new coordinate lies outside
    /// `[0, extent]` has its velocity negated; the position is left where it
    /// landed and comes back on the next frame.
    pub fn update(&mut self, width: f64, height: f64) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > height {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Rgb) {
        surface.begin_path();
        surface.arc(self.pos.x, self.pos.y, self.size, 0.0, TAU);
        surface.set_fill_style(&color.css_rgba(self.opacity));
        surface.fill();
    }
}
