//! The particle field: a fixed-size collection advanced and redrawn each frame.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

/// Number of particles for a surface `width` px wide:
/// `min(max_particles, floor(width / spacing_px))`, zero for degenerate widths.
pub fn particle_count(width: f64, cfg: &FieldConfig) -> usize {
    let per_width = (width / cfg.spacing_px).floor();
    if per_width.is_nan() || per_width <= 0.0 {
        return 0;
    }
    (per_width as usize).min(cfg.max_particles)
}

/// A proximity connection between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

/// Line alpha for two particles `distance` apart, or `None` when they are
/// too far apart to be connected. Fades linearly to zero at the threshold.
#[inline]
pub fn link_alpha(distance: f64, cfg: &FieldConfig) -> Option<f64> {
    (distance < cfg.link_distance)
        .then(|| cfg.link_max_alpha * (1.0 - distance / cfg.link_distance))
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
    pub config: FieldConfig,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            config,
        }
    }

    /// Adopt a `width` x `height` surface and replace every particle with a
    /// fresh random one inside it. Nothing of the previous field survives.
    pub fn init_particles<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width;
        self.height = height;
        let count = particle_count(width, &self.config);
        let cfg = &self.config;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, width, height, cfg))
            .collect();
        log::debug!(
            "[field] init {} particles for {:.0}x{:.0}",
            self.particles.len(),
            width,
            height
        );
    }

    /// Surface resized: the field is rebuilt for the new dimensions.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.init_particles(width, height, rng);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn update(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.update(w, h);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            p.draw(surface, self.config.color);
        }
    }

    /// All connected pairs in `(i, j)`, `i < j` order.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        let cfg = &self.config;
        (0..ps.len()).flat_map(move |a| {
            (a + 1..ps.len()).filter_map(move |b| {
                let distance = ps[a].pos.distance(ps[b].pos);
                link_alpha(distance, cfg).map(|alpha| Link {
                    a,
                    b,
                    distance,
                    alpha,
                })
            })
        })
    }

    pub fn connect_particles<S: Surface + ?Sized>(&self, surface: &mut S) {
        let color = self.config.color;
        for link in self.links() {
            let (pa, pb) = (self.particles[link.a].pos, self.particles[link.b].pos);
            surface.begin_path();
            surface.set_stroke_style(&color.css_rgba(link.alpha));
            surface.set_line_width(self.config.link_line_width);
            surface.move_to(pa.x, pa.y);
            surface.line_to(pb.x, pb.y);
            surface.stroke();
        }
    }

    /// One animation frame: clear, update and draw each particle in order,
    /// then draw the proximity lines.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear_rect(0.0, 0.0, self.width, self.height);
        let (w, h) = (self.width, self.height);
        let color = self.config.color;
        for p in &mut self.particles {
            p.update(w, h);
            p.draw(surface, color);
        }
        self.connect_particles(surface);
    }
}
