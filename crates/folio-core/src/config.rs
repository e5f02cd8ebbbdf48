//! Tunable parameters for the particle field.
//!
//! Defaults reproduce the hero background exactly; the struct exists so the
//! web front end can validate what it runs with and tests can tweak a single
//! knob without touching the constants.

use crate::color::Rgb;
use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a finite positive number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} range is empty or inverted: [{min}, {max})")]
    BadRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("typing effect needs at least one phrase")]
    NoPhrases,
    #[error("phrase #{0} is empty")]
    EmptyPhrase(usize),
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub spacing_px: f64,
    pub size_range: (f64, f64),
    pub speed_max: f64,
    pub opacity_range: (f64, f64),
    pub link_distance: f64,
    pub link_max_alpha: f64,
    pub link_line_width: f64,
    pub color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            spacing_px: PARTICLE_SPACING_PX,
            size_range: (PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
            speed_max: PARTICLE_SPEED_MAX,
            opacity_range: (PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
            link_distance: LINK_DISTANCE,
            link_max_alpha: LINK_MAX_ALPHA,
            link_line_width: LINK_LINE_WIDTH,
            color: Rgb::from_array(PARTICLE_RGB),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("spacing_px", self.spacing_px)?;
        positive("link_distance", self.link_distance)?;
        positive("link_line_width", self.link_line_width)?;
        if !self.speed_max.is_finite() || self.speed_max < 0.0 {
            return Err(ConfigError::NotPositive {
                name: "speed_max",
                value: self.speed_max,
            });
        }
        range("size_range", self.size_range)?;
        range("opacity_range", self.opacity_range)?;
        if !(0.0..=1.0).contains(&self.link_max_alpha) {
            return Err(ConfigError::BadRange {
                name: "link_max_alpha",
                min: 0.0,
                max: self.link_max_alpha,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn range(name: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min >= 0.0 && min < max {
        Ok(())
    } else {
        Err(ConfigError::BadRange { name, min, max })
    }
}
