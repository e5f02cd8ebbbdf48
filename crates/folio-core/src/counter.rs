//! Count-up animation for the stat numbers.

use crate::constants::COUNTER_DURATION_MS;

/// Quartic ease-out on `progress` in \[0, 1\].
#[inline]
pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Parse a `data-target` attribute. Surrounding whitespace is ignored and
/// an empty attribute is zero; anything that is not a finite number also
/// counts as zero. Fractions are kept so the last frame shows them.
pub fn parse_target(attr: &str) -> f64 {
    match attr.trim() {
        "" => 0.0,
        t => match t.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => 0.0,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: f64,
    pub finished: bool,
}

impl CounterFrame {
    /// Text shown for this frame: whole numbers while counting, the exact
    /// target on the last frame.
    pub fn text(&self) -> String {
        // -0 prints as "-0"
        (self.value + 0.0).to_string()
    }
}

/// Starts on the first sampled timestamp and lands exactly on `target`
/// once `duration_ms` has elapsed.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    pub target: f64,
    pub duration_ms: f64,
    start_ms: Option<f64>,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS)
    }

    pub fn with_duration(target: f64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            start_ms: None,
        }
    }

    pub fn sample(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - start).max(0.0);
        let progress = if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).min(1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return CounterFrame {
                value: self.target,
                finished: true,
            };
        }
        CounterFrame {
            value: (ease_out_quart(progress) * self.target).floor(),
            finished: false,
        }
    }
}
