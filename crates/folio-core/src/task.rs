//! Frame-driven tasks.
//!
//! In the browser a task is re-armed through `requestAnimationFrame` after
//! every tick; [`run_frames`] drives the same task from a plain loop so a
//! bounded number of frames can run on the host.

use crate::field::ParticleField;
use crate::surface::Surface;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub trait FrameTask {
    /// Run one frame. `timestamp_ms` increases monotonically between calls.
    fn tick(&mut self, timestamp_ms: f64) -> Flow;
}

/// Shared stop flag for a running frame loop. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Tick `task` at most `max_frames` times, `frame_interval_ms` apart, starting
/// at `start_ms`. Ends early when the task stops itself or `handle` is stopped.
/// Returns the number of frames that ran.
pub fn run_frames<T: FrameTask + ?Sized>(
    task: &mut T,
    handle: &LoopHandle,
    max_frames: usize,
    start_ms: f64,
    frame_interval_ms: f64,
) -> usize {
    let mut ran = 0;
    while ran < max_frames && !handle.is_stopped() {
        let now = start_ms + ran as f64 * frame_interval_ms;
        ran += 1;
        if task.tick(now) == Flow::Stop {
            break;
        }
    }
    ran
}

/// The background animation: a particle field bound to the surface it draws on.
pub struct FieldAnimation<S: Surface> {
    pub field: ParticleField,
    pub surface: S,
}

impl<S: Surface> FieldAnimation<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        Self { field, surface }
    }
}

impl<S: Surface> FrameTask for FieldAnimation<S> {
    fn tick(&mut self, _timestamp_ms: f64) -> Flow {
        self.field.frame(&mut self.surface);
        Flow::Continue
    }
}
