//! Frame schedule

use super::{System, SystemContext, World};
use smallvec::SmallVec;

/// Systems in run order, plus the frame clock advanced by [`Schedule::step`]
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
    elapsed: f32,
    frame: u64,
}

impl Schedule {
    /// Run every system once with explicit timing
    pub fn run(&mut self, world: &mut World, delta_time: f32, elapsed_time: f32, frame: u64) {
        let mut ctx = SystemContext::new(world, delta_time, elapsed_time, frame);
        for system in &mut self.systems {
            system.run(&mut ctx);
        }
    }

    /// Run one frame and advance the internal clock
    pub fn step(&mut self, world: &mut World, delta_time: f32) {
        self.run(world, delta_time, self.elapsed, self.frame);
        self.elapsed += delta_time;
        self.frame += 1;
    }

    /// Frames run through [`Schedule::step`]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Seconds run through [`Schedule::step`]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|s| s.name()).collect()
    }
}

/// Collects systems and orders them by stage, then priority
///
/// Systems with equal stage and priority keep the order they were added in.
#[derive(Default)]
pub struct ScheduleBuilder {
    systems: SmallVec<[Box<dyn System>; 8]>,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<S: System + 'static>(mut self, system: S) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn build(self) -> Schedule {
        let mut systems: Vec<Box<dyn System>> = self.systems.into_vec();
        systems.sort_by_key(|s| (s.stage(), s.priority()));
        Schedule {
            systems,
            elapsed: 0.0,
            frame: 0,
        }
    }
}
