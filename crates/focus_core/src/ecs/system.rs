//! Per-frame systems

use super::World;

/// Where in the frame a system runs
///
/// Input, then Update, then PostUpdate, then Persist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SystemStage {
    /// Host input such as grab state and scripted motion
    Input,
    /// Scene logic such as board attachment
    #[default]
    Update,
    /// Reads the settled scene
    PostUpdate,
    /// Writes to external storage
    Persist,
}

/// What a system sees for one frame
pub struct SystemContext<'a> {
    pub world: &'a mut World,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Seconds since the first frame
    pub elapsed_time: f32,
    pub frame: u64,
}

impl<'a> SystemContext<'a> {
    pub fn new(world: &'a mut World, delta_time: f32, elapsed_time: f32, frame: u64) -> Self {
        Self {
            world,
            delta_time,
            elapsed_time,
            frame,
        }
    }
}

/// Logic run once per frame by a [`super::Schedule`]
///
/// Systems must not block; work that is not ready waits for a later frame.
pub trait System: Send + Sync {
    fn run(&mut self, ctx: &mut SystemContext);

    fn name(&self) -> &'static str;

    fn stage(&self) -> SystemStage {
        SystemStage::Update
    }

    /// Order within the stage, lower first
    fn priority(&self) -> i32 {
        0
    }
}

/// A closure run as a system, built with [`system`]
pub struct FnSystem<F> {
    name: &'static str,
    stage: SystemStage,
    priority: i32,
    func: F,
}

impl<F> FnSystem<F> {
    pub fn with_stage(mut self, stage: SystemStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl<F> System for FnSystem<F>
where
    F: FnMut(&mut SystemContext) + Send + Sync,
{
    fn run(&mut self, ctx: &mut SystemContext) {
        (self.func)(ctx)
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn stage(&self) -> SystemStage {
        self.stage
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Wrap a closure as an `Update` system
///
/// ```rust,ignore
/// let grab = system("ScriptedGrab", |ctx| {
///     // move the grabbed tool along a path
/// })
/// .with_stage(SystemStage::Input);
/// ```
pub fn system<F>(name: &'static str, func: F) -> FnSystem<F>
where
    F: FnMut(&mut SystemContext) + Send + Sync,
{
    FnSystem {
        name,
        stage: SystemStage::Update,
        priority: 0,
        func,
    }
}
