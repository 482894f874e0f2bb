//! # Phase Benchmark Harness
//!
//! Wall-clock timing of the registry's basic operations, one phase at a time:
//!
//! 1. Create N entities
//! 2. Attach one component to each
//! 3. Read it back
//! 4. Remove it
//! 5. Destroy every entity
//! 6. Recreate N entities with two components each
//! 7. Iterate a two-component view
//!
//! For statistically sound numbers use the criterion benches; this harness is
//! a quick end-to-end smoke run.

use crate::config::RegistryConfig;
use crate::ecs::Registry;
use crate::error::RegistryResult;
use std::fmt;
use std::time::Instant;

/// Millisecond stopwatch.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts timing now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Milliseconds since start.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Returns the elapsed milliseconds and restarts the timer.
    pub fn lap(&mut self) -> f64 {
        let elapsed = self.elapsed_ms();
        self.start = Instant::now();
        elapsed
    }
}

/// One timed step of [`run_phases`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Create N entities.
    Create,
    /// Attach one component to each entity.
    Add,
    /// Read the component back.
    Get,
    /// Remove the component.
    Remove,
    /// Destroy every entity.
    Destroy,
    /// Recreate N entities with two components.
    Recreate,
    /// Iterate a two-component view.
    View,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Self; 7] = [
        Self::Create,
        Self::Add,
        Self::Get,
        Self::Remove,
        Self::Destroy,
        Self::Recreate,
        Self::View,
    ];

    /// Short lowercase label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Add => "add",
            Self::Get => "get",
            Self::Remove => "remove",
            Self::Destroy => "destroy",
            Self::Recreate => "recreate",
            Self::View => "view",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timings of one [`run_phases`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseReport {
    /// Entities per phase.
    pub entity_count: u32,
    /// Milliseconds per phase, in execution order.
    pub timings: Vec<(Phase, f64)>,
    /// Sum of the values touched, kept so no phase is optimized out.
    pub checksum: f64,
}

impl PhaseReport {
    fn new(entity_count: u32) -> Self {
        Self {
            entity_count,
            timings: Vec::with_capacity(Phase::ALL.len()),
            checksum: 0.0,
        }
    }

    fn record(&mut self, phase: Phase, elapsed_ms: f64) {
        tracing::info!(
            phase = phase.name(),
            elapsed_ms,
            entities = self.entity_count,
            "benchmark phase finished"
        );
        self.timings.push((phase, elapsed_ms));
    }

    /// Milliseconds spent in `phase`, if it ran.
    #[must_use]
    pub fn elapsed_ms(&self, phase: Phase) -> Option<f64> {
        self.timings
            .iter()
            .find(|(recorded, _)| *recorded == phase)
            .map(|&(_, elapsed)| elapsed)
    }

    /// Milliseconds across all phases.
    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.timings.iter().map(|&(_, elapsed)| elapsed).sum()
    }
}

impl fmt::Display for PhaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phase benchmark: {} entities", self.entity_count)?;
        for (phase, elapsed) in &self.timings {
            writeln!(f, "  {:<10} {elapsed:>12.3} ms", phase.name())?;
        }
        write!(f, "  {:<10} {:>12.3} ms", "total", self.total_ms())
    }
}

struct Position {
    x: f64,
    y: f64,
}

struct Velocity {
    dx: f64,
    dy: f64,
}

impl Position {
    fn at(i: u32) -> Self {
        let f = f64::from(i);
        Self { x: f, y: f * 0.5 }
    }
}

/// Runs every [`Phase`] against a fresh registry built from `config`.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidConfig`](crate::RegistryError::InvalidConfig)
/// for a bad config, or [`RegistryError::EntityLimitReached`](crate::RegistryError::EntityLimitReached)
/// if `entity_count` exceeds `config.max_entities`.
pub fn run_phases(config: RegistryConfig, entity_count: u32) -> RegistryResult<PhaseReport> {
    let mut registry = Registry::with_config(config)?;
    let mut report = PhaseReport::new(entity_count);
    let mut ids = Vec::with_capacity(entity_count as usize);
    let mut sink = 0.0;
    let mut timer = Timer::start();

    for _ in 0..entity_count {
        ids.push(registry.try_create()?);
    }
    report.record(Phase::Create, timer.lap());

    for (i, &id) in (0..entity_count).zip(&ids) {
        registry.try_add(id, Position::at(i))?;
    }
    report.record(Phase::Add, timer.lap());

    for &id in &ids {
        sink += registry.try_get::<Position>(id)?.x;
    }
    report.record(Phase::Get, timer.lap());

    for &id in &ids {
        if let Some(position) = registry.try_remove::<Position>(id)? {
            sink += position.y;
        }
    }
    report.record(Phase::Remove, timer.lap());

    for id in &mut ids {
        registry.try_destroy(id)?;
    }
    ids.clear();
    report.record(Phase::Destroy, timer.lap());

    for i in 0..entity_count {
        let id = registry.try_create()?;
        registry.try_add(id, Position::at(i))?;
        registry.try_add(id, Velocity { dx: 1.0, dy: -1.0 })?;
    }
    report.record(Phase::Recreate, timer.lap());

    registry
        .try_view::<(Position, Velocity)>()?
        .each(|position, velocity| {
            position.x += velocity.dx;
            position.y += velocity.dy;
            sink += position.x;
        });
    report.record(Phase::View, timer.lap());

    report.checksum = sink;
    Ok(report)
}
