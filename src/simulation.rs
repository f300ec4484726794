//! Simulation builder and the per-frame orchestrator.

use glam::Vec2;

use crate::cell::Cell;
use crate::collision::{resolve_pair, Domain};
use crate::error::ConfigError;
use crate::forces::ForceField;
use crate::obstacle::{HalfPlane, Segment};
use crate::spawn::SpawnContext;

/// Default spawn seed. Replays are deterministic unless the caller picks a
/// seed of their own with [`Simulation::with_seed`].
const DEFAULT_SEED: u64 = 0x5EED_CE11;

/// A cell simulation builder.
///
/// Use method chaining to configure, then call `.build()` to validate the
/// configuration and obtain a [`World`].
///
/// # Example
///
/// ```
/// use cpde::prelude::*;
///
/// let mut world = Simulation::new()
///     .with_cell_count(30)
///     .with_cell_radius(2.0)
///     .with_domain(100.0, 100.0)
///     .with_force(ForceField::Attract {
///         target: Vec2::new(10.0, 10.0),
///         intensity: 2.0,
///     })
///     .with_segment(Vec2::new(10.0, 10.0), Vec2::new(40.0, 40.0))
///     .build()
///     .unwrap();
///
/// world.step(0.005);
/// ```
pub struct Simulation {
    cell_count: u32,
    cell_radius: f32,
    time_step: f32,
    width: f32,
    height: f32,
    left_margin: f32,
    seed: u64,
    drag_radius: Option<f32>,
    forces: Vec<ForceField>,
    cells: Vec<(Vec2, f32)>,
    segments: Vec<(Vec2, Vec2)>,
    half_planes: Vec<(Vec2, Vec2)>,
    spawner: Option<Box<dyn FnMut(&mut SpawnContext) -> Vec2>>,
}

impl Simulation {
    /// Create a simulation with default settings: 30 cells of radius 2 in a
    /// 100×100 domain, stepped at dt = 0.01, with no forces or obstacles.
    pub fn new() -> Self {
        Self {
            cell_count: 30,
            cell_radius: 2.0,
            time_step: 0.01,
            width: 100.0,
            height: 100.0,
            left_margin: 0.0,
            seed: DEFAULT_SEED,
            drag_radius: None,
            forces: Vec::new(),
            cells: Vec::new(),
            segments: Vec::new(),
            half_planes: Vec::new(),
            spawner: None,
        }
    }

    /// Number of cells to spawn (in addition to any explicit cells).
    pub fn with_cell_count(mut self, count: u32) -> Self {
        self.cell_count = count;
        self
    }

    /// Radius of spawned cells.
    pub fn with_cell_radius(mut self, radius: f32) -> Self {
        self.cell_radius = radius;
        self
    }

    /// Time step used by [`World::tick`].
    pub fn with_time_step(mut self, dt: f32) -> Self {
        self.time_step = dt;
        self
    }

    /// Domain extent in world units.
    pub fn with_domain(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Inward offset of the domain's left wall.
    pub fn with_left_margin(mut self, margin: f32) -> Self {
        self.left_margin = margin;
        self
    }

    /// Seed for the spawn RNG. Two simulations built with the same seed and
    /// configuration produce identical worlds.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Effective radius of a cell while it is dragged (see
    /// [`World::select_nearest`]). Without this, dragging does not change
    /// the radius.
    pub fn with_drag_radius(mut self, radius: f32) -> Self {
        self.drag_radius = Some(radius);
        self
    }

    /// Add a force field. Fields are applied every step in the order added.
    pub fn with_force(mut self, force: ForceField) -> Self {
        self.forces.push(force);
        self
    }

    /// Add an explicit cell. Validated at `build()`; an invalid cell is
    /// skipped with a warning rather than failing the build.
    pub fn with_cell(mut self, position: Vec2, radius: f32) -> Self {
        self.cells.push((position, radius));
        self
    }

    /// Add a segment obstacle. Validated at `build()`; a degenerate segment
    /// is skipped with a warning rather than failing the build.
    pub fn with_segment(mut self, a: Vec2, b: Vec2) -> Self {
        self.segments.push((a, b));
        self
    }

    /// Add a half-plane obstacle with an inward-pointing normal. Validated
    /// at `build()`; a zero normal is skipped with a warning.
    pub fn with_half_plane(mut self, anchor: Vec2, normal: Vec2) -> Self {
        self.half_planes.push((anchor, normal));
        self
    }

    /// Set the spawner producing positions for the spawned cells.
    /// Without one, cells spawn uniformly inside the domain.
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: FnMut(&mut SpawnContext) -> Vec2 + 'static,
    {
        self.spawner = Some(Box::new(spawner));
        self
    }

    /// Validate the configuration and build the world.
    ///
    /// Global configuration problems (cell radius, domain extent) are fatal
    /// and returned as errors. Individually added entities that fail
    /// validation are logged and skipped — one bad obstacle does not take
    /// the run down.
    pub fn build(mut self) -> Result<World, ConfigError> {
        if !self.cell_radius.is_finite() || self.cell_radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius(self.cell_radius));
        }
        let domain = Domain::new(self.width, self.height)?.with_left_margin(self.left_margin);
        if !domain.fits(self.cell_radius) {
            return Err(ConfigError::InvalidDomain {
                width: self.width,
                height: self.height,
            });
        }
        if let Some(radius) = self.drag_radius {
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ConfigError::NonPositiveRadius(radius));
            }
            if !domain.fits(radius) {
                return Err(ConfigError::InvalidDomain {
                    width: self.width,
                    height: self.height,
                });
            }
        }

        let mut cells = Vec::with_capacity(self.cell_count as usize + self.cells.len());
        let mut spawner = self.spawner.take();
        for i in 0..self.cell_count {
            let mut ctx = SpawnContext::new(i, self.cell_count, &domain, self.seed);
            let position = match spawner.as_mut() {
                Some(f) => f(&mut ctx),
                None => ctx.random_in_domain(),
            };
            // Radius already validated above.
            cells.push(Cell::new(position, self.cell_radius).expect("validated radius"));
        }

        for (position, radius) in self.cells {
            match Cell::new(position, radius) {
                Ok(cell) if domain.fits(radius) => cells.push(cell),
                Ok(_) => log::warn!(
                    "skipping cell at {:?}: radius {} does not fit the domain",
                    position,
                    radius
                ),
                Err(e) => log::warn!("skipping cell at {:?}: {}", position, e),
            }
        }

        let mut segments = Vec::with_capacity(self.segments.len());
        for (a, b) in self.segments {
            match Segment::new(a, b) {
                Ok(segment) => segments.push(segment),
                Err(e) => log::warn!("skipping segment {:?} -> {:?}: {}", a, b, e),
            }
        }

        let mut half_planes = Vec::with_capacity(self.half_planes.len());
        for (anchor, normal) in self.half_planes {
            match HalfPlane::new(anchor, normal) {
                Ok(hp) => half_planes.push(hp),
                Err(e) => log::warn!("skipping half-plane at {:?}: {}", anchor, e),
            }
        }

        Ok(World {
            t: 0.0,
            frame: 0,
            time_step: self.time_step,
            cells,
            segments,
            half_planes,
            forces: self.forces,
            domain,
            selected: None,
            drag_radius: self.drag_radius,
        })
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Contact counts reported by [`World::step`].
///
/// This is the step's "overlap resolved" signal: any nonzero count means
/// the constraint pass moved at least one cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepSummary {
    /// Cell pairs within contact range (including exact touching).
    pub pair_contacts: u32,
    /// Cell-obstacle projections applied (segments and half-planes).
    pub obstacle_contacts: u32,
    /// Cells moved by the final boundary clamp.
    pub clamped: u32,
}

impl StepSummary {
    /// `true` when any pairwise or obstacle overlap was resolved.
    pub fn resolved_overlap(&self) -> bool {
        self.pair_contacts > 0 || self.obstacle_contacts > 0
    }
}

/// The simulation state and per-frame orchestrator.
///
/// Owns the cells, obstacles, and force fields exclusively; all mutation
/// flows through [`step`](World::step) and the selection API. Cells keep
/// their insertion order, so runs with the same configuration and the same
/// sequence of steps are reproducible.
pub struct World {
    t: f32,
    frame: u64,
    time_step: f32,
    cells: Vec<Cell>,
    segments: Vec<Segment>,
    half_planes: Vec<HalfPlane>,
    forces: Vec<ForceField>,
    domain: Domain,
    pub(crate) selected: Option<usize>,
    pub(crate) drag_radius: Option<f32>,
}

impl World {
    /// Advance the simulation by one frame of length `dt`.
    ///
    /// Fixed order, one pass, no sub-stepping:
    ///
    /// 1. advance time,
    /// 2. apply every force field to every cell,
    /// 3. resolve every unordered cell pair,
    /// 4. project cells out of segments, then half-planes,
    /// 5. clamp every cell into the domain (always wins).
    ///
    /// Residual overlap after the single pass is expected; the same small
    /// correction reapplies next frame.
    pub fn step(&mut self, dt: f32) -> StepSummary {
        self.t += dt;
        self.frame += 1;

        let mut summary = StepSummary::default();
        let n = self.cells.len();

        for cell in &mut self.cells {
            let mut dx = Vec2::ZERO;
            for force in &self.forces {
                dx += force.displacement(cell.position, dt);
            }
            cell.position += dx;
        }

        // Corrections apply immediately: later pairs see updated positions.
        for i in 0..n {
            for j in (i + 1)..n {
                let (pi, pj) = (self.cells[i].position, self.cells[j].position);
                let (ri, rj) = (self.effective_radius(i), self.effective_radius(j));
                if let Some((di, dj)) = resolve_pair(pi, ri, pj, rj) {
                    self.cells[i].position = pi + di;
                    self.cells[j].position = pj + dj;
                    summary.pair_contacts += 1;
                }
            }
        }

        for i in 0..n {
            let radius = self.effective_radius(i);
            let mut position = self.cells[i].position;
            for segment in &self.segments {
                if let Some(dx) = segment.project(position, radius) {
                    position += dx;
                    summary.obstacle_contacts += 1;
                }
            }
            for half_plane in &self.half_planes {
                if let Some(dx) = half_plane.project(position, radius) {
                    position += dx;
                    summary.obstacle_contacts += 1;
                }
            }
            self.cells[i].position = position;
        }

        for i in 0..n {
            let radius = self.effective_radius(i);
            let position = self.cells[i].position;
            let clamped = self.domain.clamp(position, radius);
            if clamped != position {
                summary.clamped += 1;
            }
            self.cells[i].position = clamped;
        }

        summary
    }

    /// Advance by the configured time step.
    pub fn tick(&mut self) -> StepSummary {
        self.step(self.time_step)
    }

    /// Elapsed simulation time.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.t
    }

    /// Frames stepped since construction.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The configured time step used by [`tick`](World::tick).
    #[inline]
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    /// Read-only view of the cells, in stable insertion order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read-only view of the segment obstacles.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Read-only view of the half-plane obstacles.
    #[inline]
    pub fn half_planes(&self) -> &[HalfPlane] {
        &self.half_planes
    }

    /// The simulation domain.
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Radius a cell currently collides with: the drag override while the
    /// cell is selected and an override is configured, its physical radius
    /// otherwise. Renderers should draw this radius.
    pub fn effective_radius(&self, index: usize) -> f32 {
        match (self.selected, self.drag_radius) {
            (Some(selected), Some(radius)) if selected == index => radius,
            _ => self.cells[index].radius(),
        }
    }

    /// Mutable access for the interaction layer. Only the selected cell's
    /// position may be written between frames; never during a step.
    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}
