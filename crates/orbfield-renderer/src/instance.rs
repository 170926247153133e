//! One mounted sphere: particle state, motion, projection and its surface.

use orbfield_common::{MountEvent, Size, SizeTier};
use orbfield_config::schema::OrbfieldConfig;
use rand::Rng;

use crate::cloud::fibonacci_sphere;
use crate::density::DensityPolicy;
use crate::displacement::{DisplacementParams, OrganicDisplacementField};
use crate::interaction::InteractionController;
use crate::noise::create_noise;
use crate::particle::{spawn_particles, Palette, Particle};
use crate::projector::{ProjectedParticle, ProjectionParams, Projector};
use crate::render::Renderer;
use crate::surface::DrawSurface;

/// Lifecycle of an instance. `TornDown` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Mounted, no frame drawn yet.
    Uninitialized,
    Animating,
    /// Page hidden; only pausable instances enter this state.
    Paused,
    TornDown,
}

/// Where and how big an instance is when it mounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountSpec {
    /// Container size, CSS px.
    pub size: Size,
    pub device_pixel_ratio: f64,
    pub tier: SizeTier,
}

impl MountSpec {
    pub fn new(size: Size, device_pixel_ratio: f64, tier: SizeTier) -> Self {
        Self {
            size,
            device_pixel_ratio,
            tier,
        }
    }
}

pub struct SphereInstance<S: DrawSurface> {
    tier: SizeTier,
    state: InstanceState,
    pausable: bool,
    surface: S,
    particles: Vec<Particle>,
    projected: Vec<ProjectedParticle>,
    field: OrganicDisplacementField,
    interaction: InteractionController,
    projector: Projector,
    renderer: Renderer,
    radius: f64,
    center: (f64, f64),
    density: DensityPolicy,
    started_at: Option<f64>,
    elapsed: f64,
    frames: u64,
}

impl<S: DrawSurface> SphereInstance<S> {
    /// Build an instance for `mount` drawing into `surface`.
    ///
    /// Returns `None` when there is no mount or the surface has no drawable
    /// area; such an instance simply never starts.
    pub fn mount<R: Rng + ?Sized>(
        mount: Option<MountSpec>,
        surface: S,
        config: &OrbfieldConfig,
        rng: &mut R,
    ) -> Option<Self> {
        let Some(spec) = mount else {
            tracing::debug!("no mount point, sphere not started");
            return None;
        };
        let surface_size = surface.size();
        if !surface_size.is_drawable() {
            tracing::debug!(
                tier = %spec.tier,
                width = surface_size.width,
                height = surface_size.height,
                "surface has no drawable area, sphere not started"
            );
            return None;
        }

        let density = DensityPolicy::for_tier(&config.density, spec.tier);
        let count = density.particle_count(spec.size, spec.device_pixel_ratio);
        let palette = Palette::from_config(&config.palette);
        let particles = spawn_particles(fibonacci_sphere(count), &palette, rng);

        let field = OrganicDisplacementField::new(
            DisplacementParams::from_config(&config.motion),
            create_noise(config.motion.noise, fold_seed(config.render.seed)),
        );

        let mut instance = Self {
            tier: spec.tier,
            state: InstanceState::Uninitialized,
            pausable: false,
            surface,
            projected: Vec::with_capacity(particles.len()),
            particles,
            field,
            interaction: InteractionController::new(config.motion.max_tilt),
            projector: Projector::new(ProjectionParams::from_config(&config.motion)),
            renderer: Renderer::from_config(spec.tier, config),
            radius: 0.0,
            center: (0.0, 0.0),
            density,
            started_at: None,
            elapsed: 0.0,
            frames: 0,
        };
        instance.layout();

        tracing::info!(
            tier = %instance.tier,
            particles = instance.particles.len(),
            radius = instance.radius,
            "sphere mounted"
        );
        Some(instance)
    }

    /// Let page visibility pause and resume this instance.
    pub fn with_pausable(mut self, pausable: bool) -> Self {
        self.pausable = pausable;
        self
    }

    fn layout(&mut self) {
        let size = self.surface.size();
        self.radius = self.density.radius(size);
        self.center = (size.width * 0.5, size.height * 0.5);
    }

    pub fn wants_frame(&self) -> bool {
        matches!(
            self.state,
            InstanceState::Uninitialized | InstanceState::Animating
        )
    }

    /// Draw one frame at `now` seconds on the host's monotonic clock.
    /// Returns whether anything was drawn.
    pub fn frame(&mut self, now: f64) -> bool {
        if !self.wants_frame() {
            return false;
        }
        if self.state == InstanceState::Uninitialized {
            self.state = InstanceState::Animating;
            tracing::debug!(tier = %self.tier, "first frame");
        }
        // A non-finite clock reading repeats the last good time and never
        // becomes the start time.
        if now.is_finite() {
            let start = *self.started_at.get_or_insert(now);
            self.elapsed = (now - start).max(0.0);
        }
        let time = self.elapsed;

        self.field.step(&mut self.particles, time, self.radius);
        self.projector.advance(time, self.interaction.target());
        self.projector.project(
            &self.particles,
            self.center,
            self.radius,
            time,
            &mut self.projected,
        );
        self.renderer.draw(
            &mut self.surface,
            &self.particles,
            &mut self.projected,
            self.center,
            self.radius,
            time,
        );
        self.frames += 1;
        true
    }

    pub fn handle_event(&mut self, event: MountEvent) {
        match event {
            MountEvent::PointerMove { x, y } => self.pointer_move(x, y),
            MountEvent::PointerLeave => self.pointer_leave(),
            MountEvent::Resize { width, height } => self.resize(Size::new(width, height)),
            MountEvent::VisibilityChanged(visible) => self.set_page_visible(visible),
            MountEvent::Removed => self.tear_down(),
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.state == InstanceState::TornDown {
            return;
        }
        let bounds = self.surface.size();
        self.interaction.pointer_move(x, y, bounds);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    /// New container size. Radius and center follow; the particle count
    /// stays what it was at mount.
    pub fn resize(&mut self, size: Size) {
        if self.state == InstanceState::TornDown {
            return;
        }
        if !size.is_drawable() {
            tracing::debug!(
                tier = %self.tier,
                width = size.width,
                height = size.height,
                "ignoring resize to an undrawable size"
            );
            return;
        }
        self.surface.resize(size);
        self.layout();
        tracing::debug!(tier = %self.tier, radius = self.radius, "sphere resized");
    }

    /// Page visibility change. Only pausable instances react.
    pub fn set_page_visible(&mut self, visible: bool) {
        if !self.pausable {
            return;
        }
        match (self.state, visible) {
            (InstanceState::Uninitialized | InstanceState::Animating, false) => {
                self.state = InstanceState::Paused;
                tracing::debug!(tier = %self.tier, "paused");
            }
            (InstanceState::Paused, true) => {
                self.state = if self.frames > 0 {
                    InstanceState::Animating
                } else {
                    InstanceState::Uninitialized
                };
                tracing::debug!(tier = %self.tier, "resumed");
            }
            _ => {}
        }
    }

    /// Mount removed. Releases particle storage; the instance never draws again.
    pub fn tear_down(&mut self) {
        if self.state == InstanceState::TornDown {
            return;
        }
        self.state = InstanceState::TornDown;
        self.particles = Vec::new();
        self.projected = Vec::new();
        tracing::info!(tier = %self.tier, frames = self.frames, "sphere torn down");
    }

    pub fn state(&self) -> InstanceState {
        self.state
    }

    pub fn tier(&self) -> SizeTier {
        self.tier
    }

    pub fn is_pausable(&self) -> bool {
        self.pausable
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Seconds since the first frame with a finite timestamp.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    /// Smoothed interactive rotation `(rot_x, rot_y)`.
    pub fn rotation(&self) -> (f64, f64) {
        self.projector.rotation()
    }

    /// Pointer-driven target `(target_rot_x, target_rot_y)`.
    pub fn target_rotation(&self) -> (f64, f64) {
        self.interaction.target()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

/// Fold the 64-bit config seed into the noise lattice's 32-bit seed.
fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

// =============================================================================
// Tests
// =============================================================================
