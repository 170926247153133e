pub mod cloud;
pub mod density;
pub mod displacement;
pub mod favicon;
pub mod instance;
pub mod interaction;
pub mod noise;
pub mod particle;
pub mod perf;
pub mod projector;
pub mod render;
pub mod scheduler;
pub mod style;
pub mod surface;

pub use cloud::{fibonacci_sphere, fibonacci_sphere_checked, Vec3};
pub use density::{DensityPolicy, MIN_CONTAINER_PX};
pub use displacement::{DisplacementParams, OrganicDisplacementField};
pub use favicon::{png_data_url, FaviconPublisher, IconImage, IconSink, PublishThrottle};
pub use instance::{InstanceState, MountSpec, SphereInstance};
pub use interaction::InteractionController;
pub use noise::{create_noise, GradientNoise, LayeredNoise, NoiseField};
pub use particle::{Palette, Particle};
pub use perf::FrameStats;
pub use projector::{ProjectedParticle, ProjectionParams, Projector};
pub use render::{depth_sort, Renderer};
pub use scheduler::{Animated, FrameScheduler, TickReport};
pub use style::TierStyle;
pub use surface::{DrawCall, DrawSurface, RasterSurface, RecordingSurface};
