pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, OrbfieldError, RenderError};
pub use events::{EventQueue, MountEvent};
pub use types::{Color, InstanceId, Size, SizeTier};

pub type Result<T> = std::result::Result<T, OrbfieldError>;
