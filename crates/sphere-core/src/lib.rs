pub mod burst;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod instance;
pub mod interaction;
pub mod picking;
pub mod scene;
pub mod smoothing;
pub mod sphere;
pub mod starfield;
pub mod supervisor;

pub use camera::Camera;
pub use config::{Complexity, SceneConfig};
pub use constants::*;
pub use error::{ConfigError, SceneError};
pub use interaction::InteractionMode;
pub use scene::{FrameInput, RenderState, SceneEvent, SphereScene};
pub use supervisor::{Fallback, Presenter, Status, Supervised};
