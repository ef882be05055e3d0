pub mod api;
pub mod bridge;
pub mod celebration;
pub mod config;
pub mod core;
pub mod extensions;
pub mod input;
pub mod page;
pub mod particles;
pub mod session;
pub mod systems;
pub mod terminal;

// Re-export key types at crate root for convenience
pub use api::context::{PageConfig, PageContext};
pub use api::types::{PageEvent, SoundEvent};
pub use bridge::protocol::ProtocolLayout;
pub use celebration::Celebration;
pub use config::{ConfigError, QuestionConfig, SessionConfig};
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use extensions::{ease, lerp, Easing};
pub use input::queue::{InputEvent, InputQueue};
pub use page::Page;
pub use particles::{Firework, Flower, Heart, Particle, ParticleEngine, Viewport};
pub use session::{Challenge, ChallengeRegistry, Phase, Session, Submission};
pub use systems::surface::SurfaceFx;
pub use systems::vector::{VectorColor, VectorState, VectorVertex};
pub use terminal::{Cue, LineStyle, LineUpdate, Script, Terminal};
