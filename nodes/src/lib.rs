pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Boundaries, NVec2, Rgba};
pub use simulation::vector::Vector;
pub use simulation::position::Position;
pub use simulation::node::Node;
pub use simulation::forces::{Force, RadialImpulse, UniformGravity};
pub use simulation::params::Parameters;
pub use simulation::shockwave::{Phase, ShockWave};
pub use simulation::world::{Frame, NodeTemplate, World};
pub use simulation::engine::Engine;
pub use simulation::input::{KeyCommand, Pointer, PointerEvent};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, GravityConfig, NodeConfig, ScenarioConfig, ShockWaveConfig, WorldConfig};

pub use visualization::nodes_vis2d::run_2d;

pub use benchmark::benchmark::{bench_blast_curve, bench_update};
