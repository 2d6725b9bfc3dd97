pub mod states;
pub mod vector;
pub mod position;
pub mod node;
pub mod forces;
pub mod params;
pub mod shockwave;
pub mod world;
pub mod engine;
pub mod input;
pub mod scenario;
