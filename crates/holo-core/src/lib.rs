pub mod arbiter;
pub mod config;
pub mod constants;
pub mod engine;
pub mod layers;
pub mod motion;
pub mod normalize;
pub mod params;
pub mod smoother;
pub static CARD_WGSL: &str = include_str!("../shaders/card.wgsl");

pub use arbiter::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use layers::*;
pub use motion::*;
pub use normalize::*;
pub use params::*;
pub use smoother::*;
