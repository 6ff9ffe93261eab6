pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod field;
pub mod motion;
pub mod orbit;
pub mod palette;
pub mod sky;
pub mod surface;
pub mod trail;

pub use clock::*;
pub use color::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use field::*;
pub use motion::*;
pub use orbit::*;
pub use palette::*;
pub use sky::*;
pub use surface::*;
pub use trail::*;
