pub mod config;
pub mod driver;
pub mod field;
pub mod palette;
pub mod particle;
pub mod surface;

pub use config::*;
pub use driver::*;
pub use field::*;
pub use palette::*;
pub use particle::*;
pub use surface::*;
