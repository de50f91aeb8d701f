pub mod collision;
pub mod countdown;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use countdown::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
