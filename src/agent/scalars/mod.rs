pub mod depth;
pub mod scores;

pub use depth::*;
pub use scores::consts::*;
