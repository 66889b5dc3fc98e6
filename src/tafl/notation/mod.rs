mod moves;

pub mod types
{
    pub use super::moves::Move;
}
