pub mod membership;
pub mod share;
pub mod state;

pub use membership::*;
pub use share::*;
pub use state::*;
