mod pet;
mod vaccination;
mod violation;

pub use pet::*;
pub use vaccination::*;
pub use violation::*;
