//! Creator records and the lookup/store capabilities around them.

mod adaptors;
mod lookup;
mod model;
mod store;

pub use adaptors::*;
pub use lookup::*;
pub use model::*;
pub use store::*;
