mod creator_builder;

pub use creator_builder::*;
