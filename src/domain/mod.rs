// Domain layer - Core business logic

pub mod arguments;
pub mod errors;
pub mod model;
pub mod rules;
