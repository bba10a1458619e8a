//! Use cases (application services)

pub mod assistant;
pub mod assistant_handler;

#[cfg(test)]
pub(crate) mod testing;
