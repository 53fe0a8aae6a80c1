pub mod engine;
pub mod round;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
