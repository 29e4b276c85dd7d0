pub mod sweep;

pub use sweep::{handle_sweep, sweep_to};
