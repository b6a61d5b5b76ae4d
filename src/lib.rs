//! Monte Carlo simulation of the Monty Hall problem.
//!
//! Plays the three-door game repeatedly, scoring the stay and switch
//! strategies against the same draw of randomness every round, and
//! aggregates the win/lose proportions per strategy.
//!
//! ## Core Types
//!
//! - [`Door`] — One of the three doors, numbered 1–3
//! - [`Label`] — What a door hides: the car or a goat
//! - [`Arrangement`] — The hidden car/goat mapping for one round
//! - [`Host`] — Opens a goat door the contestant did not pick
//! - [`Strategy`] — Stay with the pick or switch to the last closed door
//! - [`Outcome`] — Win or lose for one strategy in one round
//!
//! ## Simulation
//!
//! - [`Round`] — One play-through scoring both strategies (paired design)
//! - [`Simulation`] — Sequential batch driver owning the RNG
//! - [`ResultSet`] — Ordered raw records, two per round
//! - [`Table`] — Derived win/lose proportions, rows summing to one
//!
//! All sampling goes through an injected `rand::Rng`, so seeded runs
//! replay exactly.

mod arrangement;
mod batch;
mod door;
mod host;
mod label;
mod outcome;
mod results;
mod round;
mod strategy;
mod table;

pub use arrangement::*;
pub use batch::*;
pub use door::*;
pub use host::*;
pub use label::*;
pub use outcome::*;
pub use results::*;
pub use round::*;
pub use strategy::*;
pub use table::*;

/// Probability values in [0, 1].
pub type Probability = f64;

/// Rounds played when the caller does not say otherwise.
pub const DEFAULT_ROUNDS: usize = 100;

/// Initialize terminal logging at INFO level.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
