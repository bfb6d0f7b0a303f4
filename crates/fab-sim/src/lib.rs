//! `fab-sim` — tick loop orchestrator for the fab production-line simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Belt     — refresh, snapshot every position, shift right by one,
//!                refresh so cells are open for workers.
//!   ② Workers  — each worker ticks exactly once, in construction order
//!                (cell 0 workers first, then cell 1, …).  Within a shared
//!                cell the earlier worker always wins.
//! ```
//!
//! No step runs in parallel: the result of a run is a pure function of the
//! configuration and the source's draw stream.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fab_core::SimConfig;
//! use fab_sim::{NoopObserver, Simulation};
//!
//! let mut sim = Simulation::from_config(SimConfig::new(100, 3, 2).with_seed(42))?;
//! sim.run(&mut NoopObserver)?;
//! let stats = sim.stats();
//! assert!(stats.is_conserved());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TallyLogger};
pub use sim::Simulation;
pub use stats::SimStats;
