//! Background Tasks Module
//!
//! Contains the tasks spawned alongside request handling.
//!
//! # Tasks
//! - Auction closure: completes an auction once its interval has elapsed

mod closure;

pub use closure::{run_closure, spawn_closure_task, ClosureOutcome};
