//! Headless driver harness for the POPSHOT engine.
//!
//! Stands in for the host environment: a frame-loop thread playing the
//! display-refresh scheduler, an mpsc channel for controls, and a
//! shared slot holding the latest snapshot.

pub mod game_loop;
pub mod state;
