//! A small meadow populated by critters that graze, rest and wander.
//!
//! The binary drives the simulation from the command line; the library half
//! exists so the world and the critter tree can be tested directly.

#![forbid(unsafe_code)]

pub mod meadow;
pub mod sim;
