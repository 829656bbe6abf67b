//! `ksum`: zero-sum counters, sorting baselines and the harness that times them.

pub mod cli;
