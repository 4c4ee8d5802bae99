//! Command-line front end for the Kairos 777 brand asset generators.

pub mod cli;
