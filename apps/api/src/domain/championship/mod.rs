#![allow(clippy::module_inception)]

pub mod championship;

pub use championship::Championship;
