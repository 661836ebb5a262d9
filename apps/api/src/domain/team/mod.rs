// Team domain module
// Contains the team entity and its emptiness predicate

#![allow(clippy::module_inception)]

pub mod team;

pub use team::{zero_timestamp, Team};
