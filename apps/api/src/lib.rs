//! SC Internacional API Library
//!
//! HTTP backend for football teams and championships backed by MongoDB,
//! layered as handlers, services and repositories.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
