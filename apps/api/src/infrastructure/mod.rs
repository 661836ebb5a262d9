// Infrastructure layer module
// Contains the document store adapters

pub mod database;
pub mod repositories;
