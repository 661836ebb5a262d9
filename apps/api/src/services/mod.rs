// Service layer
// Orchestrates repository calls; the seam for future business rules

pub mod championship_service;
pub mod team_service;

pub use championship_service::{ChampionshipService, DefaultChampionshipService};
pub use team_service::{DefaultTeamService, TeamService};
