//! Integration tests for the MongoDB repositories
//!
//! These need a running MongoDB reachable through `MONGO_URI`:
//!
//! ```text
//! MONGO_URI=mongodb://localhost:27017 cargo test -- --ignored
//! ```

use chrono::{TimeZone, Utc};
use sc_internacional_api::config::Config;
use sc_internacional_api::domain::championship::Championship;
use sc_internacional_api::domain::repositories::{
    ChampionshipRepository, TeamReader, TeamWriter,
};
use sc_internacional_api::domain::team::Team;
use sc_internacional_api::domain::DocumentId;
use sc_internacional_api::infrastructure::database;
use sc_internacional_api::infrastructure::repositories::{
    MongoChampionshipRepository, MongoTeamRepository,
};
use mongodb::Database;

/// Connect to the test database
async fn setup_test_db() -> Database {
    let config = Config {
        mongo_uri: std::env::var("MONGO_URI").expect("MONGO_URI must be set for integration tests"),
        db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "sc_internacional_test".to_string()),
        port: 0,
        log_level: "debug".to_string(),
    };

    database::connect(&config)
        .await
        .expect("Failed to connect to test database")
}

fn team(name: &str) -> Team {
    Team::new(
        name,
        format!("{name} Futebol Clube"),
        format!("{}.com.br", name.to_lowercase()),
        Utc.with_ymd_and_hms(1909, 4, 4, 0, 0, 0).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
#[ignore = "requires a running MongoDB (MONGO_URI)"]
async fn test_team_repository_create_and_get() {
    let db = setup_test_db().await;
    let repo = MongoTeamRepository::new(&db);

    let created = repo
        .create_team(team("Internacional"))
        .await
        .expect("Failed to create team");
    let id = created.id().expect("store should assign an id").clone();

    assert_eq!(created.name(), "Internacional");

    let found = repo.get_team(&id).await.expect("Failed to get team");
    assert_eq!(found, Some(created.clone()));

    let all = repo.get_all_teams().await.expect("Failed to list teams");
    assert!(all.iter().any(|t| t.id() == Some(&id)));
}

#[tokio::test]
#[ignore = "requires a running MongoDB (MONGO_URI)"]
async fn test_team_repository_get_absent_id() {
    let db = setup_test_db().await;
    let repo = MongoTeamRepository::new(&db);

    // Valid shape, never issued by this store
    let id = DocumentId::parse("000000000000000000000000").unwrap();

    assert_eq!(repo.get_team(&id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires a running MongoDB (MONGO_URI)"]
async fn test_team_repository_ignores_caller_supplied_id() {
    let db = setup_test_db().await;
    let repo = MongoTeamRepository::new(&db);
    let supplied = DocumentId::parse("000000000000000000000001").unwrap();

    let created = repo
        .create_team(team("Juventude").with_id(supplied.clone()))
        .await
        .unwrap();

    assert_ne!(created.id(), Some(&supplied));
}

#[tokio::test]
#[ignore = "requires a running MongoDB (MONGO_URI)"]
async fn test_championship_repository_create_and_get() {
    let db = setup_test_db().await;
    let repo = MongoChampionshipRepository::new(&db);
    let championship =
        Championship::new("Campeonato Gaúcho", "2024", vec![team("Internacional")]).unwrap();

    let created = repo.create_championship(championship).await.unwrap();
    let id = created.id().unwrap().clone();

    let found = repo.get_championship(&id).await.unwrap();
    assert_eq!(found, Some(created));
}
