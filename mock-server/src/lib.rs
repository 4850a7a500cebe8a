use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub use axum::Router;

/// Id handed out when the collection is empty.
const FIRST_ID: u32 = 11;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

/// Router over an empty collection.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router preloaded with the tutorial roster.
pub fn seeded_app() -> Router {
    app_with(seed_heroes())
}

pub fn app_with(heroes: Vec<Hero>) -> Router {
    let db: Db = Arc::new(RwLock::new(
        heroes.into_iter().map(|hero| (hero.id, hero)).collect(),
    ));
    Router::new()
        .route(
            "/api/heroes",
            get(list_heroes).post(add_hero).put(update_hero),
        )
        .route("/api/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub fn seed_heroes() -> Vec<Hero> {
    [
        "Dr. Nice",
        "Bombasto",
        "Celeritas",
        "Magneta",
        "RubberMan",
        "Dynama",
        "Dr. IQ",
        "Magma",
        "Tornado",
        "Narco",
    ]
    .into_iter()
    .zip(12..)
    .map(|(name, id)| Hero {
        id,
        name: name.to_string(),
    })
    .collect()
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Settings for the standalone binary, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub seed: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, std::io::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, std::io::Error> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("invalid PORT {raw:?}: {e}"),
                )
            })?,
            None => 3000,
        };
        let seed = lookup("HEROES_SEED").map(|v| v != "0").unwrap_or(true);
        Ok(Self { port, seed })
    }

    pub fn app(&self) -> Router {
        if self.seed {
            seeded_app()
        } else {
            app()
        }
    }
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let needle = params.name.map(|term| term.to_lowercase());
    let found: Vec<Hero> = heroes
        .values()
        .filter(|hero| match &needle {
            Some(term) => hero.name.to_lowercase().contains(term.as_str()),
            None => true,
        })
        .cloned()
        .collect();
    debug!(count = found.len(), "listed heroes");
    Json(found)
}

async fn add_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let id = heroes
        .last_key_value()
        .map(|(id, _)| id + 1)
        .unwrap_or(FIRST_ID);
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    debug!(id, "added hero");
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let hero = heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    hero.name = input.name;
    debug!(id = hero.id, "updated hero");
    Ok(Json(hero.clone()))
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(_) => {
            debug!(id, "deleted hero");
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_serializes_to_json() {
        let hero = Hero {
            id: 12,
            name: "Dr. Nice".to_string(),
        };
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 12, "name": "Dr. Nice" }));
    }

    #[test]
    fn new_hero_rejects_missing_name() {
        let result: Result<NewHero, _> = serde_json::from_str(r#"{"id":3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seed_roster_starts_at_twelve() {
        let heroes = seed_heroes();
        assert_eq!(heroes.len(), 10);
        assert_eq!(heroes[0].id, 12);
        assert_eq!(heroes[0].name, "Dr. Nice");
        assert_eq!(heroes[9].id, 21);
    }

    #[test]
    fn server_config_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig { port: 3000, seed: true });
    }

    #[test]
    fn server_config_reads_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("8081".to_string()),
            "HEROES_SEED" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config, ServerConfig { port: 8081, seed: false });
    }

    #[test]
    fn server_config_rejects_bad_port() {
        let err = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
