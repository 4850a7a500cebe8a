//! The heroes gateway: one request per call, one log line per completed
//! request, and failures folded into a fallback value.
//!
//! # Design
//! `HeroService` pairs the sans-IO `HeroClient` with a `Transport` and a
//! `MessageService`, all passed in by the caller. Every operation runs
//! through `handle_error`, which turns any `ApiError` into
//! `Outcome::Fallback` after reporting it to `tracing` and the message log.
//! Nothing here retries, times out or orders concurrent calls; that is left
//! to the transport and the backend.

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, error};

use crate::client::HeroClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::messages::MessageService;
use crate::outcome::Outcome;
use crate::transport::Transport;
use crate::types::{Hero, HeroRef, NewHero};

pub struct HeroService {
    client: HeroClient,
    transport: Arc<dyn Transport>,
    messages: MessageService,
}

impl HeroService {
    pub fn new(client: HeroClient, transport: Arc<dyn Transport>, messages: MessageService) -> Self {
        Self {
            client,
            transport,
            messages,
        }
    }

    pub fn from_config(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::new(
            HeroClient::with_collection(&config.base_url, &config.collection_path),
            transport,
            MessageService::with_capacity(config.message_capacity),
        )
    }

    pub fn client(&self) -> &HeroClient {
        &self.client
    }

    /// The log this service writes to. Clone it to hand a reader to the UI.
    pub fn messages(&self) -> &MessageService {
        &self.messages
    }

    pub async fn get_heroes(&self) -> Outcome<Vec<Hero>> {
        self.handle_error("getHeroes", Vec::new(), || async {
            let response = self.transport.execute(self.client.build_list_heroes()).await?;
            let heroes = self.client.parse_list_heroes(response)?;
            self.log("fetched heroes");
            Ok::<_, ApiError>(heroes)
        })
        .await
    }

    /// Resolves to `None` if the backend has no hero with this id.
    pub async fn get_hero(&self, id: u32) -> Outcome<Option<Hero>> {
        self.handle_error(&format!("getHero id={id}"), None, || async {
            let response = self.transport.execute(self.client.build_get_hero(id)).await?;
            let hero = self.client.parse_get_hero(response)?;
            self.log(format!("fetched hero id={id}"));
            Ok::<_, ApiError>(Some(hero))
        })
        .await
    }

    pub async fn add_hero(&self, hero: &NewHero) -> Outcome<Option<Hero>> {
        self.handle_error("addHero", None, || async {
            let request = self.client.build_add_hero(hero)?;
            let response = self.transport.execute(request).await?;
            let created = self.client.parse_add_hero(response)?;
            self.log(format!("added hero w/ id={}", created.id));
            Ok::<_, ApiError>(Some(created))
        })
        .await
    }

    /// Accepts a `Hero`, `&Hero` or bare id; all issue the same request.
    pub async fn delete_hero(&self, hero: impl HeroRef) -> Outcome<Option<()>> {
        let id = hero.hero_id();
        self.handle_error("deleteHero", None, || async {
            let response = self.transport.execute(self.client.build_delete_hero(id)).await?;
            self.client.parse_delete_hero(response)?;
            self.log(format!("deleted hero id={id}"));
            Ok::<_, ApiError>(Some(()))
        })
        .await
    }

    /// Heroes whose name contains `term`. A blank term resolves to an empty
    /// list at once, without a request or a log line.
    pub async fn search_heroes(&self, term: &str) -> Outcome<Vec<Hero>> {
        if term.trim().is_empty() {
            return Outcome::Fetched(Vec::new());
        }
        self.handle_error("searchHeroes", Vec::new(), || async {
            let response = self
                .transport
                .execute(self.client.build_search_heroes(term))
                .await?;
            let heroes = self.client.parse_search_heroes(response)?;
            if heroes.is_empty() {
                self.log(format!("no heroes matching \"{term}\""));
            } else {
                self.log(format!("found heroes matching \"{term}\""));
            }
            Ok::<_, ApiError>(heroes)
        })
        .await
    }

    pub async fn update_hero(&self, hero: &Hero) -> Outcome<Option<()>> {
        self.handle_error("updateHero", None, || async {
            let request = self.client.build_update_hero(hero)?;
            let response = self.transport.execute(request).await?;
            self.client.parse_update_hero(response)?;
            self.log(format!("updated hero id={}", hero.id));
            Ok::<_, ApiError>(Some(()))
        })
        .await
    }

    /// Runs `request`; on failure reports the cause and resolves to
    /// `fallback` instead of propagating the error.
    async fn handle_error<T, F, Fut>(&self, operation: &str, fallback: T, request: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        match request().await {
            Ok(value) => Outcome::Fetched(value),
            Err(cause) => {
                error!(operation, error = %cause, "hero request failed");
                self.log(format!("{operation} failed: {cause}"));
                Outcome::Fallback {
                    value: fallback,
                    cause,
                }
            }
        }
    }

    fn log(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "hero service");
        self.messages.add(message);
    }
}
