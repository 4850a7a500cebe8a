//! Domain DTOs for the heroes API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A hero as stored by the backend. The id is assigned by the server on add
/// and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

/// Request payload for adding a hero. The backend picks the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Anything that identifies a hero for a delete: the hero itself or its id.
pub trait HeroRef {
    fn hero_id(&self) -> u32;
}

impl HeroRef for u32 {
    fn hero_id(&self) -> u32 {
        *self
    }
}

impl HeroRef for Hero {
    fn hero_id(&self) -> u32 {
        self.id
    }
}

impl<T: HeroRef + ?Sized> HeroRef for &T {
    fn hero_id(&self) -> u32 {
        (**self).hero_id()
    }
}
