use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Actor {
    pub fn new(name: &str, age: u32, gender: &str) -> Self {
        Actor {
            id: 0,
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: DateTime<Utc>,
    #[serde(default)]
    pub actors: Vec<i64>, // cast, by actor id
}

impl Movie {
    pub fn new(title: &str, release_date: DateTime<Utc>) -> Self {
        Movie {
            id: 0,
            title: title.to_string(),
            release_date,
            actors: Vec::new(),
        }
    }

    /// Adds the actor to the cast. Returns false if already cast.
    pub fn cast(&mut self, actor_id: i64) -> bool {
        if self.actors.contains(&actor_id) {
            return false;
        }
        self.actors.push(actor_id);
        true
    }

    /// Removes the actor from the cast. Returns false if not cast.
    pub fn uncast(&mut self, actor_id: i64) -> bool {
        let before = self.actors.len();
        self.actors.retain(|id| *id != actor_id);
        self.actors.len() != before
    }
}
