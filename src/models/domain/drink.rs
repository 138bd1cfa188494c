use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Drink {
    pub id: i64,
    pub title: String, // unique
    pub recipe: Vec<Ingredient>,
}

impl Drink {
    pub fn new(title: &str, recipe: Vec<Ingredient>) -> Self {
        Drink {
            id: 0,
            title: title.to_string(),
            recipe,
        }
    }
}
