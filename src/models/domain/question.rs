use serde::{Deserialize, Serialize};

use crate::models::domain::category::CategoryId;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64, // 0 until the repository assigns one
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Question {
    pub fn new(question: &str, answer: &str, category: CategoryId, difficulty: i32) -> Self {
        Question {
            id: 0,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
