use serde::Serialize;

use crate::models::domain::{Actor, Drink, ExternalCategoryId, Movie, Question};

/// Question as exposed to clients: the category is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: ExternalCategoryId,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            question: question.question,
            answer: question.answer,
            category: question.category.to_external(),
            difficulty: question.difficulty,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: Vec<ExternalCategoryId>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientShort {
    pub color: String,
    pub parts: u32,
}

/// Public drink view: colors and proportions only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkShort {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<IngredientShort>,
}

impl From<Drink> for DrinkShort {
    fn from(drink: Drink) -> Self {
        DrinkShort {
            id: drink.id,
            title: drink.title,
            recipe: drink
                .recipe
                .into_iter()
                .map(|i| IngredientShort {
                    color: i.color,
                    parts: i.parts,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T: Serialize> {
    pub success: bool,
    pub drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: String,
}

impl DeleteResponse {
    pub fn new(id: i64) -> Self {
        DeleteResponse {
            success: true,
            delete: id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActorsResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub success: bool,
    pub actor: Actor,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub success: bool,
    pub movie: Movie,
}
