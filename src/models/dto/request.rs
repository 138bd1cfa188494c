use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{ExternalCategoryId, Ingredient};
use crate::services::quiz_selector::CategoryFilter;

// Clients send ids either as JSON numbers or as numeric strings.
fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// One-based page number; absent, non-numeric or zero values fall back to 1.
    pub fn page_number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

/// Body of `POST /questions`: a search when `searchTerm` is present,
/// otherwise a new question.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsPostBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub difficulty: Option<i64>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuestionsCommand {
    Search(String),
    Create(CreateQuestionRequest),
}

impl QuestionsPostBody {
    pub fn into_command(self) -> QuestionsCommand {
        match self.search_term.filter(|term| !term.is_empty()) {
            Some(term) => QuestionsCommand::Search(term),
            None => QuestionsCommand::Create(CreateQuestionRequest {
                question: self.question,
                answer: self.answer,
                category: self.category,
                difficulty: self.difficulty,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct CreateQuestionRequest {
    #[validate(required, length(min = 1, max = 1000))]
    pub question: Option<String>,

    #[validate(required, length(min = 1, max = 1000))]
    pub answer: Option<String>,

    /// Zero-based client category id.
    #[validate(required, range(min = 0))]
    pub category: Option<i64>,

    #[validate(required, range(min = 1, max = 5))]
    pub difficulty: Option<i64>,
}

impl CreateQuestionRequest {
    pub fn external_category(&self) -> ExternalCategoryId {
        ExternalCategoryId(self.category.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryInput {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategoryInput>,
}

impl QuizRequest {
    /// The "All" entry of the quiz UI is sent with type `click`.
    pub fn category_filter(&self) -> CategoryFilter {
        match &self.quiz_category {
            Some(QuizCategoryInput { id: Some(id), kind })
                if kind.as_deref() != Some("click") =>
            {
                CategoryFilter::Category(ExternalCategoryId(*id))
            }
            _ => CategoryFilter::All,
        }
    }
}

/// A recipe arrives either as a single ingredient or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecipeInput {
    One(Ingredient),
    Many(Vec<Ingredient>),
}

impl RecipeInput {
    pub fn into_ingredients(self) -> Vec<Ingredient> {
        match self {
            RecipeInput::One(ingredient) => vec![ingredient],
            RecipeInput::Many(ingredients) => ingredients,
        }
    }
}

fn validate_recipe(recipe: &RecipeInput) -> Result<(), ValidationError> {
    let ingredients: Vec<&Ingredient> = match recipe {
        RecipeInput::One(ingredient) => vec![ingredient],
        RecipeInput::Many(ingredients) => ingredients.iter().collect(),
    };

    if ingredients.is_empty() {
        return Err(ValidationError::new("empty_recipe"));
    }
    if ingredients
        .iter()
        .any(|i| i.name.trim().is_empty() || i.color.trim().is_empty() || i.parts == 0)
    {
        return Err(ValidationError::new("invalid_ingredient"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDrinkRequest {
    #[validate(required, length(min = 1, max = 80))]
    pub title: Option<String>,

    #[validate(required, custom(function = "validate_recipe"))]
    pub recipe: Option<RecipeInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDrinkRequest {
    #[validate(length(min = 1, max = 80))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_recipe"))]
    pub recipe: Option<RecipeInput>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActorRequest {
    #[validate(required, length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(required, range(min = 0, max = 150))]
    pub age: Option<u32>,

    #[validate(required, length(min = 1, max = 40))]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateActorRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(range(min = 0, max = 150))]
    pub age: Option<u32>,

    #[validate(length(min = 1, max = 40))]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(required, length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(required)]
    pub release_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub release_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastingRequest {
    #[serde(deserialize_with = "deserialize_required_i64")]
    pub actor_id: i64,
}

fn deserialize_required_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_lenient_i64(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("actor_id must not be null"))
}
