use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ExternalCategoryId, Question},
        dto::request::CreateQuestionRequest,
    },
    repositories::{CategoryRepository, QuestionRepository},
    services::{
        pagination::paginate,
        quiz_selector::{next_question, CategoryFilter},
    },
};

/// One page of questions plus the context the trivia client renders with it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Distinct external categories of the matched questions.
    pub current_category: Vec<ExternalCategoryId>,
    pub categories: Vec<String>,
}

pub struct TriviaService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    page_size: usize,
}

impl TriviaService {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        page_size: usize,
    ) -> Self {
        Self {
            questions,
            categories,
            page_size,
        }
    }

    async fn category_names(&self) -> AppResult<Vec<String>> {
        let categories = self.categories.find_all().await?;
        Ok(categories.into_iter().map(|c| c.kind).collect())
    }

    async fn page_of(
        &self,
        matched: Vec<Question>,
        page: usize,
        current_category: Option<Vec<ExternalCategoryId>>,
    ) -> AppResult<QuestionPage> {
        let total_questions = matched.len();
        let current_category = current_category.unwrap_or_else(|| {
            matched
                .iter()
                .map(|q| q.category.to_external())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        });

        Ok(QuestionPage {
            questions: paginate(matched, page, self.page_size),
            total_questions,
            current_category,
            categories: self.category_names().await?,
        })
    }

    /// A page past the end of a non-empty result is not found; an empty
    /// first page is a valid answer.
    fn within_range(result: QuestionPage, page: usize) -> AppResult<QuestionPage> {
        if result.questions.is_empty() && page > 1 {
            return Err(AppError::NotFound(format!(
                "No questions on page {} of {}",
                page, result.total_questions
            )));
        }
        Ok(result)
    }

    /// Category labels ordered by id; index `i` is external category `i`.
    pub async fn list_categories(&self) -> AppResult<Vec<String>> {
        let names = self.category_names().await?;
        if names.is_empty() {
            return Err(AppError::NotFound("No categories".to_string()));
        }
        Ok(names)
    }

    pub async fn list_questions(&self, page: usize) -> AppResult<QuestionPage> {
        let all = self.questions.find_all().await?;
        let result = self.page_of(all, page, None).await?;

        if result.questions.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }
        Ok(result)
    }

    pub async fn search_questions(&self, term: &str, page: usize) -> AppResult<QuestionPage> {
        let matched = self.questions.search(term).await?;
        log::debug!("Search '{}' matched {} questions", term, matched.len());
        Self::within_range(self.page_of(matched, page, None).await?, page)
    }

    pub async fn questions_in_category(
        &self,
        category: ExternalCategoryId,
        page: usize,
    ) -> AppResult<QuestionPage> {
        let internal = category.to_internal();
        if self.categories.find_by_id(internal).await?.is_none() {
            return Err(AppError::NotFound(format!("Category {} not found", category.0)));
        }

        let matched = self.questions.find_by_category(internal).await?;
        let result = self.page_of(matched, page, Some(vec![category])).await?;
        Self::within_range(result, page)
    }

    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
        page: usize,
    ) -> AppResult<QuestionPage> {
        request.validate()?;

        let category = request.external_category().to_internal();
        if self.categories.find_by_id(category).await?.is_none() {
            return Err(AppError::Unprocessable(format!(
                "Category {} does not exist",
                request.external_category().0
            )));
        }

        let question = Question::new(
            request.question.as_deref().unwrap_or_default(),
            request.answer.as_deref().unwrap_or_default(),
            category,
            request.difficulty.unwrap_or_default() as i32,
        );
        let created = self
            .questions
            .create(question)
            .await
            .map_err(AppError::into_unprocessable)?;
        log::info!("Created question {}", created.id);

        let all = self.questions.find_all().await?;
        Self::within_range(self.page_of(all, page, None).await?, page)
    }

    pub async fn delete_question(&self, id: i64, page: usize) -> AppResult<QuestionPage> {
        self.questions
            .delete(id)
            .await
            .map_err(AppError::into_unprocessable)?;
        log::info!("Deleted question {}", id);

        let all = self.questions.find_all().await?;
        Self::within_range(self.page_of(all, page, None).await?, page)
    }

    /// Next quiz question, or `None` once every matching question was asked.
    pub async fn next_quiz_question(
        &self,
        filter: CategoryFilter,
        previous_questions: &[i64],
    ) -> AppResult<Option<Question>> {
        let pool = match filter {
            CategoryFilter::All => self.questions.find_all().await?,
            CategoryFilter::Category(external) => {
                self.questions.find_by_category(external.to_internal()).await?
            }
        };
        let excluded: HashSet<i64> = previous_questions.iter().copied().collect();

        Ok(next_question(pool, filter, &excluded, &mut rand::thread_rng()))
    }
}
