use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{ExternalCategoryId, Question};

/// Which questions a quiz draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(ExternalCategoryId),
}

impl CategoryFilter {
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(external) => question.category == external.to_internal(),
        }
    }
}

/// Picks the next quiz question uniformly at random from the questions that
/// match `filter` and are not in `excluded_ids`. `None` means the quiz is over.
pub fn next_question<R>(
    questions: Vec<Question>,
    filter: CategoryFilter,
    excluded_ids: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<Question> = questions
        .into_iter()
        .filter(|q| filter.matches(q))
        .filter(|q| !excluded_ids.contains(&q.id))
        .collect();

    remaining.choose(rng).cloned()
}
