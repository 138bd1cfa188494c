use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ExternalCategoryId,
        dto::{
            request::{PageQuery, QuestionsCommand, QuestionsPostBody, QuizRequest},
            response::{CategoriesResponse, QuestionListResponse, QuizResponse},
        },
    },
    services::QuestionPage,
};

fn list_response(page: QuestionPage) -> QuestionListResponse {
    QuestionListResponse {
        success: true,
        questions: page.questions.into_iter().map(Into::into).collect(),
        total_questions: page.total_questions,
        current_category: page.current_category,
        categories: page.categories,
    }
}

pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let categories = state.trivia_service.list_categories().await?;
    Ok(HttpResponse::Ok().json(CategoriesResponse {
        success: true,
        categories,
    }))
}

pub async fn list_questions(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .trivia_service
        .list_questions(query.page_number())
        .await?;
    Ok(HttpResponse::Ok().json(list_response(page)))
}

pub async fn delete_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .trivia_service
        .delete_question(id.into_inner(), query.page_number())
        .await?;
    Ok(HttpResponse::Ok().json(list_response(page)))
}

/// Searches when the body carries `searchTerm`, creates a question otherwise.
pub async fn post_questions(
    state: web::Data<AppState>,
    body: web::Json<QuestionsPostBody>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page_number = query.page_number();

    let page = match body.into_inner().into_command() {
        QuestionsCommand::Search(term) => {
            state
                .trivia_service
                .search_questions(&term, page_number)
                .await?
        }
        QuestionsCommand::Create(request) => {
            state
                .trivia_service
                .create_question(request, page_number)
                .await?
        }
    };
    Ok(HttpResponse::Ok().json(list_response(page)))
}

pub async fn questions_by_category(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let page = state
        .trivia_service
        .questions_in_category(ExternalCategoryId(id.into_inner()), query.page_number())
        .await?;
    Ok(HttpResponse::Ok().json(list_response(page)))
}

pub async fn play_quiz(
    state: web::Data<AppState>,
    body: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let question = state
        .trivia_service
        .next_quiz_question(request.category_filter(), &request.previous_questions)
        .await?;

    Ok(HttpResponse::Ok().json(QuizResponse {
        success: true,
        question: question.map(Into::into),
    }))
}
