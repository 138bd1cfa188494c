use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::{
    errors::AppError,
    handlers::{
        casting_handler, drink_handler, health_check, method_not_allowed, not_found,
        trivia_handler,
    },
};

/// Allows any origin with the headers and verbs the web clients send.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .allowed_methods(vec!["GET", "PUT", "POST", "PATCH", "DELETE", "OPTIONS"])
        .max_age(3600)
}

fn resource(path: &str) -> actix_web::Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

/// Registers every API route plus the 400/404/405 fallbacks.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::NotFound(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(resource("/health").route(web::get().to(health_check)));

    // trivia
    cfg.service(resource("/categories").route(web::get().to(trivia_handler::list_categories)))
        .service(
            resource("/categories/{id}/questions")
                .route(web::get().to(trivia_handler::questions_by_category)),
        )
        .service(
            resource("/questions")
                .route(web::get().to(trivia_handler::list_questions))
                .route(web::post().to(trivia_handler::post_questions)),
        )
        .service(
            resource("/questions/{id}").route(web::delete().to(trivia_handler::delete_question)),
        )
        .service(resource("/quizzes").route(web::post().to(trivia_handler::play_quiz)));

    // coffee shop
    cfg.service(
        resource("/drinks")
            .route(web::get().to(drink_handler::list_drinks))
            .route(web::post().to(drink_handler::create_drink)),
    )
    .service(resource("/drinks-detail").route(web::get().to(drink_handler::list_drinks_detail)))
    .service(
        resource("/drinks/{id}")
            .route(web::patch().to(drink_handler::update_drink))
            .route(web::delete().to(drink_handler::delete_drink)),
    );

    // casting agency
    cfg.service(
        resource("/actors")
            .route(web::get().to(casting_handler::list_actors))
            .route(web::post().to(casting_handler::create_actor)),
    )
    .service(
        resource("/actors/{id}")
            .route(web::get().to(casting_handler::get_actor))
            .route(web::patch().to(casting_handler::update_actor))
            .route(web::delete().to(casting_handler::delete_actor)),
    )
    .service(
        resource("/movies")
            .route(web::get().to(casting_handler::list_movies))
            .route(web::post().to(casting_handler::create_movie)),
    )
    .service(
        resource("/movies/{id}")
            .route(web::get().to(casting_handler::get_movie))
            .route(web::patch().to(casting_handler::update_movie))
            .route(web::delete().to(casting_handler::delete_movie)),
    )
    .service(resource("/movies/{id}/actors").route(web::post().to(casting_handler::cast_actor)))
    .service(
        resource("/movies/{id}/actors/{actor_id}")
            .route(web::delete().to(casting_handler::uncast_actor)),
    );

    cfg.default_service(web::to(not_found));
}
