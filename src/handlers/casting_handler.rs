use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::Caller,
    errors::AppError,
    models::dto::{
        request::{
            CastingRequest, CreateActorRequest, CreateMovieRequest, UpdateActorRequest,
            UpdateMovieRequest,
        },
        response::{ActorResponse, ActorsResponse, DeleteResponse, MovieResponse, MoviesResponse},
    },
};

pub async fn list_actors(
    state: web::Data<AppState>,
    caller: Caller,
) -> Result<HttpResponse, AppError> {
    caller.require("get:actors")?;

    let actors = state.casting_service.list_actors().await?;
    Ok(HttpResponse::Ok().json(ActorsResponse {
        success: true,
        actors,
    }))
}

pub async fn get_actor(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    caller.require("get:actors")?;

    let actor = state.casting_service.get_actor(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ActorResponse {
        success: true,
        actor,
    }))
}

pub async fn create_actor(
    state: web::Data<AppState>,
    caller: Caller,
    request: web::Json<CreateActorRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("post:actors")?;

    let actor = state
        .casting_service
        .create_actor(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ActorsResponse {
        success: true,
        actors: vec![actor],
    }))
}

pub async fn update_actor(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
    request: web::Json<UpdateActorRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("patch:actors")?;

    let actor = state
        .casting_service
        .update_actor(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ActorResponse {
        success: true,
        actor,
    }))
}

pub async fn delete_actor(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    caller.require("delete:actors")?;

    let id = id.into_inner();
    state.casting_service.delete_actor(id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse::new(id)))
}

pub async fn list_movies(
    state: web::Data<AppState>,
    caller: Caller,
) -> Result<HttpResponse, AppError> {
    caller.require("get:movies")?;

    let movies = state.casting_service.list_movies().await?;
    Ok(HttpResponse::Ok().json(MoviesResponse {
        success: true,
        movies,
    }))
}

pub async fn get_movie(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    caller.require("get:movies")?;

    let movie = state.casting_service.get_movie(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie,
    }))
}

pub async fn create_movie(
    state: web::Data<AppState>,
    caller: Caller,
    request: web::Json<CreateMovieRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("post:movies")?;

    let movie = state
        .casting_service
        .create_movie(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MoviesResponse {
        success: true,
        movies: vec![movie],
    }))
}

pub async fn update_movie(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
    request: web::Json<UpdateMovieRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("patch:movies")?;

    let movie = state
        .casting_service
        .update_movie(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie,
    }))
}

pub async fn delete_movie(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    caller.require("delete:movies")?;

    let id = id.into_inner();
    state.casting_service.delete_movie(id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse::new(id)))
}

pub async fn cast_actor(
    state: web::Data<AppState>,
    caller: Caller,
    movie_id: web::Path<i64>,
    request: web::Json<CastingRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("post:castings")?;

    let movie = state
        .casting_service
        .cast_actor(movie_id.into_inner(), request.actor_id)
        .await?;
    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie,
    }))
}

pub async fn uncast_actor(
    state: web::Data<AppState>,
    caller: Caller,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    caller.require("delete:castings")?;

    let (movie_id, actor_id) = path.into_inner();
    let movie = state
        .casting_service
        .uncast_actor(movie_id, actor_id)
        .await?;
    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie,
    }))
}
