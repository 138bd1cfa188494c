use actix_web::{web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::Caller,
    errors::AppError,
    models::dto::{
        request::{CreateDrinkRequest, UpdateDrinkRequest},
        response::{DeleteResponse, DrinkShort, DrinksResponse},
    },
};

pub async fn list_drinks(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let drinks = state.drink_service.list().await?;
    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: drinks.into_iter().map(DrinkShort::from).collect(),
    }))
}

pub async fn list_drinks_detail(
    state: web::Data<AppState>,
    caller: Caller,
) -> Result<HttpResponse, AppError> {
    caller.require("get:drinks-detail")?;

    let drinks = state.drink_service.list().await?;
    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks,
    }))
}

pub async fn create_drink(
    state: web::Data<AppState>,
    caller: Caller,
    request: web::Json<CreateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("post:drinks")?;

    let drink = state.drink_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: vec![drink],
    }))
}

pub async fn update_drink(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
    request: web::Json<UpdateDrinkRequest>,
) -> Result<HttpResponse, AppError> {
    caller.require("patch:drinks")?;

    let drink = state
        .drink_service
        .update(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(DrinksResponse {
        success: true,
        drinks: vec![drink],
    }))
}

pub async fn delete_drink(
    state: web::Data<AppState>,
    caller: Caller,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    caller.require("delete:drinks")?;

    let id = id.into_inner();
    state.drink_service.delete(id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse::new(id)))
}
