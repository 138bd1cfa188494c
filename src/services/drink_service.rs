use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Drink,
        dto::request::{CreateDrinkRequest, UpdateDrinkRequest},
    },
    repositories::DrinkRepository,
};

pub struct DrinkService {
    repository: Arc<dyn DrinkRepository>,
}

impl DrinkService {
    pub fn new(repository: Arc<dyn DrinkRepository>) -> Self {
        Self { repository }
    }

    /// Every drink; an empty menu is reported as not found.
    pub async fn list(&self) -> AppResult<Vec<Drink>> {
        let drinks = self.repository.find_all().await?;
        if drinks.is_empty() {
            return Err(AppError::NotFound("No drinks".to_string()));
        }
        Ok(drinks)
    }

    pub async fn create(&self, request: CreateDrinkRequest) -> AppResult<Drink> {
        request.validate()?;

        let CreateDrinkRequest { title, recipe } = request;
        let drink = Drink::new(
            title.as_deref().unwrap_or_default(),
            recipe.map(|r| r.into_ingredients()).unwrap_or_default(),
        );

        let created = self.repository.create(drink).await.map_err(|e| {
            log::warn!("Failed to create drink: {}", e);
            e.into_unprocessable()
        })?;
        log::info!("Created drink {} ({})", created.id, created.title);
        Ok(created)
    }

    pub async fn update(&self, id: i64, request: UpdateDrinkRequest) -> AppResult<Drink> {
        let mut drink = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Drink with id '{}' not found", id)))?;

        request.validate()?;

        if let Some(title) = request.title {
            drink.title = title;
        }
        if let Some(recipe) = request.recipe {
            drink.recipe = recipe.into_ingredients();
        }

        let updated = self.repository.update(drink).await.map_err(|e| {
            log::warn!("Failed to update drink {}: {}", id, e);
            e.into_unprocessable()
        })?;
        log::info!("Updated drink {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(AppError::into_unprocessable)?;
        log::info!("Deleted drink {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Ingredient;
    use crate::models::dto::request::RecipeInput;
    use crate::repositories::drink_repository::MockDrinkRepository;
    use mockall::predicate::eq;

    fn water() -> Ingredient {
        Ingredient {
            name: "Water".to_string(),
            color: "blue".to_string(),
            parts: 1,
        }
    }

    #[tokio::test]
    async fn empty_menu_is_not_found() {
        let mut repository = MockDrinkRepository::new();
        repository.expect_find_all().returning(|| Ok(vec![]));

        let result = DrinkService::new(Arc::new(repository)).list().await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_accepts_a_single_ingredient() {
        let mut repository = MockDrinkRepository::new();
        repository
            .expect_create()
            .withf(|d| d.title == "Water" && d.recipe.len() == 1)
            .returning(|mut d| {
                d.id = 1;
                Ok(d)
            });

        let request = CreateDrinkRequest {
            title: Some("Water".to_string()),
            recipe: Some(RecipeInput::One(water())),
        };
        let drink = DrinkService::new(Arc::new(repository))
            .create(request)
            .await
            .unwrap();
        assert_eq!(drink.id, 1);
        assert_eq!(drink.recipe, vec![water()]);
    }

    #[tokio::test]
    async fn duplicate_title_is_unprocessable() {
        let mut repository = MockDrinkRepository::new();
        repository
            .expect_create()
            .returning(|_| Err(AppError::DatabaseError("E11000 duplicate key".into())));

        let request = CreateDrinkRequest {
            title: Some("Water".to_string()),
            recipe: Some(RecipeInput::Many(vec![water()])),
        };
        let result = DrinkService::new(Arc::new(repository)).create(request).await;
        assert!(matches!(result, Err(AppError::Unprocessable(_))));
    }

    #[tokio::test]
    async fn missing_recipe_is_unprocessable() {
        let request = CreateDrinkRequest {
            title: Some("Water".to_string()),
            recipe: None,
        };
        let result = DrinkService::new(Arc::new(MockDrinkRepository::new()))
            .create(request)
            .await;
        assert!(matches!(result, Err(AppError::Unprocessable(_))));
    }

    #[tokio::test]
    async fn update_keeps_fields_not_sent() {
        let mut repository = MockDrinkRepository::new();
        repository.expect_find_by_id().with(eq(1)).returning(|_| {
            let mut drink = Drink::new("Water", vec![water()]);
            drink.id = 1;
            Ok(Some(drink))
        });
        repository.expect_update().returning(Ok);

        let request = UpdateDrinkRequest {
            title: Some("Sparkling water".to_string()),
            recipe: None,
        };
        let drink = DrinkService::new(Arc::new(repository))
            .update(1, request)
            .await
            .unwrap();
        assert_eq!(drink.title, "Sparkling water");
        assert_eq!(drink.recipe, vec![water()]);
    }

    #[tokio::test]
    async fn update_of_missing_drink_is_not_found() {
        let mut repository = MockDrinkRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let request = UpdateDrinkRequest {
            title: Some("Tea".to_string()),
            recipe: None,
        };
        let result = DrinkService::new(Arc::new(repository))
            .update(9, request)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
