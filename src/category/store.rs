use super::data::*;

use crate::api_error::{ApiError, ApiResult};
use crate::validation::required_text;

const NAME_REQUIRED: &str = "Name is required";

/// Ordered set of categories with its own id counter.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    categories: Vec<Category>,
    next_id: CategoryID,
    protected_id: Option<CategoryID>,
}

impl CategoryStore {
    /// Builds a store from seed data. Ids continue after the largest seeded id.
    pub fn new(seed: Vec<Category>) -> CategoryStore {
        let next_id = seed.iter().map(|c| c.id).max().map_or(1, |max| max + 1);

        CategoryStore {
            categories: seed,
            next_id,
            protected_id: None,
        }
    }

    /// Refuses renames and deletions of the default category from now on.
    pub fn protect_default(mut self) -> CategoryStore {
        self.protected_id = Some(DEFAULT_CATEGORY_ID);
        self
    }

    pub fn list(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn contains(&self, id: CategoryID) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn create(&mut self, request: CategoryRequest) -> ApiResult<Category> {
        let name = required_text(request.name.as_deref(), NAME_REQUIRED)?;

        let category = Category {
            id: self.take_id(),
            name,
        };
        self.categories.push(category.clone());

        Ok(category)
    }

    pub fn update(&mut self, id: CategoryID, request: CategoryRequest) -> ApiResult<Category> {
        let index = self.index_of(id)?;
        self.check_unprotected(id)?;
        let name = required_text(request.name.as_deref(), NAME_REQUIRED)?;

        let category = &mut self.categories[index];
        category.name = name;

        Ok(category.clone())
    }

    /// Removes the category. Todos still pointing at it are left alone.
    pub fn delete(&mut self, id: CategoryID) -> ApiResult<()> {
        let index = self.index_of(id)?;
        self.check_unprotected(id)?;

        self.categories.remove(index);

        Ok(())
    }

    fn take_id(&mut self) -> CategoryID {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: CategoryID) -> ApiResult<usize> {
        self.categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ApiError::not_found("Category not found"))
    }

    fn check_unprotected(&self, id: CategoryID) -> ApiResult<()> {
        if self.protected_id == Some(id) {
            return Err(ApiError::validation(format!(
                "The '{}' category cannot be modified",
                DEFAULT_CATEGORY_NAME
            )));
        }

        Ok(())
    }
}
