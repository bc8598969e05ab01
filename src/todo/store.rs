use super::data::*;

use crate::api_error::{ApiError, ApiResult};
use crate::category::data::CategoryID;
use crate::category::store::CategoryStore;
use crate::validation::{current_timestamp, due_date, required_text};

const TODO_NOT_FOUND: &str = "Todo not found";
const INVALID_CATEGORY: &str = "Invalid categoryId: category does not exist";
const STALE_CREATED_DATE: &str = "Stale object: createdDate does not match";
const STALE_CATEGORY: &str = "Stale object: categoryId does not match";

/// Ordered set of todos with its own id counter.
///
/// Category references are checked against a [`CategoryStore`] passed in by
/// the caller at write time only; deleting a category later does not touch
/// the todos pointing at it.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoID,
}

impl TodoStore {
    pub fn new(seed: Vec<Todo>) -> TodoStore {
        let next_id = seed.iter().map(|t| t.id).max().map_or(1, |max| max + 1);

        TodoStore {
            todos: seed,
            next_id,
        }
    }

    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn create(&mut self, categories: &CategoryStore, request: CreateTodoRequest) -> ApiResult<Todo> {
        let title = required_text(request.title.as_deref(), "Title is required")?;
        let category_id = request
            .category_id
            .ok_or_else(|| ApiError::validation("Category ID is required"))?;
        check_category(categories, category_id)?;
        let due_date = due_date(request.due_date.as_deref())?;

        let todo = Todo {
            id: self.take_id(),
            title,
            description: request
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            due_date,
            created_date: current_timestamp(),
            category_id,
            completed: false,
        };
        self.todos.push(todo.clone());

        Ok(todo)
    }

    /// Applies a partial update after the stale-object checks.
    ///
    /// A supplied `createdDate` or `categoryId` must equal the stored value;
    /// moving a todo between categories goes through [`TodoStore::move_to_category`].
    pub fn update(&mut self, categories: &CategoryStore, id: TodoID, request: UpdateTodoRequest) -> ApiResult<Todo> {
        let index = self.index_of(id)?;
        let stored = &self.todos[index];

        let title = match &request.title {
            Some(title) => Some(required_text(title.as_deref(), "Title cannot be empty")?),
            None => None,
        };

        if let Some(created_date) = &request.created_date {
            if *created_date != stored.created_date {
                return Err(ApiError::conflict(STALE_CREATED_DATE));
            }
        }

        if let Some(category_id) = request.category_id {
            if category_id != stored.category_id {
                return Err(ApiError::conflict(STALE_CATEGORY));
            }
            check_category(categories, category_id)?;
        }

        let due_date = match &request.due_date {
            Some(date) => Some(due_date(date.as_deref())?),
            None => None,
        };

        let todo = &mut self.todos[index];
        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(description) = request.description {
            todo.description = description.trim().to_string();
        }
        if let Some(due_date) = due_date {
            todo.due_date = due_date;
        }
        if let Some(completed) = request.completed {
            todo.completed = completed;
        }

        Ok(todo.clone())
    }

    /// Reassigns a todo to another category, guarded by its `createdDate`.
    pub fn move_to_category(
        &mut self,
        categories: &CategoryStore,
        id: TodoID,
        request: MoveTodoRequest,
    ) -> ApiResult<Todo> {
        let index = self.index_of(id)?;

        if request.created_date != self.todos[index].created_date {
            return Err(ApiError::conflict(STALE_CREATED_DATE));
        }
        check_category(categories, request.category_id)?;

        let todo = &mut self.todos[index];
        todo.category_id = request.category_id;

        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: TodoID) -> ApiResult<()> {
        let index = self.index_of(id)?;
        self.todos.remove(index);

        Ok(())
    }

    fn take_id(&mut self) -> TodoID {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn index_of(&self, id: TodoID) -> ApiResult<usize> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ApiError::not_found(TODO_NOT_FOUND))
    }
}

fn check_category(categories: &CategoryStore, id: CategoryID) -> ApiResult<()> {
    if categories.contains(id) {
        Ok(())
    } else {
        Err(ApiError::validation(INVALID_CATEGORY))
    }
}
