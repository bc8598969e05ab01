use rocket::response::status::NoContent;
use rocket::serde::json::{self, Json};
use rocket::{delete, get, post, put, State};

use crate::api_error::ApiResult;

use super::data::*;
use crate::data::SharedPlanner;

#[get("/todo")]
pub fn get_todos(planner: &State<SharedPlanner>) -> ApiResult<Json<Vec<Todo>>> {
    let planner = planner.lock()?;

    Ok(Json(planner.todos.list()))
}

#[post("/todo", format = "json", data = "<create_todo_request>")]
pub fn add_todo(
    create_todo_request: Result<Json<CreateTodoRequest>, json::Error<'_>>,
    planner: &State<SharedPlanner>,
) -> ApiResult<Json<Todo>> {
    let create_todo_request = create_todo_request?.into_inner();
    let mut planner = planner.lock()?;
    let planner = &mut *planner;

    let todo = planner.todos.create(&planner.categories, create_todo_request)?;
    tracing::info!(todo_id = todo.id, category_id = todo.category_id, "created todo");

    Ok(Json(todo))
}

#[put("/todo/<id>", format = "json", data = "<update_todo_request>")]
pub fn update_todo(
    id: TodoID,
    update_todo_request: Result<Json<UpdateTodoRequest>, json::Error<'_>>,
    planner: &State<SharedPlanner>,
) -> ApiResult<Json<Todo>> {
    let update_todo_request = update_todo_request?.into_inner();
    let mut planner = planner.lock()?;
    let planner = &mut *planner;

    let todo = planner.todos.update(&planner.categories, id, update_todo_request)?;
    tracing::info!(todo_id = todo.id, completed = todo.completed, "updated todo");

    Ok(Json(todo))
}

#[put("/todo/<id>/category", format = "json", data = "<move_todo_request>")]
pub fn move_todo(
    id: TodoID,
    move_todo_request: Result<Json<MoveTodoRequest>, json::Error<'_>>,
    planner: &State<SharedPlanner>,
) -> ApiResult<Json<Todo>> {
    let move_todo_request = move_todo_request?.into_inner();
    let mut planner = planner.lock()?;
    let planner = &mut *planner;

    let todo = planner
        .todos
        .move_to_category(&planner.categories, id, move_todo_request)?;
    tracing::info!(todo_id = todo.id, category_id = todo.category_id, "moved todo");

    Ok(Json(todo))
}

#[delete("/todo/<id>")]
pub fn delete_todo(id: TodoID, planner: &State<SharedPlanner>) -> ApiResult<NoContent> {
    let mut planner = planner.lock()?;

    planner.todos.delete(id)?;
    tracing::info!(todo_id = id, "deleted todo");

    Ok(NoContent)
}
