use rocket::response::status::NoContent;
use rocket::serde::json::{self, Json};
use rocket::{delete, get, post, put, State};

use crate::api_error::ApiResult;

use super::data::*;
use crate::data::SharedPlanner;

#[get("/category")]
pub fn get_categories(planner: &State<SharedPlanner>) -> ApiResult<Json<Vec<Category>>> {
    let planner = planner.lock()?;

    Ok(Json(planner.categories.list()))
}

#[post("/category", format = "json", data = "<category_request>")]
pub fn add_category(
    category_request: Result<Json<CategoryRequest>, json::Error<'_>>,
    planner: &State<SharedPlanner>,
) -> ApiResult<Json<Category>> {
    let category_request = category_request?.into_inner();
    let mut planner = planner.lock()?;

    let category = planner.categories.create(category_request)?;
    tracing::info!(category_id = category.id, name = %category.name, "created category");

    Ok(Json(category))
}

#[put("/category/<id>", format = "json", data = "<category_request>")]
pub fn update_category(
    id: CategoryID,
    category_request: Result<Json<CategoryRequest>, json::Error<'_>>,
    planner: &State<SharedPlanner>,
) -> ApiResult<Json<Category>> {
    let category_request = category_request?.into_inner();
    let mut planner = planner.lock()?;

    let category = planner.categories.update(id, category_request)?;
    tracing::info!(category_id = category.id, name = %category.name, "renamed category");

    Ok(Json(category))
}

/// Todos filed under the category keep their `categoryId`; callers move
/// them first if they should land somewhere else.
#[delete("/category/<id>")]
pub fn delete_category(id: CategoryID, planner: &State<SharedPlanner>) -> ApiResult<NoContent> {
    let mut planner = planner.lock()?;

    planner.categories.delete(id)?;
    tracing::info!(category_id = id, "deleted category");

    Ok(NoContent)
}
