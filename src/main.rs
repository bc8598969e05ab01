use rocket::figment::Figment;
use rocket::{catchers, routes, Build, Rocket};
use tracing_subscriber::EnvFilter;

use std::error::Error;
use std::sync::{Arc, Mutex};

mod api_error;
mod category;
mod config;
mod cors;
mod data;
mod health;
mod seed;
mod todo;
mod validation;


use category::endpoints as category_endpoints;
use config::PlannerConfig;
use data::{Planner, SharedPlanner};
use todo::endpoints as todo_endpoints;

pub fn build_rocket(figment: Figment) -> Result<Rocket<Build>, rocket::figment::Error> {
    let config = PlannerConfig::from_figment(&figment)?;
    let planner: SharedPlanner = Arc::new(Mutex::new(Planner::from_config(&config)));

    tracing::info!(
        seed_demo_data = config.seed_demo_data,
        protect_default_category = config.protect_default_category,
        "planner state ready"
    );

    Ok(rocket::custom(figment)
        .manage(planner)
        .attach(cors::Cors)
        .mount(
            "/api",
            routes![
                category_endpoints::get_categories,
                category_endpoints::add_category,
                category_endpoints::update_category,
                category_endpoints::delete_category,
                todo_endpoints::get_todos,
                todo_endpoints::add_todo,
                todo_endpoints::update_todo,
                todo_endpoints::move_todo,
                todo_endpoints::delete_todo,
                health::health,
                cors::preflight,
            ],
        )
        .register(
            "/",
            catchers![api_error::not_found, api_error::unprocessable, api_error::internal],
        ))
}

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    build_rocket(rocket::Config::figment())?.launch().await?;

    Ok(())
}
