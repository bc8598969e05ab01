use std::sync::{Arc, Mutex};

use crate::category::store::CategoryStore;
use crate::config::PlannerConfig;
use crate::seed;
use crate::todo::store::TodoStore;

/// Both collections, locked together so todo validation always sees a
/// consistent set of categories.
#[derive(Debug, Clone)]
pub struct Planner {
    pub categories: CategoryStore,
    pub todos: TodoStore,
}

impl Planner {
    pub fn from_config(config: &PlannerConfig) -> Planner {
        let (categories, todos) = if config.seed_demo_data {
            (seed::demo_categories(), seed::demo_todos())
        } else {
            (seed::default_categories(), vec![])
        };

        let categories = CategoryStore::new(categories);

        Planner {
            categories: if config.protect_default_category {
                categories.protect_default()
            } else {
                categories
            },
            todos: TodoStore::new(todos),
        }
    }
}

pub type SharedPlanner = Arc<Mutex<Planner>>;
