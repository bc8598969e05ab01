use crate::category::data::{Category, DEFAULT_CATEGORY_ID, DEFAULT_CATEGORY_NAME};
use crate::todo::data::Todo;

pub fn default_categories() -> Vec<Category> {
    vec![Category {
        id: DEFAULT_CATEGORY_ID,
        name: DEFAULT_CATEGORY_NAME.to_string(),
    }]
}

pub fn demo_categories() -> Vec<Category> {
    let mut categories = default_categories();

    let names = ["Project management", "Hardware", "Firmware", "Control portal"];
    categories.extend(names.iter().zip(2..).map(|(name, id)| Category {
        id,
        name: name.to_string(),
    }));

    categories
}

pub fn demo_todos() -> Vec<Todo> {
    let todo = |id, title: &str, description: &str, completed| Todo {
        id,
        title: title.to_string(),
        description: description.to_string(),
        due_date: Some(String::from("2025-12-10")),
        created_date: String::from("2025-12-09"),
        category_id: 2,
        completed,
    };

    vec![
        todo(1, "Complete coding assesment", "Frontend and backend", false),
        todo(2, "Frontend scheleton", "Frontend UI", true),
        todo(3, "Backend APIs", "Backend APIs for all CRUD", true),
        todo(4, "Frontend interacting with backend", "Frontend calling backend at /api", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_data_starts_with_default_category() {
        let categories = demo_categories();
        assert_eq!(categories[0].id, DEFAULT_CATEGORY_ID);
        assert_eq!(categories[0].name, DEFAULT_CATEGORY_NAME);
        assert_eq!(categories.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn demo_todos_reference_seeded_categories() {
        let categories = demo_categories();
        assert!(demo_todos()
            .iter()
            .all(|t| categories.iter().any(|c| c.id == t.category_id)));
    }
}
