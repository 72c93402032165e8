//! Category entity <-> model mapper

use forum_core::{Category, CategoryId};

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: CategoryId::new(model.id),
            name: model.name,
            description: model.description,
            created_date: model.created_date,
        }
    }
}
