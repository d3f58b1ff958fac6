use sqlx::FromRow;

use business::domain::category::model::Category;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
}

impl From<CategoryEntity> for Category {
    fn from(entity: CategoryEntity) -> Self {
        Category {
            id: entity.id,
            name: entity.name,
        }
    }
}
