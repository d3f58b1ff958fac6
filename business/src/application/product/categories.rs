use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::ServiceError;
use crate::domain::product::model::distinct_ids;

/// Resolves every referenced category id against the store.
///
/// Repeated ids collapse to one entry. A single missing id fails the whole call.
pub async fn resolve_categories(
    repository: &dyn CategoryRepository,
    ids: &[i64],
) -> Result<Vec<Category>, ServiceError> {
    let mut categories = Vec::with_capacity(ids.len());
    for id in distinct_ids(ids) {
        let category = repository
            .get_by_id(id)
            .await
            .map_err(ServiceError::lookup("Category", id))?;
        categories.push(category);
    }
    Ok(categories)
}
