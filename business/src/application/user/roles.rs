use crate::domain::errors::ServiceError;
use crate::domain::product::model::distinct_ids;
use crate::domain::role::model::Role;
use crate::domain::role::repository::RoleRepository;

/// Looks up the authority of every referenced role. Clients never set authorities.
pub async fn resolve_roles(
    repository: &dyn RoleRepository,
    ids: &[i64],
) -> Result<Vec<Role>, ServiceError> {
    let mut roles = Vec::with_capacity(ids.len());
    for id in distinct_ids(ids) {
        let role = repository
            .get_by_id(id)
            .await
            .map_err(ServiceError::lookup("Role", id))?;
        roles.push(role);
    }
    Ok(roles)
}
