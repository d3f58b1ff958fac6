/// A granted authority such as `ROLE_ADMIN`. Roles are seeded and only ever looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub authority: String,
}
