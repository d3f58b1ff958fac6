//! Maps the sortable field names exposed by the API onto table columns.
//!
//! Only names that parse here can reach an `ORDER BY` clause.

use strum_macros::{EnumIter, EnumString};

use business::domain::errors::RepositoryError;
use business::domain::shared::pagination::Sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub(crate) enum CategoryColumn {
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "name")]
    Name,
}

impl CategoryColumn {
    fn column(self) -> &'static str {
        match self {
            CategoryColumn::Id => "id",
            CategoryColumn::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub(crate) enum ProductColumn {
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "price")]
    Price,
    #[strum(serialize = "date")]
    Date,
}

impl ProductColumn {
    fn column(self) -> &'static str {
        match self {
            ProductColumn::Id => "id",
            ProductColumn::Name => "name",
            ProductColumn::Price => "price",
            ProductColumn::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub(crate) enum UserColumn {
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "firstName")]
    FirstName,
    #[strum(serialize = "lastName")]
    LastName,
    #[strum(serialize = "email")]
    Email,
}

impl UserColumn {
    fn column(self) -> &'static str {
        match self {
            UserColumn::Id => "id",
            UserColumn::FirstName => "first_name",
            UserColumn::LastName => "last_name",
            UserColumn::Email => "email",
        }
    }
}

fn order_by(column: &str, sort: &Sort) -> String {
    // `id` breaks ties so that consecutive pages never overlap
    format!("ORDER BY {} {}, id ASC", column, sort.direction)
}

fn unknown_field(sort: &Sort) -> RepositoryError {
    tracing::error!(
        target: "persistence",
        "unsortable field reached the store: {}",
        sort.field
    );
    RepositoryError::database_error()
}

pub(crate) fn category_order(sort: &Sort) -> Result<String, RepositoryError> {
    let column = sort
        .field
        .parse::<CategoryColumn>()
        .map_err(|_| unknown_field(sort))?;
    Ok(order_by(column.column(), sort))
}

pub(crate) fn product_order(sort: &Sort) -> Result<String, RepositoryError> {
    let column = sort
        .field
        .parse::<ProductColumn>()
        .map_err(|_| unknown_field(sort))?;
    Ok(order_by(column.column(), sort))
}

pub(crate) fn user_order(sort: &Sort) -> Result<String, RepositoryError> {
    let column = sort
        .field
        .parse::<UserColumn>()
        .map_err(|_| unknown_field(sort))?;
    Ok(order_by(column.column(), sort))
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::category::model::CATEGORY_SORT;
    use business::domain::product::model::PRODUCT_SORT;
    use business::domain::user::model::USER_SORT;
    use strum::IntoEnumIterator;

    #[test]
    fn every_sortable_field_has_a_column() {
        for field in CATEGORY_SORT.sortable {
            assert!(
                category_order(&Sort::asc(*field)).is_ok(),
                "category {}",
                field
            );
        }
        for field in PRODUCT_SORT.sortable {
            assert!(
                product_order(&Sort::asc(*field)).is_ok(),
                "product {}",
                field
            );
        }
        for field in USER_SORT.sortable {
            assert!(user_order(&Sort::asc(*field)).is_ok(), "user {}", field);
        }
    }

    #[test]
    fn every_column_is_exposed_as_sortable() {
        assert_eq!(CategoryColumn::iter().count(), CATEGORY_SORT.sortable.len());
        assert_eq!(ProductColumn::iter().count(), PRODUCT_SORT.sortable.len());
        assert_eq!(UserColumn::iter().count(), USER_SORT.sortable.len());
    }

    #[test]
    fn should_translate_api_name_to_column() {
        assert_eq!(
            user_order(&Sort::desc("firstName")).unwrap(),
            "ORDER BY first_name DESC, id ASC"
        );
    }

    #[test]
    fn should_refuse_anything_else() {
        assert_eq!(
            product_order(&Sort::asc("name; DROP TABLE tb_product")),
            Err(RepositoryError::DatabaseError)
        );
        assert!(user_order(&Sort::asc("password")).is_err());
    }
}
