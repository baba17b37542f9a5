// src/shared/manage.rs
//
// The manage pages expose the same AJAX toggle on every entity: flip
// `is_active`, touch nothing else. One generic single-column update serves
// all of them; per-entity code only supplies the descriptor.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Descriptor for an entity whose visibility can be toggled from its manage
/// page.
pub trait ManagedEntity {
    type Entity: EntityTrait;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;
    fn active_column() -> <Self::Entity as EntityTrait>::Column;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleError {
    #[error("not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Flip `is_active` for one row. The statement updates exactly one column, so
/// a toggle can never clobber concurrent edits to other fields.
pub async fn set_active<M, C>(conn: &C, id: Uuid, active: bool) -> Result<(), ToggleError>
where
    M: ManagedEntity,
    C: ConnectionTrait,
{
    let result = <M::Entity as EntityTrait>::update_many()
        .col_expr(M::active_column(), Expr::value(active))
        .filter(M::id_column().eq(id))
        .exec(conn)
        .await
        .map_err(|e| ToggleError::DatabaseError(e.to_string()))?;

    if result.rows_affected == 0 {
        return Err(ToggleError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    mod stubs {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
        #[sea_orm(table_name = "stub_items")]
        pub struct Model {
            #[sea_orm(primary_key, column_type = "Uuid")]
            pub id: Uuid,
            pub is_active: bool,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    struct StubManaged;

    impl ManagedEntity for StubManaged {
        type Entity = stubs::Entity;

        fn id_column() -> stubs::Column {
            stubs::Column::Id
        }

        fn active_column() -> stubs::Column {
            stubs::Column::IsActive
        }
    }

    #[tokio::test]
    async fn set_active_succeeds_when_row_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let result = set_active::<StubManaged, _>(&db, Uuid::new_v4(), false).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn set_active_not_found_when_no_rows_match() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = set_active::<StubManaged, _>(&db, Uuid::new_v4(), true).await;
        assert!(matches!(result.unwrap_err(), ToggleError::NotFound));
    }
}
