//! PostgreSQL Repository Implementation
//!
//! Implements the generic `Repository` trait using SQLx for PostgreSQL.
//! Any entity that describes its table through [`PgTable`] can be stored.

mod business_card;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::domain::gateways::Repository;
use crate::domain::models::business_card::BusinessCard;
use crate::domain::models::operation_result::OperationResult;
use crate::domain::models::predicate::{Case, Entity, Predicate, Value};
use crate::shared::errors::RepositoryError;

/// Table mapping of an entity stored in PostgreSQL
pub trait PgTable: Entity {
    /// Table name
    const TABLE: &'static str;

    /// Primary key column, generated by the database
    const ID_COLUMN: &'static str = "id";

    /// Columns selected when reading rows, id included
    const SELECT_COLUMNS: &'static str;

    /// Columns written on insert, in the order [`PgTable::bind_insert`] binds them
    const INSERT_COLUMNS: &'static [&'static str];

    /// Database row representation
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    /// Primary key as bound in queries
    type Key: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static;

    /// Convert a row into the entity
    fn from_row(row: Self::Row) -> Result<Self, RepositoryError>;

    /// Convert an identifier into its key
    fn key(id: Self::Id) -> Self::Key;

    /// Column holding a filterable field
    fn column(field: Self::Field) -> &'static str;

    /// Bind one value per entry of [`PgTable::INSERT_COLUMNS`]
    fn bind_insert(&self, values: &mut Separated<'_, 'static, Postgres, &'static str>);
}

/// PostgreSQL implementation of `Repository`
pub struct PostgresRepository<T> {
    pool: PgPool,
    _entity: std::marker::PhantomData<fn() -> T>,
}

/// Business cards stored in the `business_cards` table
pub type PostgresBusinessCardRepository = PostgresRepository<BusinessCard>;

impl<T: PgTable> PostgresRepository<T> {
    /// Create a new PostgresRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: std::marker::PhantomData,
        }
    }

    async fn insert(&self, entity: &T) -> Result<(), sqlx::Error> {
        let mut query = QueryBuilder::<Postgres>::new(format!("INSERT INTO {} (", T::TABLE));
        query.push(T::INSERT_COLUMNS.join(", ")).push(") VALUES (");
        {
            let mut values = query.separated(", ");
            entity.bind_insert(&mut values);
        }
        query.push(")");

        query.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn delete(&self, entity: &T) -> Result<(), String> {
        let id = entity.id().ok_or_else(|| format!("{} has no identifier", T::NAME))?;

        let mut query = QueryBuilder::<Postgres>::new(format!("DELETE FROM {} WHERE {} = ", T::TABLE, T::ID_COLUMN));
        query.push_bind(T::key(id));

        let result = query.build().execute(&self.pool).await.map_err(|e| e.to_string())?;
        if result.rows_affected() == 0 {
            return Err(format!("{} with id {id} does not exist", T::NAME));
        }
        Ok(())
    }

    async fn fetch(&self, query: &mut QueryBuilder<'static, Postgres>) -> Result<Vec<T>, RepositoryError> {
        let rows = query.build_query_as::<T::Row>().fetch_all(&self.pool).await?;
        rows.into_iter().map(T::from_row).collect()
    }
}

fn select<T: PgTable>() -> QueryBuilder<'static, Postgres> {
    QueryBuilder::new(format!("SELECT {} FROM {}", T::SELECT_COLUMNS, T::TABLE))
}

/// Append the SQL form of a predicate, binding every operand
fn push_predicate<T: PgTable>(query: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate<T::Field>) {
    match predicate {
        Predicate::Always => {
            query.push("TRUE");
        }
        Predicate::Contains { field, needle, case } => {
            let column = T::column(*field);
            match case {
                Case::Sensitive => query
                    .push("strpos(")
                    .push(column)
                    .push(", ")
                    .push_bind(needle.clone())
                    .push(") > 0"),
                Case::Insensitive => query
                    .push("strpos(lower(")
                    .push(column)
                    .push("), lower(")
                    .push_bind(needle.clone())
                    .push(")) > 0"),
            };
        }
        Predicate::Equals { field, value, case } => {
            let column = T::column(*field);
            match (value, case) {
                (Value::Text(text), Case::Insensitive) => query
                    .push("lower(")
                    .push(column)
                    .push(") = lower(")
                    .push_bind(text.clone())
                    .push(")"),
                (Value::Text(text), Case::Sensitive) => query.push(column).push(" = ").push_bind(text.clone()),
                (Value::Date(date), _) => query.push(column).push(" = ").push_bind(*date),
            };
        }
        Predicate::And(parts) if parts.is_empty() => {
            query.push("TRUE");
        }
        Predicate::And(parts) => {
            query.push("(");
            for (index, part) in parts.iter().enumerate() {
                if index > 0 {
                    query.push(" AND ");
                }
                push_predicate::<T>(query, part);
            }
            query.push(")");
        }
    }
}

#[async_trait]
impl<T: PgTable> Repository<T> for PostgresRepository<T> {
    async fn add(&self, entity: &T) -> OperationResult {
        match self.insert(entity).await {
            Ok(()) => {
                tracing::debug!(entity = T::NAME, "Entity inserted");
                OperationResult::success("Entity added successfully.")
            }
            Err(e) => {
                tracing::error!(entity = T::NAME, error = %e, "Failed to add entity");
                OperationResult::failure(format!("Failed to add entity: {e}"))
            }
        }
    }

    async fn get_by_id(&self, id: T::Id) -> Result<Option<T>, RepositoryError> {
        let mut query = select::<T>();
        query.push(format!(" WHERE {} = ", T::ID_COLUMN)).push_bind(T::key(id));

        let row = query.build_query_as::<T::Row>().fetch_optional(&self.pool).await?;
        row.map(T::from_row).transpose()
    }

    async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        let mut query = select::<T>();
        query.push(format!(" ORDER BY {}", T::ID_COLUMN));

        self.fetch(&mut query).await
    }

    async fn get_by_filter(&self, predicate: Option<&Predicate<T::Field>>) -> Result<Vec<T>, RepositoryError> {
        let mut query = select::<T>();
        if let Some(predicate) = predicate.filter(|p| !p.is_always()) {
            query.push(" WHERE ");
            push_predicate::<T>(&mut query, predicate);
        }
        query.push(format!(" ORDER BY {}", T::ID_COLUMN));

        tracing::debug!(entity = T::NAME, sql = query.sql(), "Filtering entities");
        self.fetch(&mut query).await
    }

    async fn remove(&self, entity: &T) -> OperationResult {
        match self.delete(entity).await {
            Ok(()) => {
                tracing::debug!(entity = T::NAME, "Entity deleted");
                OperationResult::success("Entity removed successfully.")
            }
            Err(e) => {
                tracing::error!(entity = T::NAME, error = %e, "Failed to remove entity");
                OperationResult::failure(format!("Failed to remove entity: {e}"))
            }
        }
    }
}
