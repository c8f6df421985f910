// src/infrastructure/repositories/postgres_address.rs
use super::map_sqlx;
use crate::domain::address::{Address, AddressChanges, AddressId, AddressRepository, NewAddress};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const COLUMNS: &str = "id, street, city, state, zip_code, country, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresAddressRepository {
    pool: PgPool,
}

impl PostgresAddressRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AddressRow {
    id: Uuid,
    street: String,
    city: String,
    state: String,
    zip_code: String,
    country: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            id: AddressId::from_uuid(row.id),
            street: row.street,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            country: row.country,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl AddressRepository for PostgresAddressRepository {
    async fn insert(&self, address: NewAddress) -> DomainResult<Address> {
        let NewAddress {
            id,
            street,
            city,
            state,
            zip_code,
            country,
            created_at,
        } = address;

        let sql = format!(
            "INSERT INTO addresses (id, street, city, state, zip_code, country, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(id.as_uuid())
            .bind(street)
            .bind(city)
            .bind(state)
            .bind(zip_code)
            .bind(country)
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: AddressId) -> DomainResult<Option<Address>> {
        let sql = format!("SELECT {COLUMNS} FROM addresses WHERE id = $1");
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> DomainResult<Vec<Address>> {
        let sql = format!("SELECT {COLUMNS} FROM addresses ORDER BY created_at, id");
        let rows = sqlx::query_as::<_, AddressRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        id: AddressId,
        changes: AddressChanges,
    ) -> DomainResult<Option<Address>> {
        let AddressChanges {
            street,
            city,
            state,
            zip_code,
            country,
            updated_at,
        } = changes;

        let sql = format!(
            "UPDATE addresses
             SET street = $2, city = $3, state = $4, zip_code = $5, country = $6, updated_at = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, AddressRow>(&sql)
            .bind(id.as_uuid())
            .bind(street)
            .bind(city)
            .bind(state)
            .bind(zip_code)
            .bind(country)
            .bind(updated_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: AddressId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}
