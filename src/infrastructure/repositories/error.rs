// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ADDRESS_PK: &str = "addresses_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.constraint() == Some(CNT_ADDRESS_PK) {
                return DomainError::Conflict("an address with this id already exists".into());
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23514" | "22001" => {
                        return DomainError::Validation(db_err.message().to_string());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
