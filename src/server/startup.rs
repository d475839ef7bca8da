use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the API routes.
///
/// Only `GET` is allowed. Origins come from `CORS_ALLOWED_ORIGINS`; when unset any
/// origin is allowed.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the API router
/// - `Err(AppError::ConfigErr(InvalidEnvVar))` - An origin is not a valid header value
pub fn setup_cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let Some(origins) = &config.cors_allowed_origins else {
        return Ok(layer.allow_origin(Any));
    };

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_migrations_on_connect() -> Result<(), AppError> {
        use sea_orm::EntityTrait;

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            cors_allowed_origins: None,
        };

        let db = connect_to_database(&config).await?;
        let mentees = entity::prelude::Mentee::find().all(&db).await?;

        assert!(mentees.is_empty());

        Ok(())
    }

    #[test]
    fn rejects_invalid_origin() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            cors_allowed_origins: Some(vec!["https://ok.example.com\n".to_string()]),
        };

        assert!(matches!(
            setup_cors_layer(&config),
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
