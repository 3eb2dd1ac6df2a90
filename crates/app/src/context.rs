//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    blobs::{BlobStore, FsBlobStore},
    database::{self, Db},
    domain::{
        enrollment::{EnrollmentService, FaceEnrollmentService},
        gate::{FaceMatchGate, MatchGate},
        identities::{IdentitiesService, PgIdentitiesService},
        visitors::{PgVisitorsService, VisitorsService},
    },
    matching::{FaceMatcher, FaceMatcherConfig, FaceMatcherError, HttpFaceMatcher},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("failed to build matching service client")]
    Matcher(#[source] FaceMatcherError),
}

/// Everything needed to wire up the application services.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub matcher: FaceMatcherConfig,
    pub collection: String,
    pub blob_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppContext {
    /// Face collection every service indexes into and searches.
    pub collection: String,
    pub identities: Arc<dyn IdentitiesService>,
    pub visitors: Arc<dyn VisitorsService>,
    pub enrollment: Arc<dyn EnrollmentService>,
    pub gate: Arc<dyn MatchGate>,
}

impl AppContext {
    /// Wire services around already constructed adapters.
    #[must_use]
    pub fn from_parts(
        db: Db,
        matcher: Arc<dyn FaceMatcher>,
        blobs: Arc<dyn BlobStore>,
        collection: &str,
    ) -> Self {
        let identities: Arc<dyn IdentitiesService> = Arc::new(PgIdentitiesService::new(db.clone()));
        let visitors: Arc<dyn VisitorsService> = Arc::new(PgVisitorsService::new(db));

        Self {
            enrollment: Arc::new(FaceEnrollmentService::new(
                identities.clone(),
                matcher.clone(),
                blobs,
                collection,
            )),
            gate: Arc::new(FaceMatchGate::new(
                identities.clone(),
                visitors.clone(),
                matcher,
                collection,
            )),
            identities,
            visitors,
            collection: collection.to_owned(),
        }
    }

    /// Build application context, applying pending migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable, a migration fails
    /// or the matching client cannot be built.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(&config.database_url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        let matcher = HttpFaceMatcher::new(config.matcher).map_err(AppInitError::Matcher)?;

        Ok(Self::from_parts(
            Db::new(pool),
            Arc::new(matcher),
            Arc::new(FsBlobStore::new(config.blob_dir)),
            &config.collection,
        ))
    }
}
