//! Visitors service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::visitors::{
        data::NewVisit, errors::VisitorsServiceError, records::VisitRecord,
        repository::PgVisitsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgVisitorsService {
    db: Db,
    repository: PgVisitsRepository,
}

impl PgVisitorsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgVisitsRepository::new(),
        }
    }
}

#[async_trait]
impl VisitorsService for PgVisitorsService {
    async fn record_visit(&self, visit: NewVisit) -> Result<VisitRecord, VisitorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let recorded = self.repository.append_visit(&mut tx, &visit).await?;

        tx.commit().await?;

        Ok(recorded)
    }

    async fn list_visits(&self) -> Result<Vec<VisitRecord>, VisitorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let visits = self.repository.list_visits(&mut tx).await?;

        tx.commit().await?;

        Ok(visits)
    }
}

#[automock]
#[async_trait]
pub trait VisitorsService: Send + Sync {
    /// Append a visit to the ledger. Visits are never updated or removed.
    async fn record_visit(&self, visit: NewVisit) -> Result<VisitRecord, VisitorsServiceError>;

    /// Retrieve the whole ledger, newest visit first.
    async fn list_visits(&self) -> Result<Vec<VisitRecord>, VisitorsServiceError>;
}
