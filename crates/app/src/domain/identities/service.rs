//! Identities service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::identities::{
        data::NewIdentity, errors::IdentitiesServiceError, records::IdentityRecord,
        repository::PgIdentitiesRepository,
    },
    keys::{FaceToken, PersonId},
};

#[derive(Debug, Clone)]
pub struct PgIdentitiesService {
    db: Db,
    repository: PgIdentitiesRepository,
}

impl PgIdentitiesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgIdentitiesRepository::new(),
        }
    }
}

#[async_trait]
impl IdentitiesService for PgIdentitiesService {
    async fn get_identity(
        &self,
        person: &PersonId,
    ) -> Result<Option<IdentityRecord>, IdentitiesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let identity = self.repository.get_identity(&mut tx, person).await?;

        tx.commit().await?;

        Ok(identity)
    }

    async fn create_identity(
        &self,
        identity: NewIdentity,
    ) -> Result<IdentityRecord, IdentitiesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self
            .repository
            .create_identity(&mut tx, &identity)
            .await?
            .ok_or(IdentitiesServiceError::AlreadyExists)?;

        tx.commit().await?;

        Ok(created)
    }

    async fn find_identity_by_face_token(
        &self,
        face_token: &FaceToken,
    ) -> Result<Option<IdentityRecord>, IdentitiesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let identity = self
            .repository
            .find_identity_by_face_token(&mut tx, face_token)
            .await?;

        tx.commit().await?;

        Ok(identity)
    }

    async fn list_identities(&self) -> Result<Vec<IdentityRecord>, IdentitiesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let identities = self.repository.list_identities(&mut tx).await?;

        tx.commit().await?;

        Ok(identities)
    }
}

#[automock]
#[async_trait]
pub trait IdentitiesService: Send + Sync {
    /// Retrieve the identity enrolled under `person`, if any.
    async fn get_identity(
        &self,
        person: &PersonId,
    ) -> Result<Option<IdentityRecord>, IdentitiesServiceError>;

    /// Commit a new identity.
    ///
    /// The write is conditional on the person id: if another identity holds
    /// it at commit time this fails with
    /// [`IdentitiesServiceError::AlreadyExists`], and a face token already
    /// bound elsewhere fails with [`IdentitiesServiceError::FaceTokenTaken`].
    async fn create_identity(
        &self,
        identity: NewIdentity,
    ) -> Result<IdentityRecord, IdentitiesServiceError>;

    /// Resolve a face token to the identity it was enrolled with.
    async fn find_identity_by_face_token(
        &self,
        face_token: &FaceToken,
    ) -> Result<Option<IdentityRecord>, IdentitiesServiceError>;

    /// Retrieve every enrolled identity.
    async fn list_identities(&self) -> Result<Vec<IdentityRecord>, IdentitiesServiceError>;
}
