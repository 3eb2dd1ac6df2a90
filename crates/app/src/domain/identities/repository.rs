//! Identities Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    domain::identities::{data::NewIdentity, records::IdentityRecord},
    keys::{FaceToken, ImageRef, PersonId},
};

const GET_IDENTITY_SQL: &str = include_str!("sql/get_identity.sql");
const FIND_IDENTITY_BY_FACE_TOKEN_SQL: &str = include_str!("sql/find_identity_by_face_token.sql");
const LIST_IDENTITIES_SQL: &str = include_str!("sql/list_identities.sql");
const CREATE_IDENTITY_SQL: &str = include_str!("sql/create_identity.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgIdentitiesRepository;

impl PgIdentitiesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_identity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: &PersonId,
    ) -> Result<Option<IdentityRecord>, sqlx::Error> {
        query_as::<Postgres, IdentityRecord>(GET_IDENTITY_SQL)
            .bind(person.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_identity_by_face_token(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        face_token: &FaceToken,
    ) -> Result<Option<IdentityRecord>, sqlx::Error> {
        query_as::<Postgres, IdentityRecord>(FIND_IDENTITY_BY_FACE_TOKEN_SQL)
            .bind(face_token.as_str())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_identities(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<IdentityRecord>, sqlx::Error> {
        query_as::<Postgres, IdentityRecord>(LIST_IDENTITIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert the identity unless the person id is already taken.
    ///
    /// Returns `None` when another row already holds the person id.
    pub(crate) async fn create_identity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        identity: &NewIdentity,
    ) -> Result<Option<IdentityRecord>, sqlx::Error> {
        query_as::<Postgres, IdentityRecord>(CREATE_IDENTITY_SQL)
            .bind(identity.person_id.as_str())
            .bind(&identity.first_name)
            .bind(&identity.last_name)
            .bind(&identity.contact_number)
            .bind(identity.image_ref.as_str())
            .bind(identity.face_token.as_str())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for IdentityRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            person_id: PersonId::new(row.try_get::<String, _>("person_id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            contact_number: row.try_get("contact_number")?,
            image_ref: ImageRef::new(row.try_get::<String, _>("image_ref")?),
            face_token: FaceToken::new(row.try_get::<String, _>("face_token")?),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
