//! Visits Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    domain::visitors::{
        data::NewVisit,
        records::{AttendanceStatus, VisitRecord, VisitUuid, VisitorIdentity},
    },
    keys::{FaceToken, PersonId},
};

const APPEND_VISIT_SQL: &str = include_str!("sql/append_visit.sql");
const LIST_VISITS_SQL: &str = include_str!("sql/list_visits.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgVisitsRepository;

impl PgVisitsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn append_visit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        visit: &NewVisit,
    ) -> Result<VisitRecord, sqlx::Error> {
        let identity = visit.identity.as_ref();

        query_as::<Postgres, VisitRecord>(APPEND_VISIT_SQL)
            .bind(visit.uuid.into_uuid())
            .bind(&visit.image_data)
            .bind(visit.face_token.as_ref().map(FaceToken::as_str))
            .bind(identity.map(|identity| identity.person_id.as_str()))
            .bind(identity.map(|identity| identity.first_name.as_str()))
            .bind(identity.map(|identity| identity.last_name.as_str()))
            .bind(identity.map(|identity| identity.contact_number.as_str()))
            .bind(visit.attendance().as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_visits(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<VisitRecord>, sqlx::Error> {
        query_as::<Postgres, VisitRecord>(LIST_VISITS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for VisitRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let attendance = row
            .try_get::<String, _>("attendance")?
            .parse::<AttendanceStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "attendance".to_string(),
                source: Box::new(e),
            })?;

        let identity = match row.try_get::<Option<String>, _>("person_id")? {
            Some(person_id) => Some(VisitorIdentity {
                person_id: PersonId::new(person_id),
                first_name: row
                    .try_get::<Option<String>, _>("first_name")?
                    .unwrap_or_default(),
                last_name: row
                    .try_get::<Option<String>, _>("last_name")?
                    .unwrap_or_default(),
                contact_number: row
                    .try_get::<Option<String>, _>("contact_number")?
                    .unwrap_or_default(),
            }),
            None => None,
        };

        Ok(Self {
            uuid: VisitUuid::from_uuid(row.try_get::<Uuid, _>("uuid")?),
            visited_at: row.try_get::<SqlxTimestamp, _>("visited_at")?.to_jiff(),
            image_data: row.try_get("image_data")?,
            face_token: row
                .try_get::<Option<String>, _>("face_token")?
                .map(FaceToken::new),
            identity,
            attendance,
        })
    }
}
