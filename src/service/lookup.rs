//! Parameterized SELECTs against SQLite. One scoped connection per call.

use crate::error::AppError;
use crate::model::{County, CountyRow, IndexRecord, IndexRow, Locality, LocalityRow, State, StateRow};
use crate::store::ConnectionProvider;
use sqlx::sqlite::SqliteRow;
use sqlx::Connection;

const SELECT_STATES: &str = "SELECT StateId, StateName FROM State ORDER BY StateId";

const SELECT_COUNTIES_BY_STATE: &str = r#"
    SELECT County.CountyId, County.StateId, County.CountyName
    FROM County
    INNER JOIN State ON County.StateId = State.StateId
    WHERE State.StateName = ?1
    ORDER BY County.CountyId
"#;

const SELECT_INDEXES_BY_COUNTY: &str = r#"
    SELECT OrbIndex.OrbIndexId, OrbIndex.StateId, OrbIndex.CountyId, OrbIndex.LocalityId,
           OrbIndex.OrbIndexTypeId, State.StateName, County.CountyName, OrbIndex.IndexName,
           OrbIndex.Url, OrbIndex.Username, OrbIndex.Password
    FROM OrbIndex
    INNER JOIN County ON County.CountyId = OrbIndex.CountyId
    INNER JOIN State ON State.StateId = County.StateId
    WHERE State.StateName = ?1 AND County.CountyName = ?2
    ORDER BY OrbIndex.OrbIndexId
"#;

const SELECT_LOCALITIES_BY_COUNTY: &str = r#"
    SELECT Locality.LocalityId, Locality.StateId, Locality.CountyId, Locality.LocalityName
    FROM Locality
    INNER JOIN County ON County.CountyId = Locality.CountyId
    INNER JOIN State ON State.StateId = County.StateId
    WHERE State.StateName = ?1 AND County.CountyName = ?2
    ORDER BY Locality.LocalityId
"#;

/// Name matches are exact and case-sensitive. No rows is an empty vec, not an error.
pub struct LookupRepository;

impl LookupRepository {
    pub async fn list_states(provider: &ConnectionProvider) -> Result<Vec<State>, AppError> {
        let rows: Vec<StateRow> = Self::fetch_all(provider, SELECT_STATES, &[]).await?;
        Ok(rows.into_iter().map(State::from).collect())
    }

    /// Counties whose owning state is named `state_name`.
    pub async fn list_counties(
        provider: &ConnectionProvider,
        state_name: &str,
    ) -> Result<Vec<County>, AppError> {
        let rows: Vec<CountyRow> =
            Self::fetch_all(provider, SELECT_COUNTIES_BY_STATE, &[state_name]).await?;
        Ok(rows.into_iter().map(County::from).collect())
    }

    /// Index records under `county_name`, itself under `state_name`.
    pub async fn list_index_records(
        provider: &ConnectionProvider,
        state_name: &str,
        county_name: &str,
    ) -> Result<Vec<IndexRecord>, AppError> {
        let rows: Vec<IndexRow> =
            Self::fetch_all(provider, SELECT_INDEXES_BY_COUNTY, &[state_name, county_name]).await?;
        Ok(rows.into_iter().map(IndexRecord::from).collect())
    }

    pub async fn list_localities(
        provider: &ConnectionProvider,
        state_name: &str,
        county_name: &str,
    ) -> Result<Vec<Locality>, AppError> {
        let rows: Vec<LocalityRow> =
            Self::fetch_all(provider, SELECT_LOCALITIES_BY_COUNTY, &[state_name, county_name])
                .await?;
        Ok(rows.into_iter().map(Locality::from).collect())
    }

    /// Check the datastore answers a trivial query.
    pub async fn ping(provider: &ConnectionProvider) -> Result<(), AppError> {
        let mut conn = provider.open().await?;
        sqlx::query("SELECT 1").fetch_optional(&mut conn).await?;
        conn.close().await?;
        Ok(())
    }

    async fn fetch_all<'q, T>(
        provider: &ConnectionProvider,
        sql: &'q str,
        params: &[&'q str],
    ) -> Result<Vec<T>, AppError>
    where
        T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
    {
        tracing::debug!(sql = %sql.trim(), params = ?params, "query");
        let mut conn = provider.open().await?;
        let mut query = sqlx::query_as::<_, T>(sql);
        for p in params {
            query = query.bind(*p);
        }
        let rows = query.fetch_all(&mut conn).await?;
        conn.close().await?;
        Ok(rows)
    }
}
