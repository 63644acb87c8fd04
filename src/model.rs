//! Flat, read-only rows. Ids are internal; only names, urls and credentials are serialized.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(skip)]
    pub state_id: i64,
    pub state_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct County {
    #[serde(skip)]
    pub county_id: i64,
    #[serde(skip)]
    pub state_id: i64,
    pub county_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locality {
    #[serde(skip)]
    pub locality_id: i64,
    #[serde(skip)]
    pub state_id: i64,
    #[serde(skip)]
    pub county_id: i64,
    pub locality_name: String,
}

/// Index record joined with its owning state and county names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRecord {
    #[serde(skip)]
    pub index_id: i64,
    #[serde(skip)]
    pub state_id: i64,
    #[serde(skip)]
    pub county_id: i64,
    #[serde(skip)]
    pub locality_id: Option<i64>,
    #[serde(skip)]
    pub index_type_id: Option<i64>,
    pub state_name: String,
    pub county_name: String,
    pub index_name: String,
    pub url: Option<String>,
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl IndexRecord {
    /// Drop the stored password so it never reaches a response body.
    pub fn redacted(self) -> Self {
        Self {
            password: None,
            ..self
        }
    }
}

pub(crate) type StateRow = (i64, String);
pub(crate) type CountyRow = (i64, i64, String);
pub(crate) type LocalityRow = (i64, i64, i64, String);
pub(crate) type IndexRow = (
    i64,
    i64,
    i64,
    Option<i64>,
    Option<i64>,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
);

impl From<StateRow> for State {
    fn from((state_id, state_name): StateRow) -> Self {
        Self { state_id, state_name }
    }
}

impl From<CountyRow> for County {
    fn from((county_id, state_id, county_name): CountyRow) -> Self {
        Self { county_id, state_id, county_name }
    }
}

impl From<LocalityRow> for Locality {
    fn from((locality_id, state_id, county_id, locality_name): LocalityRow) -> Self {
        Self { locality_id, state_id, county_id, locality_name }
    }
}

impl From<IndexRow> for IndexRecord {
    fn from(row: IndexRow) -> Self {
        let (
            index_id,
            state_id,
            county_id,
            locality_id,
            index_type_id,
            state_name,
            county_name,
            index_name,
            url,
            username,
            password,
        ) = row;
        Self {
            index_id,
            state_id,
            county_id,
            locality_id,
            index_type_id,
            state_name,
            county_name,
            index_name,
            url,
            username,
            password,
        }
    }
}
