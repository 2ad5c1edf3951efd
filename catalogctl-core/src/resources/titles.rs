//! Media-title catalog: one row per show or film

use serde::{Deserialize, Serialize};

use crate::db::JsonRow;
use crate::gateway::{Resource, ResourceGateway};

/// Typed view of a title. Director, country and rating are often blank in the
/// source data, so they are nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub show_id: String,
    pub title: String,
    pub director: Option<String>,
    pub country: Option<String>,
    pub release_year: i64,
    pub rating: Option<String>,
}

/// Titles, keyed by `show_id` (e.g. `s1`).
pub struct Titles;

impl Resource for Titles {
    type Row = JsonRow;
    type Key = String;

    const NAME: &'static str = "titles";
    const DEFAULT_TABLE: &'static str = "netflix_titles";
    const DEFAULT_KEY_COLUMN: &'static str = "show_id";
}

pub type TitlesGateway = ResourceGateway<Titles>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::mock::ScriptedDatabase;
    use crate::db::SqlParam;
    use crate::gateway::{DeleteOutcome, Deletable, Listable, Listing, ERROR_SENTINEL};
    use serde_json::json;

    fn stranger_things() -> JsonRow {
        json!({
            "show_id": "s1",
            "title": "Stranger Things",
            "director": "The Duffer Brothers",
            "country": "United States",
            "release_year": 2016,
            "rating": "TV-14",
        })
    }

    #[tokio::test]
    async fn lists_titles() {
        let db = ScriptedDatabase::new();
        db.push_rows(vec![stranger_things()]);
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        let listing = gateway.list_all().await;

        assert_eq!(listing, Listing::Rows(vec![stranger_things()]));
    }

    #[tokio::test]
    async fn extra_and_null_columns_pass_through() {
        let mut first = stranger_things();
        first["duration"] = json!("4 Seasons");
        let second = json!({
            "show_id": "s2",
            "title": null,
            "director": null,
            "country": "South Africa",
            "release_year": "2021",
            "rating": null,
        });
        let db = ScriptedDatabase::new();
        db.push_rows(vec![first.clone(), second.clone()]);
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        assert_eq!(gateway.list_all().await, Listing::Rows(vec![first, second]));
    }

    #[tokio::test]
    async fn typed_view_reports_shape_mismatch() {
        let db = ScriptedDatabase::new();
        db.push_rows(vec![json!({"show_id": "s3", "title": null, "release_year": 2020})]);
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        let listing = gateway.list_all().await;

        assert!(listing.rows().is_some());
        assert!(listing.typed::<Title>().is_err());
    }

    #[tokio::test]
    async fn typed_view_decodes_nullable_columns() {
        let db = ScriptedDatabase::new();
        db.push_rows(vec![json!({
            "show_id": "s2",
            "title": "Blood & Water",
            "director": null,
            "country": "South Africa",
            "release_year": 2021,
            "rating": null,
        })]);
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        let titles = gateway.list_all().await.typed::<Title>().unwrap();
        let titles = titles.into_rows().unwrap();

        assert_eq!(titles[0].director, None);
        assert_eq!(titles[0].rating, None);
    }

    #[tokio::test]
    async fn list_failure_returns_sentinel() {
        let db = ScriptedDatabase::new();
        db.push_error("Database error");
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        let listing = gateway.list_all().await;

        assert_eq!(listing.sentinel(), Some(ERROR_SENTINEL));
        assert_eq!(listing.typed::<Title>().unwrap(), Listing::Unavailable);
    }

    #[tokio::test]
    async fn removes_by_show_id() {
        let db = ScriptedDatabase::new();
        db.push_row_count(1);
        let gateway = TitlesGateway::with_defaults(db.clone()).unwrap();

        assert!(gateway.remove_by_key("s1".to_string()).await);

        let call = &db.calls()[0];
        assert_eq!(call.sql, "DELETE FROM netflix_titles WHERE show_id = $1");
        assert_eq!(call.params, vec![SqlParam::Text("s1".into())]);
    }

    #[tokio::test]
    async fn missing_or_failed_removal_is_false() {
        let db = ScriptedDatabase::new();
        db.push_row_count(0);
        db.push_error("Delete error");
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        assert!(!gateway.remove_by_key("s2".to_string()).await);
        assert!(!gateway.remove_by_key("s1".to_string()).await);
    }

    #[tokio::test]
    async fn detailed_outcome_for_missing_title() {
        let db = ScriptedDatabase::new();
        db.push_row_count(0);
        let gateway = TitlesGateway::with_defaults(db).unwrap();

        assert_eq!(
            gateway.delete_outcome("s404".to_string()).await,
            DeleteOutcome::NotFound
        );
    }
}
