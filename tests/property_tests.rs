//! Property-Based Tests for the items API
//!
//! For any valid item created through the API, reading it back (cold and
//! cached) returns the same fields.

mod common;

use axum::http::StatusCode;
use proptest::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use common::{body_to_json, create_test_app, get, post_json};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 _\\-\"'/]{0,40}".prop_map(|s| s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_created_item_reads_back_unchanged(
        name in name_strategy(),
        description in proptest::option::of("[ -~]{0,80}"),
        price in -1.0e9f64..1.0e9f64,
    ) {
        let app = create_test_app();
        let body = json!({"name": name, "description": description, "price": price});

        let (id, reads) = tokio_test::block_on(async {
            let response = app
                .clone()
                .oneshot(post_json("/items", &body.to_string()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let id = body_to_json(response.into_body()).await["id"].as_i64().unwrap();

            let mut reads = Vec::new();
            for _ in 0..2 {
                let response = app.clone().oneshot(get(&format!("/items/{}", id))).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                reads.push(body_to_json(response.into_body()).await);
            }
            (id, reads)
        });

        let expected = json!({"id": id, "name": name, "description": description, "price": price});
        prop_assert_eq!(&reads[0]["source"], "database");
        prop_assert_eq!(&reads[1]["source"], "cache");
        prop_assert_eq!(&reads[0]["item"], &expected);
        prop_assert_eq!(&reads[1]["item"], &expected);
    }
}
