#![allow(clippy::unused_async)]
//! Resource catalog integration tests.

use salvo::http::StatusCode;

use super::helpers::*;

/// ## Summary
/// Test that the catalog endpoint lists the seeded resources sorted by name.
#[test_log::test(tokio::test)]
async fn resources_lists_seeded_catalog() {
    let service = create_test_service();

    let body = TestRequest::get(RESOURCES_ROUTE_PREFIX)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let resources = body["resources"].as_array().expect("resources array");
    let names: Vec<&str> = resources
        .iter()
        .filter_map(|resource| resource["name"].as_str())
        .collect();

    assert_eq!(
        names,
        vec!["Chemistry Lab B", "Library Study Room 3", "Main Hall"]
    );
    assert_eq!(resources[1]["capacity"], 6);
    assert_eq!(resources[1]["category"], "room");
}
