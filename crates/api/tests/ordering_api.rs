//! HTTP-level integration tests for reorder, bring-to-front and the idea
//! board's connections.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, create_book, get, patch_json, post_empty, post_json, put_json};
use common::{ALICE, BOB};
use serde_json::{json, Value};
use sqlx::PgPool;

fn ids_of(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_chapters_is_deterministic(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Ordered").await;
    let chapters_uri = format!("/api/books/{book}/chapters");

    let a = create(&app, &chapters_uri, ALICE, json!({ "title": "A", "sortOrder": 7 })).await;
    let b = create(&app, &chapters_uri, ALICE, json!({ "title": "B", "sortOrder": 2 })).await;
    let c = create(&app, &chapters_uri, ALICE, json!({ "title": "C", "sortOrder": 40 })).await;

    let response = put_json(
        &app,
        &format!("{chapters_uri}/reorder"),
        ALICE,
        json!({ "ids": [c, a, b] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "ok": true, "updated": 3 }));

    let list = body_json(get(&app, &chapters_uri, ALICE).await).await;
    assert_eq!(ids_of(&list), vec![c, a, b]);
    assert_eq!(list[0]["sortOrder"], 0);
    assert_eq!(list[2]["sortOrder"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_children_are_appended(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Append").await;
    let uri = format!("/api/books/{book}/characters");

    create(&app, &uri, ALICE, json!({ "name": "First" })).await;
    create(&app, &uri, ALICE, json!({ "name": "Second" })).await;

    let list = body_json(get(&app, &uri, ALICE).await).await;
    assert_eq!(list[0]["name"], "First");
    assert_eq!(list[0]["sortOrder"], 0);
    assert_eq!(list[1]["sortOrder"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_rejects_duplicates(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Dupes").await;
    let uri = format!("/api/books/{book}/timeline");
    let a = create(&app, &uri, ALICE, json!({ "title": "A" })).await;

    let response = put_json(&app, &format!("{uri}/reorder"), ALICE, json!({ "ids": [a, a] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_ignores_ids_from_other_parents(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mine = create_book(&app, ALICE, "Mine").await;
    let other = create_book(&app, ALICE, "Other").await;

    let a = create(&app, &format!("/api/books/{mine}/chapters"), ALICE, json!({})).await;
    let stray = create(&app, &format!("/api/books/{other}/chapters"), ALICE, json!({})).await;

    let response = put_json(
        &app,
        &format!("/api/books/{mine}/chapters/reorder"),
        ALICE,
        json!({ "ids": [stray, a] }),
    )
    .await;
    assert_eq!(body_json(response).await["updated"], 1);

    let stray_row = body_json(get(&app, &format!("/api/chapters/{stray}"), ALICE).await).await;
    assert_eq!(stray_row["bookId"], other.as_str());
    assert_eq!(stray_row["sortOrder"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_foreign_parent_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Mine").await;
    let a = create(&app, &format!("/api/books/{book}/chapters"), ALICE, json!({})).await;

    let response = put_json(
        &app,
        &format!("/api/books/{book}/chapters/reorder"),
        BOB,
        json!({ "ids": [a] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_illustrations_under_chapter(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Pictures").await;
    let chapter = create(&app, &format!("/api/books/{book}/chapters"), ALICE, json!({})).await;
    let uri = format!("/api/chapters/{chapter}/illustrations");

    let x = create(&app, &uri, ALICE, json!({ "caption": "x" })).await;
    let y = create(&app, &uri, ALICE, json!({ "caption": "y" })).await;

    let response = put_json(&app, &format!("{uri}/reorder"), ALICE, json!({ "ids": [y, x] })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let list = body_json(get(&app, &uri, ALICE).await).await;
    assert_eq!(ids_of(&list), vec![y, x]);
}

// ---------------------------------------------------------------------------
// Bring to front
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bring_to_front_is_strictly_increasing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Board").await;
    let uri = format!("/api/books/{book}/ideas");

    let ideas = [
        create(&app, &uri, ALICE, json!({ "title": "one" })).await,
        create(&app, &uri, ALICE, json!({ "title": "two" })).await,
        create(&app, &uri, ALICE, json!({ "title": "three" })).await,
    ];

    let mut last = i64::MIN;
    for idea in ideas.iter().chain(ideas.iter()) {
        let response = post_empty(&app, &format!("/api/ideas/{idea}/front"), ALICE).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["ok"], true);
        let z = json["zIndex"].as_i64().unwrap();
        assert!(z > last, "zIndex {z} should exceed {last}");
        last = z;
    }

    let board = body_json(get(&app, &uri, ALICE).await).await;
    let top = board.as_array().unwrap().last().unwrap();
    assert_eq!(top["id"], ideas[2].as_str());
    assert_eq!(top["zIndex"], last);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bring_to_front_foreign_idea_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Board").await;
    let idea = create(&app, &format!("/api/books/{book}/ideas"), ALICE, json!({})).await;

    let response = post_empty(&app, &format!("/api/ideas/{idea}/front"), BOB).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Connections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_connection_endpoints_must_be_distinct_ideas_of_the_book(pool: PgPool) {
    let app = common::build_test_app(pool);
    let book = create_book(&app, ALICE, "Web").await;
    let other = create_book(&app, ALICE, "Elsewhere").await;
    let a = create(&app, &format!("/api/books/{book}/ideas"), ALICE, json!({})).await;
    let b = create(&app, &format!("/api/books/{book}/ideas"), ALICE, json!({})).await;
    let far = create(&app, &format!("/api/books/{other}/ideas"), ALICE, json!({})).await;
    let uri = format!("/api/books/{book}/connections");

    let self_loop = post_json(&app, &uri, ALICE, json!({ "fromIdeaId": a, "toIdeaId": a })).await;
    assert_eq!(self_loop.status(), StatusCode::BAD_REQUEST);

    let cross = post_json(&app, &uri, ALICE, json!({ "fromIdeaId": a, "toIdeaId": far })).await;
    assert_eq!(cross.status(), StatusCode::BAD_REQUEST);

    let edge = create(
        &app,
        &uri,
        ALICE,
        json!({ "fromIdeaId": a, "toIdeaId": b, "label": "causes" }),
    )
    .await;

    // Endpoints are identity; only color and label change.
    let response = patch_json(
        &app,
        &format!("/api/connections/{edge}"),
        ALICE,
        json!({ "toIdeaId": far, "label": "prevents", "color": "red" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(&app, &format!("/api/connections/{edge}"), ALICE).await).await;
    assert_eq!(json["toIdeaId"], b.as_str());
    assert_eq!(json["label"], "prevents");
    assert_eq!(json["color"], "red");
}
