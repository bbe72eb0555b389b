//! Integration tests for the ownership-scoped repository layer.
//!
//! Exercises ownership resolution, projected updates, ordering and cascade
//! behaviour against a real database.

use quillboard_core::ordering::positions;
use quillboard_core::resource::{project, ResourceKind};
use quillboard_core::types::DbId;
use quillboard_db::models::book::CreateBook;
use quillboard_db::models::chapter::CreateChapter;
use quillboard_db::models::character::CreateCharacter;
use quillboard_db::models::connection::CreateConnection;
use quillboard_db::models::idea::CreateIdea;
use quillboard_db::models::illustration::CreateIllustration;
use quillboard_db::models::timeline_event::CreateTimelineEvent;
use quillboard_db::models::wishlist::CreateWishlistItem;
use quillboard_db::repositories::{
    BookRepo, ChapterRepo, CharacterRepo, ConnectionRepo, IdeaRepo, IllustrationRepo,
    OrderingRepo, ScopedRepo, TimelineEventRepo, WishlistRepo,
};
use serde_json::{json, Map, Value};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ALICE: &str = "user_alice";
const BOB: &str = "user_bob";

async fn new_book(pool: &PgPool, user: &str) -> DbId {
    BookRepo::create(
        pool,
        user,
        &CreateBook {
            title: Some("The Long Winter".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

async fn new_chapter(pool: &PgPool, book_id: DbId, title: &str) -> DbId {
    ChapterRepo::create(
        pool,
        book_id,
        &CreateChapter {
            title: Some(title.into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

fn payload(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("payload must be an object"),
    }
}

async fn sibling_ids(pool: &PgPool, kind: ResourceKind, parent: DbId) -> Vec<String> {
    ScopedRepo::list_by_parent(pool, kind, parent)
        .await
        .unwrap()
        .into_iter()
        .map(|row| row["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Ownership resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_owned_returns_row_for_owner(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "Prologue").await;

    let row = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, chapter, ALICE)
        .await
        .unwrap()
        .expect("owner must see the chapter");

    assert_eq!(row["title"], "Prologue");
    assert_eq!(row["book_id"], book.to_string());
    assert_eq!(row["status"], "draft");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_users_record_is_indistinguishable_from_missing(pool: PgPool) {
    let book = new_book(&pool, BOB).await;
    let chapter = new_chapter(&pool, book, "Secret").await;

    let foreign = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, chapter, ALICE)
        .await
        .unwrap();
    let missing = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, DbId::now_v7(), ALICE)
        .await
        .unwrap();

    assert!(foreign.is_none());
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_illustration_ownership_goes_through_chapter(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "One").await;
    let illustration = IllustrationRepo::create(
        &pool,
        chapter,
        &CreateIllustration {
            caption: Some("Map of the valley".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(
        ScopedRepo::is_owned(&pool, ResourceKind::Illustration, illustration, ALICE)
            .await
            .unwrap()
    );
    assert!(
        !ScopedRepo::is_owned(&pool, ResourceKind::Illustration, illustration, BOB)
            .await
            .unwrap()
    );
}

// ---------------------------------------------------------------------------
// Projected updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_writes_only_whitelisted_fields(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "Draft title").await;

    let projection = project(
        ResourceKind::Chapter,
        &payload(json!({"title": "Final title", "wordCount": 1200, "bookId": "x"})),
    );
    assert!(ScopedRepo::apply(&pool, ResourceKind::Chapter, chapter, &projection)
        .await
        .unwrap());

    let row = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, chapter, ALICE)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row["title"], "Final title");
    assert_eq!(row["word_count"], 1200);
    assert_eq!(row["book_id"], book.to_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_update_only_touches_timestamp(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "Unchanged").await;

    let before = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, chapter, ALICE)
        .await
        .unwrap()
        .unwrap();

    let projection = project(ResourceKind::Chapter, &payload(json!({"bogus": 1})));
    assert!(projection.is_empty());
    assert!(ScopedRepo::apply(&pool, ResourceKind::Chapter, chapter, &projection)
        .await
        .unwrap());

    let after = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, chapter, ALICE)
        .await
        .unwrap()
        .unwrap();

    for (key, value) in &before {
        if key != "updated_at" {
            assert_eq!(&after[key], value, "column {key} changed");
        }
    }
    assert_ne!(before["updated_at"], after["updated_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_null_clears_nullable_column(pool: PgPool) {
    let book = BookRepo::create(
        &pool,
        ALICE,
        &CreateBook {
            title: Some("Notes".into()),
            genre: Some("Mystery".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let projection = project(ResourceKind::Book, &payload(json!({"genre": null})));
    ScopedRepo::apply(&pool, ResourceKind::Book, book, &projection)
        .await
        .unwrap();

    let row = ScopedRepo::find_owned(&pool, ResourceKind::Book, book, ALICE)
        .await
        .unwrap()
        .unwrap();
    assert!(row["genre"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_value_fails_in_storage(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "Typed").await;

    let projection = project(
        ResourceKind::Chapter,
        &payload(json!({"wordCount": "many"})),
    );
    let result = ScopedRepo::apply(&pool, ResourceKind::Chapter, chapter, &projection).await;
    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_ids_round_trip_as_json_text(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let hero = CharacterRepo::create(
        &pool,
        book,
        &CreateCharacter {
            name: Some("Mara".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let event = TimelineEventRepo::create(
        &pool,
        book,
        &CreateTimelineEvent {
            title: Some("The flood".into()),
            character_ids: Some(vec![hero]),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let row = ScopedRepo::find_owned(&pool, ResourceKind::TimelineEvent, event, ALICE)
        .await
        .unwrap()
        .unwrap();
    let wire = ResourceKind::TimelineEvent.shape_for_wire(row);
    assert_eq!(wire["characterIds"], json!([hero.to_string()]));

    let projection = project(
        ResourceKind::TimelineEvent,
        &payload(json!({"characterIds": []})),
    );
    ScopedRepo::apply(&pool, ResourceKind::TimelineEvent, event, &projection)
        .await
        .unwrap();
    let row = ScopedRepo::find_owned(&pool, ResourceKind::TimelineEvent, event, ALICE)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row["character_ids"], "[]");
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_chapters_are_appended(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let first = new_chapter(&pool, book, "A").await;
    let second = new_chapter(&pool, book, "B").await;

    let rows = ScopedRepo::list_by_parent(&pool, ResourceKind::Chapter, book)
        .await
        .unwrap();
    assert_eq!(rows[0]["id"], first.to_string());
    assert_eq!(rows[0]["sort_order"], 0);
    assert_eq!(rows[1]["id"], second.to_string());
    assert_eq!(rows[1]["sort_order"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_is_deterministic(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let a = new_chapter(&pool, book, "A").await;
    let b = new_chapter(&pool, book, "B").await;
    let c = new_chapter(&pool, book, "C").await;

    let updated = OrderingRepo::reorder(
        &pool,
        ResourceKind::Chapter,
        book,
        &positions(&[c, a, b]).unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(updated, 3);

    assert_eq!(
        sibling_ids(&pool, ResourceKind::Chapter, book).await,
        vec![c.to_string(), a.to_string(), b.to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reorder_ignores_ids_of_other_parents(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let other_book = new_book(&pool, ALICE).await;
    let a = new_chapter(&pool, book, "A").await;
    let b = new_chapter(&pool, book, "B").await;
    let stranger = new_chapter(&pool, other_book, "Elsewhere").await;

    let updated = OrderingRepo::reorder(
        &pool,
        ResourceKind::Chapter,
        book,
        &positions(&[b, stranger, a]).unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(updated, 2);

    let row = ScopedRepo::find_owned(&pool, ResourceKind::Chapter, stranger, ALICE)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row["sort_order"], 0);
    assert_eq!(
        sibling_ids(&pool, ResourceKind::Chapter, book).await,
        vec![b.to_string(), a.to_string()]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_illustrations_reorder_within_chapter(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "Pictures").await;
    let mut ids = Vec::new();
    for caption in ["one", "two", "three"] {
        ids.push(
            IllustrationRepo::create(
                &pool,
                chapter,
                &CreateIllustration {
                    caption: Some(caption.into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap(),
        );
    }
    ids.reverse();

    OrderingRepo::reorder(
        &pool,
        ResourceKind::Illustration,
        chapter,
        &positions(&ids).unwrap(),
    )
    .await
    .unwrap();

    let expected: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(
        sibling_ids(&pool, ResourceKind::Illustration, chapter).await,
        expected
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bring_to_front_is_strictly_increasing(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let mut ideas = Vec::new();
    for _ in 0..3 {
        ideas.push(
            IdeaRepo::create(&pool, book, &CreateIdea::default())
                .await
                .unwrap(),
        );
    }

    let mut last = -1;
    for idea in [ideas[0], ideas[2], ideas[1], ideas[0]] {
        let z = OrderingRepo::bring_to_front(&pool, idea, book)
            .await
            .unwrap()
            .expect("idea belongs to book");
        assert!(z > last, "z_index {z} not above {last}");
        last = z;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bring_to_front_rejects_idea_of_another_book(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let other = new_book(&pool, ALICE).await;
    let idea = IdeaRepo::create(&pool, other, &CreateIdea::default())
        .await
        .unwrap();

    let result = OrderingRepo::bring_to_front(&pool, idea, book).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_bring_to_front_yields_distinct_values(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let a = IdeaRepo::create(&pool, book, &CreateIdea::default())
        .await
        .unwrap();
    let b = IdeaRepo::create(&pool, book, &CreateIdea::default())
        .await
        .unwrap();

    let (za, zb) = tokio::join!(
        OrderingRepo::bring_to_front(&pool, a, book),
        OrderingRepo::bring_to_front(&pool, b, book),
    );

    assert_ne!(za.unwrap(), zb.unwrap());
}

// ---------------------------------------------------------------------------
// Wishlist
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wishlist_toggle_flips_back_and_forth(pool: PgPool) {
    let item = WishlistRepo::create(
        &pool,
        ALICE,
        "Alice",
        &CreateWishlistItem {
            title: "Dark mode".into(),
            description: None,
            item_type: None,
            created_by_name: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(
        WishlistRepo::toggle_status(&pool, item).await.unwrap().as_deref(),
        Some("done")
    );
    assert_eq!(
        WishlistRepo::toggle_status(&pool, item).await.unwrap().as_deref(),
        Some("open")
    );
    assert!(WishlistRepo::toggle_status(&pool, DbId::now_v7())
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wishlist_list_spans_all_users(pool: PgPool) {
    for (user, title) in [(ALICE, "Export to EPUB"), (BOB, "Word goals")] {
        WishlistRepo::create(
            &pool,
            user,
            user,
            &CreateWishlistItem {
                title: title.into(),
                description: None,
                item_type: None,
                created_by_name: None,
            },
        )
        .await
        .unwrap();
    }

    let rows = ScopedRepo::list_all(&pool, ResourceKind::WishlistItem)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}

// ---------------------------------------------------------------------------
// Cascade
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_book_cascades_to_descendants(pool: PgPool) {
    let book = new_book(&pool, ALICE).await;
    let chapter = new_chapter(&pool, book, "Doomed").await;
    CharacterRepo::create(&pool, book, &CreateCharacter::default())
        .await
        .unwrap();
    let from = IdeaRepo::create(&pool, book, &CreateIdea::default())
        .await
        .unwrap();
    let to = IdeaRepo::create(&pool, book, &CreateIdea::default())
        .await
        .unwrap();
    ConnectionRepo::create(
        &pool,
        book,
        &CreateConnection {
            from_idea_id: from,
            to_idea_id: to,
            color: None,
            label: None,
        },
    )
    .await
    .unwrap();
    IllustrationRepo::create(&pool, chapter, &CreateIllustration::default())
        .await
        .unwrap();
    TimelineEventRepo::create(&pool, book, &CreateTimelineEvent::default())
        .await
        .unwrap();

    assert!(ScopedRepo::delete(&pool, ResourceKind::Book, book)
        .await
        .unwrap());

    for table in [
        "chapters",
        "characters",
        "ideas",
        "connections",
        "illustrations",
        "timeline_events",
        "images",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0, "{table} still has rows");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_user_only_returns_own_books(pool: PgPool) {
    new_book(&pool, ALICE).await;
    new_book(&pool, ALICE).await;
    new_book(&pool, BOB).await;

    let rows = ScopedRepo::list_for_user(&pool, ResourceKind::Book, ALICE)
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["user_id"] == ALICE));
}
