//! Integration tests for the notification dedup ledger

mod helpers;

use helpers::TestDatabase;

use andijanhub_storage::database::{NotificationRepository, UserRepository};
use andijanhub_storage::models::{Category, UserField};

#[tokio::test]
async fn test_mark_then_check() {
    let db = TestDatabase::new().await.unwrap();
    let users = UserRepository::new(db.pool.clone());
    let ledger = NotificationRepository::new(db.pool.clone());

    users.upsert(42, &[]).await.unwrap();

    assert!(!ledger.is_notified(42, "post7").await.unwrap());
    ledger.mark_notified(42, "post7").await.unwrap();
    assert!(ledger.is_notified(42, "post7").await.unwrap());
    assert!(!ledger.is_notified(42, "post8").await.unwrap());
}

#[tokio::test]
async fn test_mark_is_idempotent() {
    let db = TestDatabase::new().await.unwrap();
    let users = UserRepository::new(db.pool.clone());
    let ledger = NotificationRepository::new(db.pool.clone());

    users.upsert(42, &[]).await.unwrap();
    ledger.mark_notified(42, "post7").await.unwrap();
    ledger.mark_notified(42, "post7").await.unwrap();

    assert_eq!(ledger.count_for_user(42).await.unwrap(), 1);
    assert_eq!(ledger.notified_posts(42).await.unwrap(), vec!["post7"]);
}

#[tokio::test]
async fn test_empty_ledger_matches_nothing() {
    let db = TestDatabase::new().await.unwrap();
    let users = UserRepository::new(db.pool.clone());
    let ledger = NotificationRepository::new(db.pool.clone());

    users.upsert(42, &[]).await.unwrap();

    // The empty-string post id must not match an empty ledger
    assert!(!ledger.is_notified(42, "").await.unwrap());
    assert!(ledger.notified_posts(42).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mark_for_unknown_user_is_noop() {
    let db = TestDatabase::new().await.unwrap();
    let users = UserRepository::new(db.pool.clone());
    let ledger = NotificationRepository::new(db.pool.clone());

    ledger.mark_notified(99, "post1").await.unwrap();

    assert!(!ledger.is_notified(99, "post1").await.unwrap());
    assert_eq!(users.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unknown_user_is_never_notified() {
    let db = TestDatabase::new().await.unwrap();
    let ledger = NotificationRepository::new(db.pool.clone());

    assert!(!ledger.is_notified(12345, "post7").await.unwrap());
}

#[tokio::test]
async fn test_ledgers_are_per_user() {
    let db = TestDatabase::new().await.unwrap();
    let users = UserRepository::new(db.pool.clone());
    let ledger = NotificationRepository::new(db.pool.clone());

    users.upsert(1, &[]).await.unwrap();
    users.upsert(2, &[]).await.unwrap();
    ledger.mark_notified(1, "post7").await.unwrap();

    assert!(ledger.is_notified(1, "post7").await.unwrap());
    assert!(!ledger.is_notified(2, "post7").await.unwrap());
}

#[tokio::test]
async fn test_should_notify_flow() {
    let db = TestDatabase::new().await.unwrap();
    let service = db.service();

    // unknown user: never notify
    assert!(!service.should_notify(42, Category::Internships, "post7").await.unwrap());

    service.users.upsert(42, &[]).await.unwrap();
    assert!(service.should_notify(42, Category::Internships, "post7").await.unwrap());

    service.notifications.mark_notified(42, "post7").await.unwrap();
    assert!(!service.should_notify(42, Category::Internships, "post7").await.unwrap());
    assert!(service.should_notify(42, Category::Internships, "post8").await.unwrap());

    // opted out of the category
    service
        .users
        .upsert(42, &[UserField::Internships(false)])
        .await
        .unwrap();
    assert!(!service.should_notify(42, Category::Internships, "post8").await.unwrap());
}
