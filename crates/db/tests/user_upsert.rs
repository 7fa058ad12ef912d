//! Integration tests for the email-keyed user upsert.

use allnote_db::models::user::UpsertUser;
use allnote_db::repositories::UserRepo;
use sqlx::PgPool;

fn login(email: &str, name: &str) -> UpsertUser {
    UpsertUser {
        email: email.to_string(),
        user_name: Some(name.to_string()),
        provider: Some("google".to_string()),
        verified: Some(true),
        ..Default::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_inserts_new_email(pool: PgPool) {
    let user = UserRepo::upsert(&pool, &login("new@example.com", "New"))
        .await
        .unwrap();

    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.user_name, "New");
    assert_eq!(user.provider, "google");
    assert_eq!(user.verified, Some(true));
    assert_eq!(user.photo, "");
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_merges_existing_email(pool: PgPool) {
    let first = UserRepo::upsert(&pool, &login("same@example.com", "First"))
        .await
        .unwrap();

    let second_input = UpsertUser {
        email: "same@example.com".to_string(),
        photo: Some("https://example.com/p.png".to_string()),
        ..Default::default()
    };
    let second = UserRepo::upsert(&pool, &second_input).await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.user_name, "First");
    assert_eq!(second.photo, "https://example.com/p.png");
    assert!(second.updated_at > first.updated_at);
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_upserts_converge(pool: PgPool) {
    let mut handles = Vec::new();
    for i in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            UserRepo::upsert(&pool, &login("race@example.com", &format!("user-{i}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let found = UserRepo::find_by_email(&pool, "race@example.com")
        .await
        .unwrap();
    assert!(found.is_some());
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}
