//! Integration tests for the users repository against a real database.

use assert_matches::assert_matches;
use qdo_db::models::user::CreateUser;
use qdo_db::repositories::UserRepo;
use sqlx::PgPool;

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find(pool: PgPool) {
    let created = UserRepo::create_if_absent(&pool, &new_user("alice"))
        .await
        .unwrap()
        .expect("first registration should insert");

    let found = UserRepo::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .expect("user should be found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$argon2id$placeholder");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_returns_none(pool: PgPool) {
    UserRepo::create_if_absent(&pool, &new_user("bob"))
        .await
        .unwrap();
    let second = UserRepo::create_if_absent(&pool, &new_user("bob"))
        .await
        .unwrap();
    assert!(second.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraint_backs_the_lookup(pool: PgPool) {
    UserRepo::create_if_absent(&pool, &new_user("carol"))
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO users (username, password_hash) VALUES ($1, $2)")
        .bind("carol")
        .bind("x")
        .execute(&pool)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some("uq_users_username")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_user(pool: PgPool) {
    let found = UserRepo::find_by_username(&pool, "ghost").await.unwrap();
    assert!(found.is_none());
}
