//! Integration tests for the startup reset-and-seed step.
//!
//! Each test receives a fresh, empty database and runs the same
//! `sync_and_seed` call the server binary makes on boot.

use assert_matches::assert_matches;
use gatehouse_db::models::user::CreateUser;
use gatehouse_db::repositories::{RoleRepo, UserRepo};
use gatehouse_db::BootstrapError;
use sqlx::PgPool;

fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "not-a-real-hash".to_string(),
    }
}

#[sqlx::test(migrations = false)]
async fn seeds_exactly_three_fixed_roles(pool: PgPool) {
    let seeded = gatehouse_db::sync_and_seed(&pool).await.unwrap();
    assert_eq!(seeded.len(), 3);

    let roles = RoleRepo::list(&pool).await.unwrap();
    let pairs: Vec<(i32, &str)> = roles.iter().map(|r| (r.id, r.name.as_str())).collect();
    assert_eq!(pairs, vec![(1, "user"), (2, "moderator"), (3, "admin")]);
}

#[sqlx::test(migrations = false)]
async fn resync_wipes_users_and_reseeds_roles(pool: PgPool) {
    gatehouse_db::sync_and_seed(&pool).await.unwrap();
    UserRepo::create_with_roles(&pool, &new_user("survivor"), &[1, 3])
        .await
        .unwrap();
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);

    gatehouse_db::sync_and_seed(&pool).await.unwrap();

    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
    assert_eq!(RoleRepo::list(&pool).await.unwrap().len(), 3);

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_roles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(links, 0);
}

#[sqlx::test(migrations = false)]
async fn seeding_twice_without_reset_fails(pool: PgPool) {
    gatehouse_db::sync_and_seed(&pool).await.unwrap();

    let result = gatehouse_db::seed::seed_roles(&pool).await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));

    // The failed batch must not leave partial rows behind.
    assert_eq!(RoleRepo::list(&pool).await.unwrap().len(), 3);
}

#[sqlx::test(migrations = false)]
async fn health_check_passes_after_bootstrap(pool: PgPool) {
    let result: Result<_, BootstrapError> = gatehouse_db::sync_and_seed(&pool).await;
    assert!(result.is_ok());
    gatehouse_db::health_check(&pool).await.unwrap();
}
