//! Shared fixtures for repository tests.

use planhub_core::roles::ROLE_TEAM_MEMBER;
use planhub_db::models::project::CreateProject;
use planhub_db::models::user::{CreateUser, User};
use planhub_db::repositories::ProjectRepo;
use sqlx::PgPool;

/// Insert a user with a unique email and a placeholder hash.
pub async fn seed_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$placeholder$placeholder".to_string(),
        profile_picture_url: None,
        role: ROLE_TEAM_MEMBER.to_string(),
    };
    planhub_db::repositories::UserRepo::create(pool, &input)
        .await
        .expect("seed user should insert")
}

/// Insert a project owned by `owner` with no milestones.
pub async fn seed_project(pool: &PgPool, owner: &User, title: &str) -> planhub_db::models::project::Project {
    let input = CreateProject {
        title: title.to_string(),
        description: None,
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        milestones: None,
    };
    let mut tx = pool.begin().await.expect("begin");
    let project = ProjectRepo::create(&mut tx, &input, owner.id)
        .await
        .expect("seed project should insert");
    tx.commit().await.expect("commit");
    project
}
