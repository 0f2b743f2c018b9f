//! Tests for milestone replace semantics (delete-then-reinsert).

mod common;

use chrono::NaiveDate;
use planhub_db::models::milestone::MilestoneInput;
use planhub_db::repositories::MilestoneRepo;
use sqlx::PgPool;

fn milestone(title: &str) -> MilestoneInput {
    MilestoneInput {
        title: title.to_string(),
        due_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Test: replacing with a new set removes all prior rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_swaps_entire_set(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner@example.com").await;
    let project = common::seed_project(&pool, &owner, "Launch").await;

    MilestoneRepo::replace_for_project(
        &pool,
        project.id,
        &[milestone("Alpha"), milestone("Beta"), milestone("GA")],
    )
    .await
    .expect("initial insert should succeed");

    let replaced = MilestoneRepo::replace_for_project(&pool, project.id, &[milestone("Rescope")])
        .await
        .expect("replace should succeed");

    assert_eq!(replaced.len(), 1);
    assert_eq!(replaced[0].title, "Rescope");

    let stored = MilestoneRepo::list_for_project(&pool, project.id)
        .await
        .expect("list should succeed");
    assert_eq!(stored.len(), 1, "old milestones must not survive a replace");
}

// ---------------------------------------------------------------------------
// Test: replacing with an empty set clears all milestones
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_with_empty_set_clears_all(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner@example.com").await;
    let project = common::seed_project(&pool, &owner, "Launch").await;

    MilestoneRepo::replace_for_project(
        &pool,
        project.id,
        &[milestone("M1"), milestone("M2"), milestone("M3")],
    )
    .await
    .expect("insert should succeed");

    let replaced = MilestoneRepo::replace_for_project(&pool, project.id, &[])
        .await
        .expect("empty replace should succeed");
    assert!(replaced.is_empty());

    let stored = MilestoneRepo::list_for_project(&pool, project.id)
        .await
        .expect("list should succeed");
    assert_eq!(stored.len(), 0, "a project replaced with [] must have 0 milestone rows");
}

// ---------------------------------------------------------------------------
// Test: replace only touches the target project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn replace_is_scoped_to_one_project(pool: PgPool) {
    let owner = common::seed_user(&pool, "owner@example.com").await;
    let a = common::seed_project(&pool, &owner, "A").await;
    let b = common::seed_project(&pool, &owner, "B").await;

    MilestoneRepo::replace_for_project(&pool, a.id, &[milestone("A1")])
        .await
        .expect("insert for A should succeed");
    MilestoneRepo::replace_for_project(&pool, b.id, &[milestone("B1"), milestone("B2")])
        .await
        .expect("insert for B should succeed");

    MilestoneRepo::replace_for_project(&pool, a.id, &[])
        .await
        .expect("clearing A should succeed");

    let b_stored = MilestoneRepo::list_for_project(&pool, b.id)
        .await
        .expect("list should succeed");
    assert_eq!(b_stored.len(), 2, "project B's milestones must be untouched");
}
