//! Shared fixture builders for repository tests.
#![allow(dead_code)] // not every test binary touches every fixture

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use atelier_core::pricing;
use atelier_core::types::{DbId, Timestamp};
use atelier_db::models::client::CreateClient;
use atelier_db::models::job::CreateJob;
use atelier_db::models::project::CreateProject;
use atelier_db::models::task::CreateTask;
use atelier_db::models::user::{CreateUser, User};
use atelier_db::repositories::{CategoryRepo, ClientRepo, JobRepo, ProjectRepo, TaskRepo, UserRepo};
use atelier_db::models::category::CreateCategory;
use atelier_db::models::job::Job;
use atelier_db::models::project::Project;
use atelier_db::models::task::Task;

pub async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "$argon2id$fixture".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            phone_number: Some("+10000000000".to_string()),
            position: Some("tester".to_string()),
            role: atelier_core::roles::ROLE_STAFF.to_string(),
        },
    )
    .await
    .expect("user fixture")
}

pub async fn seed_project(pool: &PgPool, creator_id: DbId, price: Decimal) -> Project {
    let client = ClientRepo::create(pool, &CreateClient { title: "Acme".to_string() })
        .await
        .expect("client fixture");
    ProjectRepo::create(
        pool,
        &CreateProject {
            title: "Office refit".to_string(),
            client_id: client.id,
            location: "Main street 1".to_string(),
            status: "active".to_string(),
            price,
        },
        creator_id,
    )
    .await
    .expect("project fixture")
}

pub async fn seed_job(pool: &PgPool, price: Decimal) -> Job {
    let category = CategoryRepo::create(
        pool,
        &CreateCategory { title: "General".to_string(), parent_id: None },
    )
    .await
    .expect("category fixture");
    JobRepo::create(
        pool,
        &CreateJob {
            category_id: category.id,
            title: "Wall painting".to_string(),
            job_type: "m2".to_string(),
            price,
        },
    )
    .await
    .expect("job fixture")
}

/// Create a task priced off `job`, expiring `expires_in` from now
/// (negative durations make it already expired).
pub async fn seed_task(
    pool: &PgPool,
    job: &Job,
    creator_id: DbId,
    executor_id: Option<DbId>,
    project_id: Option<DbId>,
    quantity: i32,
    coefficient: Decimal,
    expires_in: Duration,
) -> Task {
    let input = CreateTask {
        project_id,
        job_id: job.id,
        quantity,
        coefficient: Some(coefficient),
        is_fixed_price: false,
        price: None,
        status: None,
        expired_at: expires_at(expires_in),
        executor_id,
        extra: None,
    };
    let total = pricing::task_total(job.price, quantity, coefficient);
    TaskRepo::create(pool, &input, total, creator_id)
        .await
        .expect("task fixture")
}

pub fn expires_at(offset: Duration) -> Timestamp {
    Utc::now() + offset
}
