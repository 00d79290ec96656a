//! Integration tests for task pricing, visibility, and the calendar.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use serde_json::json;
use sqlx::PgPool;

async fn seed_job(pool: &PgPool, admin_token: &str, price: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let category = common::post_json_auth(
        app,
        "/api/v1/admin/categories",
        admin_token,
        json!({"title": "General"}),
    )
    .await;
    let category = common::body_json(category).await;

    let app = common::build_test_app(pool.clone());
    let job = common::post_json_auth(
        app,
        "/api/v1/admin/jobs",
        admin_token,
        json!({
            "category_id": category["id"],
            "title": "Tiling",
            "job_type": "m2",
            "price": price,
        }),
    )
    .await;
    common::body_json(job).await["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn created_task_total_is_price_times_quantity_times_coefficient(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let job_id = seed_job(&pool, &admin_token, "100.00").await;

    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/admin/tasks",
        &admin_token,
        json!({
            "job_id": job_id,
            "quantity": 3,
            "coefficient": "1.5",
            "expired_at": (Utc::now() + Duration::days(7)).to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(common::as_decimal(&json["total"]), dec!(450.00));
    assert_eq!(json["status"], "created");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_recomputes_total_even_without_money_fields(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let job_id = seed_job(&pool, &admin_token, "100.00").await;

    let app = common::build_test_app(pool.clone());
    let created = common::post_json_auth(
        app,
        "/api/v1/admin/tasks",
        &admin_token,
        json!({
            "job_id": job_id,
            "quantity": 3,
            "coefficient": "1.5",
            "expired_at": (Utc::now() + Duration::days(7)).to_rfc3339(),
        }),
    )
    .await;
    let created = common::body_json(created).await;

    let app = common::build_test_app(pool);
    let updated = common::put_json_auth(
        app,
        &format!("/api/v1/admin/tasks/{}", created["id"]),
        &admin_token,
        json!({"quantity": 5}),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = common::body_json(updated).await;
    assert_eq!(common::as_decimal(&updated["total"]), dec!(750.00));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_is_hidden_from_everyone_but_executor_and_admin(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let (executor, executor_token) = common::seed_user(&pool, "exec@example.com", "staff").await;
    let (_, bystander_token) = common::seed_user(&pool, "other@example.com", "staff").await;
    let job_id = seed_job(&pool, &admin_token, "10.00").await;

    let app = common::build_test_app(pool.clone());
    let created = common::post_json_auth(
        app,
        "/api/v1/admin/tasks",
        &admin_token,
        json!({
            "job_id": job_id,
            "quantity": 1,
            "expired_at": (Utc::now() + Duration::days(1)).to_rfc3339(),
            "executor_id": executor.id,
        }),
    )
    .await;
    let task_id = common::body_json(created).await["id"].as_i64().unwrap();
    let uri = format!("/api/v1/tasks/{task_id}");

    let app = common::build_test_app(pool.clone());
    let as_executor = common::get_auth(app, &uri, &executor_token).await;
    assert_eq!(as_executor.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let as_admin = common::get_auth(app, &uri, &admin_token).await;
    assert_eq!(as_admin.status(), StatusCode::OK);

    // Not a 403: the task's existence is not disclosed.
    let app = common::build_test_app(pool);
    let as_bystander = common::get_auth(app, &uri, &bystander_token).await;
    assert_eq!(as_bystander.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_only_the_callers_tasks(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let (mine, my_token) = common::seed_user(&pool, "mine@example.com", "staff").await;
    let (theirs, _) = common::seed_user(&pool, "theirs@example.com", "staff").await;
    let job_id = seed_job(&pool, &admin_token, "10.00").await;

    for executor in [mine.id, theirs.id] {
        let app = common::build_test_app(pool.clone());
        common::post_json_auth(
            app,
            "/api/v1/admin/tasks",
            &admin_token,
            json!({
                "job_id": job_id,
                "quantity": 1,
                "expired_at": (Utc::now() + Duration::days(1)).to_rfc3339(),
                "executor_id": executor,
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/tasks", &my_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let tasks = common::body_json(response).await;
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["executor_id"].as_i64().unwrap(), mine.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn calendar_rolls_over_month_thirteen(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let (staff, staff_token) = common::seed_user(&pool, "staff@example.com", "staff").await;
    let job_id = seed_job(&pool, &admin_token, "10.00").await;

    // A task expiring on 2027-01-15, the month the rollover lands in.
    let app = common::build_test_app(pool.clone());
    common::post_json_auth(
        app,
        "/api/v1/admin/tasks",
        &admin_token,
        json!({
            "job_id": job_id,
            "quantity": 1,
            "expired_at": "2027-01-15T12:00:00Z",
            "executor_id": staff.id,
        }),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response =
        common::get_auth(app, "/api/v1/tasks/calendar?year=2026&month=13", &staff_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;

    assert_eq!(json["year"], 2027);
    assert_eq!(json["month"], 1);
    assert_eq!(json["month_name"], "January");
    assert_eq!(json["previous_year"], 2026);
    assert_eq!(json["previous_month"], 0);
    assert_eq!(json["next_month"], 2);

    let weeks = json["weeks"].as_array().unwrap();
    assert!(weeks.iter().all(|w| w.as_array().unwrap().len() == 7));

    assert_eq!(json["tasks_by_day"]["15"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn calendar_rejects_an_impossible_month(pool: PgPool) {
    let (_, token) = common::seed_user(&pool, "staff@example.com", "staff").await;

    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/tasks/calendar?year=2026&month=14", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn calendar_defaults_to_the_current_month(pool: PgPool) {
    let (_, token) = common::seed_user(&pool, "staff@example.com", "staff").await;

    let app = common::build_test_app(pool);
    let response = common::get_auth(app, "/api/v1/tasks/calendar", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    use chrono::Datelike;
    let json = common::body_json(response).await;
    let now = Utc::now();
    assert_eq!(json["year"], now.year());
    assert_eq!(json["month"], now.month());
}
