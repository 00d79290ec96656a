//! Integration tests for the report inbox: sending, pagination, the
//! forgiving detail lookup, and the admin answer flow.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn send_creates_an_unanswered_report(pool: PgPool) {
    let (_, token) = common::seed_user(&pool, "sender@example.com", "staff").await;

    let app = common::build_test_app(pool);
    let response = common::post_json_auth(
        app,
        "/api/v1/reports/send",
        &token,
        json!({"theme": "Broken printer", "content": "Third floor, again."}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = common::body_json(response).await;
    assert_eq!(json["theme"], "Broken printer");
    assert_eq!(json["is_answered"], false);
    assert!(json["answer"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn send_requires_theme_and_content(pool: PgPool) {
    let (_, token) = common::seed_user(&pool, "sender@example.com", "staff").await;

    for body in [
        json!({"theme": "", "content": "some content"}),
        json!({"theme": "some theme", "content": ""}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = common::post_json_auth(app, "/api/v1/reports/send", &token, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = common::body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inbox_pages_by_twenty_five(pool: PgPool) {
    let (_, token) = common::seed_user(&pool, "sender@example.com", "staff").await;

    for i in 1..=30 {
        let app = common::build_test_app(pool.clone());
        common::post_json_auth(
            app,
            "/api/v1/reports/send",
            &token,
            json!({"theme": format!("Theme {i}"), "content": "body"}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let first = common::body_json(common::get_auth(app, "/api/v1/reports", &token).await).await;
    assert_eq!(first["reports"].as_array().unwrap().len(), 25);
    assert_eq!(first["page"], 1);
    assert_eq!(first["total_pages"], 2);
    assert_eq!(first["total_count"], 30);
    // Latest activity first, and singled out as last_report.
    assert_eq!(first["last_report"]["theme"], "Theme 30");

    let app = common::build_test_app(pool);
    let second =
        common::body_json(common::get_auth(app, "/api/v1/reports?page=2", &token).await).await;
    assert_eq!(second["reports"].as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_treats_a_malformed_id_as_not_found(pool: PgPool) {
    let (_, token) = common::seed_user(&pool, "sender@example.com", "staff").await;

    for uri in [
        "/api/v1/reports/detail?id=abc",
        "/api/v1/reports/detail",
        "/api/v1/reports/detail?id=999999",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = common::get_auth(app, uri, &token).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn detail_hides_other_peoples_reports(pool: PgPool) {
    let (_, sender_token) = common::seed_user(&pool, "sender@example.com", "staff").await;
    let (_, snoop_token) = common::seed_user(&pool, "snoop@example.com", "staff").await;

    let app = common::build_test_app(pool.clone());
    let created = common::body_json(
        common::post_json_auth(
            app,
            "/api/v1/reports/send",
            &sender_token,
            json!({"theme": "Private", "content": "body"}),
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/reports/detail?id={}", created["id"]);

    let app = common::build_test_app(pool.clone());
    let own = common::get_auth(app, &uri, &sender_token).await;
    assert_eq!(own.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let foreign = common::get_auth(app, &uri, &snoop_token).await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answering_flips_the_flag_both_ways(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let (_, staff_token) = common::seed_user(&pool, "sender@example.com", "staff").await;

    let app = common::build_test_app(pool.clone());
    let created = common::body_json(
        common::post_json_auth(
            app,
            "/api/v1/reports/send",
            &staff_token,
            json!({"theme": "Vacation request", "content": "May I?"}),
        )
        .await,
    )
    .await;
    let uri = format!("/api/v1/admin/reports/{}/answer", created["id"]);

    let app = common::build_test_app(pool.clone());
    let answered = common::body_json(
        common::put_json_auth(app, &uri, &admin_token, json!({"answer": "Yes, approved."})).await,
    )
    .await;
    assert_eq!(answered["is_answered"], true);

    let app = common::build_test_app(pool.clone());
    let cleared =
        common::body_json(common::put_json_auth(app, &uri, &admin_token, json!({"answer": null})).await)
            .await;
    assert_eq!(cleared["is_answered"], false);

    let app = common::build_test_app(pool);
    let blanked =
        common::body_json(common::put_json_auth(app, &uri, &admin_token, json!({"answer": ""})).await)
            .await;
    assert_eq!(blanked["is_answered"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_inbox_filters_on_answered(pool: PgPool) {
    let (_, admin_token) = common::seed_user(&pool, "admin@example.com", "admin").await;
    let (_, staff_token) = common::seed_user(&pool, "sender@example.com", "staff").await;

    for theme in ["First", "Second"] {
        let app = common::build_test_app(pool.clone());
        common::post_json_auth(
            app,
            "/api/v1/reports/send",
            &staff_token,
            json!({"theme": theme, "content": "body"}),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let all = common::body_json(
        common::get_auth(app, "/api/v1/admin/reports", &admin_token).await,
    )
    .await;
    let first_id = all.as_array().unwrap()[1]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    common::put_json_auth(
        app,
        &format!("/api/v1/admin/reports/{first_id}/answer"),
        &admin_token,
        json!({"answer": "done"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let open = common::body_json(
        common::get_auth(app, "/api/v1/admin/reports?is_answered=false", &admin_token).await,
    )
    .await;
    assert_eq!(open.as_array().unwrap().len(), 1);
}
