//! CRUD round-trips and aggregate queries for the flat entities.

mod common;

use chrono::{Duration, NaiveDate};
use rust_decimal_macros::dec;
use sqlx::PgPool;

use atelier_core::{category, pricing};
use atelier_db::models::category::CreateCategory;
use atelier_db::models::client::{CreateClient, UpdateClient};
use atelier_db::models::item::{CreateItem, UpdateItem};
use atelier_db::models::status::VacationStatus;
use atelier_db::models::vacation::CreateVacation;
use atelier_db::repositories::{CategoryRepo, ClientRepo, ItemRepo, ProjectRepo, VacationRepo};

#[sqlx::test(migrations = "./migrations")]
async fn client_crud_roundtrip(pool: PgPool) {
    let created = ClientRepo::create(&pool, &CreateClient { title: "Northwind".to_string() })
        .await
        .expect("create");

    let fetched = ClientRepo::find_by_id(&pool, created.id).await.expect("find").expect("row");
    assert_eq!(fetched.title, "Northwind");

    let updated = ClientRepo::update(
        &pool,
        created.id,
        &UpdateClient { title: Some("Northwind Ltd".to_string()) },
    )
    .await
    .expect("update")
    .expect("row");
    assert_eq!(updated.title, "Northwind Ltd");

    let found = ClientRepo::list(&pool, Some("north")).await.expect("search");
    assert_eq!(found.len(), 1);
    let missed = ClientRepo::list(&pool, Some("south")).await.expect("search");
    assert!(missed.is_empty());

    assert!(ClientRepo::delete(&pool, created.id).await.expect("delete"));
    assert!(ClientRepo::find_by_id(&pool, created.id).await.expect("find").is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn category_rows_assemble_into_title_ordered_tree(pool: PgPool) {
    let root = CategoryRepo::create(
        &pool,
        &CreateCategory { title: "Finishing".to_string(), parent_id: None },
    )
    .await
    .expect("root");
    for title in ["Plaster", "Paint", "Wallpaper"] {
        CategoryRepo::create(
            &pool,
            &CreateCategory { title: title.to_string(), parent_id: Some(root.id) },
        )
        .await
        .expect("child");
    }

    let rows = CategoryRepo::list(&pool).await.expect("list");
    let rows: Vec<category::CategoryRow> = rows
        .into_iter()
        .map(|c| category::CategoryRow { id: c.id, title: c.title, parent_id: c.parent_id })
        .collect();
    let tree = category::build_tree(&rows);

    assert_eq!(tree.len(), 1);
    let children: Vec<_> = tree[0].children.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(children, vec!["Paint", "Plaster", "Wallpaper"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn item_total_recomputes_on_save(pool: PgPool) {
    let user = common::seed_user(&pool, "estimator@example.com").await;
    let project = common::seed_project(&pool, user.id, dec!(1000)).await;

    let input = CreateItem {
        project_id: Some(project.id),
        title: "Scaffolding rental".to_string(),
        quantity: Some(4),
        price: dec!(12.25),
        note: None,
    };
    let total = pricing::item_total(4, input.price);
    let item = ItemRepo::create(&pool, &input, total, user.id).await.expect("create");
    assert_eq!(item.total, Some(dec!(49.00)));

    let update = UpdateItem { quantity: Some(10), ..Default::default() };
    let total = pricing::item_total(10, item.price);
    let item = ItemRepo::update(&pool, item.id, &update, total)
        .await
        .expect("update")
        .expect("row");
    assert_eq!(item.total, Some(dec!(122.50)));
}

#[sqlx::test(migrations = "./migrations")]
async fn project_totals_sum_items_and_tasks(pool: PgPool) {
    let user = common::seed_user(&pool, "pm@example.com").await;
    let project = common::seed_project(&pool, user.id, dec!(1000)).await;
    let job = common::seed_job(&pool, dec!(100)).await;

    // Empty project: both aggregates are zero.
    let empty = ProjectRepo::totals(&pool, project.id).await.expect("totals");
    assert_eq!(empty.items_total, dec!(0));
    assert_eq!(empty.tasks_total, dec!(0));

    common::seed_task(
        &pool,
        &job,
        user.id,
        None,
        Some(project.id),
        3,
        dec!(1.5),
        Duration::days(7),
    )
    .await;
    let input = CreateItem {
        project_id: Some(project.id),
        title: "Paint".to_string(),
        quantity: Some(4),
        price: dec!(12.25),
        note: None,
    };
    ItemRepo::create(&pool, &input, pricing::item_total(4, input.price), user.id)
        .await
        .expect("item");

    let totals = ProjectRepo::totals(&pool, project.id).await.expect("totals");
    assert_eq!(totals.items_total, dec!(49.00));
    assert_eq!(totals.tasks_total, dec!(450.00));

    let grand = pricing::project_total(
        project.price,
        Some(totals.items_total),
        Some(totals.tasks_total),
    );
    assert_eq!(grand, dec!(1499.00));
}

#[sqlx::test(migrations = "./migrations")]
async fn vacation_listings_order_and_filter(pool: PgPool) {
    let user = common::seed_user(&pool, "vacationer@example.com").await;

    let mk = |start: &str, end: &str, status: VacationStatus| CreateVacation {
        user_id: user.id,
        start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
        end_date: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
        status,
    };

    VacationRepo::create(&pool, &mk("2024-02-01", "2024-02-14", VacationStatus::Completed))
        .await
        .expect("completed");
    VacationRepo::create(&pool, &mk("2027-06-01", "2027-06-14", VacationStatus::Planned))
        .await
        .expect("planned late");
    let next = VacationRepo::create(&pool, &mk("2026-12-01", "2026-12-14", VacationStatus::Planned))
        .await
        .expect("planned early");

    // Admin list: newest start first.
    let all = VacationRepo::list(&pool, Some(user.id)).await.expect("list");
    let starts: Vec<_> = all.iter().map(|v| v.start_date.to_string()).collect();
    assert_eq!(starts, vec!["2027-06-01", "2026-12-01", "2024-02-01"]);

    // The staff view picks the earliest planned vacation as "next".
    let planned = VacationRepo::next_planned_for_user(&pool, user.id)
        .await
        .expect("next")
        .expect("row");
    assert_eq!(planned.id, next.id);

    let completed = VacationRepo::list_for_user_by_status(&pool, user.id, VacationStatus::Completed)
        .await
        .expect("completed list");
    assert_eq!(completed.len(), 1);

    let current = VacationRepo::current_for_user(&pool, user.id).await.expect("current");
    assert!(current.is_some());
}
