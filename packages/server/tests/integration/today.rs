use crate::harness::{TestApp, routes};
use serde_json::json;

#[tokio::test]
async fn today_lists_the_seeded_day_one_dishes() {
    let app = TestApp::spawn().await;
    let res = app.get(routes::TODAY_DISHES).await;

    assert_eq!(res.status, 200);
    let dishes = res.data().as_array().unwrap();
    assert_eq!(dishes.len(), 5);
    assert!(dishes.iter().all(|d| d["dayNumber"] == 1));
}

#[tokio::test]
async fn today_restaurant_is_the_day_one_restaurant() {
    let app = TestApp::spawn().await;
    let res = app.get(routes::TODAY_RESTAURANT).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.data()["name"], "El Campero Dorado");
    assert_eq!(res.data()["dayNumber"], 1);
}

#[tokio::test]
async fn advancing_the_day_changes_featured_content() {
    let app = TestApp::spawn().await;
    let token = app.admin_token();

    let res = app
        .post_with_token(
            routes::ADMIN_EVENT_STATE,
            &json!({
                "currentDay": 2,
                "startDate": "2024-09-14T00:00:00Z",
                "endDate": "2024-09-20T23:59:59Z",
            }),
            &token,
        )
        .await;
    assert_eq!(res.status, 200, "event update failed: {}", res.text);

    let dishes = app.get(routes::TODAY_DISHES).await;
    assert_eq!(dishes.status, 200);
    assert_eq!(dishes.data().as_array().unwrap().len(), 0);

    let restaurant = app.get(routes::TODAY_RESTAURANT).await;
    assert_eq!(restaurant.status, 404);
    assert_eq!(restaurant.body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn empty_catalog_has_no_restaurant_and_no_dishes() {
    let app = TestApp::spawn_empty().await;

    let dishes = app.get(routes::TODAY_DISHES).await;
    assert_eq!(dishes.status, 200);
    assert_eq!(dishes.data().as_array().unwrap().len(), 0);

    let restaurant = app.get(routes::TODAY_RESTAURANT).await;
    assert_eq!(restaurant.status, 404);
    assert_eq!(restaurant.body["success"], false);
}
