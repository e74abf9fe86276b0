use crate::harness::{TestApp, routes};
use serde_json::json;

fn dish_rating(participant_id: &str, dish_id: &str) -> serde_json::Value {
    json!({
        "participantId": participant_id,
        "dishId": dish_id,
        "day": 1,
        "scores": {"taste": 3, "texture": 3, "ingredients": 3, "presentation": 3},
    })
}

#[tokio::test]
async fn nothing_rated_is_zero_percent() {
    let app = TestApp::spawn().await;
    let res = app
        .get(&routes::for_participant(routes::PROGRESS, "u1", 1))
        .await;

    assert_eq!(res.status, 200, "progress failed: {}", res.text);
    let data = res.data();
    assert_eq!(data["day"], 1);
    assert_eq!(data["dishes"]["rated"], 0);
    assert_eq!(data["dishes"]["total"], 5);
    assert_eq!(data["restaurant"]["rated"], false);
    assert_eq!(data["overall"]["percentage"], 0);
    assert_eq!(data["overall"]["completed"], false);
}

#[tokio::test]
async fn all_dishes_and_restaurant_rated_is_complete() {
    let app = TestApp::spawn().await;
    for dish_id in ["1", "2", "3", "4", "5"] {
        let res = app.post(routes::DISH_RATINGS, &dish_rating("u1", dish_id)).await;
        assert_eq!(res.status, 201, "rating failed: {}", res.text);
    }
    let res = app
        .post(
            routes::RESTAURANT_RATINGS,
            &json!({"participantId": "u1", "restaurantId": "1", "rating": 5, "day": 1}),
        )
        .await;
    assert_eq!(res.status, 201);

    let res = app
        .get(&routes::for_participant(routes::PROGRESS, "u1", 1))
        .await;
    let data = res.data();
    assert_eq!(data["dishes"]["rated"], 5);
    assert_eq!(data["dishes"]["percentage"], 100);
    assert_eq!(data["restaurant"]["rated"], true);
    assert_eq!(data["overall"]["percentage"], 100);
    assert_eq!(data["overall"]["completed"], true);
}

#[tokio::test]
async fn partial_progress_rounds_to_an_integer() {
    let app = TestApp::spawn().await;
    for dish_id in ["1", "2"] {
        app.post(routes::DISH_RATINGS, &dish_rating("u1", dish_id)).await;
    }
    // Dish "d9" is not on the day's menu and does not count.
    app.post(routes::DISH_RATINGS, &dish_rating("u1", "d9")).await;

    let res = app
        .get(&routes::for_participant(routes::PROGRESS, "u1", 1))
        .await;
    let data = res.data();
    assert_eq!(data["dishes"]["rated"], 2);
    assert_eq!(data["dishes"]["percentage"], 40);
    assert_eq!(data["overall"]["percentage"], 33);
}

#[tokio::test]
async fn missing_parameters_are_rejected() {
    let app = TestApp::spawn().await;
    let res = app.get(&format!("{}?participantId=u1", routes::PROGRESS)).await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn rating_another_restaurant_does_not_count() {
    let app = TestApp::spawn().await;
    for dish_id in ["1", "2", "3", "4", "5"] {
        app.post(routes::DISH_RATINGS, &dish_rating("u1", dish_id)).await;
    }
    let res = app
        .post(
            routes::RESTAURANT_RATINGS,
            &json!({"participantId": "u1", "restaurantId": "no-such-restaurant", "rating": 5, "day": 1}),
        )
        .await;
    assert_eq!(res.status, 201);

    let res = app
        .get(&routes::for_participant(routes::PROGRESS, "u1", 1))
        .await;
    let data = res.data();
    assert_eq!(data["dishes"]["rated"], 5);
    assert_eq!(data["restaurant"]["rated"], false);
    assert_eq!(data["overall"]["percentage"], 83);
    assert_eq!(data["overall"]["completed"], false);
}
