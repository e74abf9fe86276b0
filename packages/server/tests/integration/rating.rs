use crate::harness::{TestApp, routes};
use serde_json::json;

fn dish_rating_body(participant_id: &str, dish_id: &str, day: i64) -> serde_json::Value {
    json!({
        "participantId": participant_id,
        "dishId": dish_id,
        "day": day,
        "scores": {
            "taste": 4,
            "texture": 5,
            "ingredients": 4,
            "presentation": 3,
            "bonus": 5,
        },
    })
}

fn restaurant_rating_body(participant_id: &str, rating: i64) -> serde_json::Value {
    json!({
        "participantId": participant_id,
        "restaurantId": "1",
        "rating": rating,
        "comment": "Great atmosphere",
        "day": 1,
    })
}

mod dish_ratings {
    use super::*;

    #[tokio::test]
    async fn first_submission_succeeds_and_second_conflicts() {
        let app = TestApp::spawn().await;
        let body = dish_rating_body("u1", "d1", 1);

        let first = app.post(routes::DISH_RATINGS, &body).await;
        assert_eq!(first.status, 201, "submit failed: {}", first.text);
        assert_eq!(first.body["success"], true);
        assert!(first.data()["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(first.data()["scores"]["taste"], 4);
        assert_eq!(first.data()["scores"]["bonus"], 5);
        assert!(first.data()["createdAt"].is_string());

        let second = app.post(routes::DISH_RATINGS, &body).await;
        assert_eq!(second.status, 409);
        assert_eq!(second.body["success"], false);
        assert_eq!(second.body["code"], "CONFLICT");
        assert!(second.body["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn submitted_rating_is_listed_for_the_participant_and_day() {
        let app = TestApp::spawn().await;
        app.post(routes::DISH_RATINGS, &dish_rating_body("u1", "1", 1))
            .await;
        app.post(routes::DISH_RATINGS, &dish_rating_body("u1", "2", 1))
            .await;
        app.post(routes::DISH_RATINGS, &dish_rating_body("u2", "1", 1))
            .await;

        let res = app
            .get(&routes::for_participant(routes::DISH_RATINGS, "u1", 1))
            .await;
        assert_eq!(res.status, 200);
        let ratings = res.data().as_array().unwrap();
        assert_eq!(ratings.len(), 2);
        assert!(ratings.iter().all(|r| r["participantId"] == "u1"));

        let other_day = app
            .get(&routes::for_participant(routes::DISH_RATINGS, "u1", 2))
            .await;
        assert_eq!(other_day.data().as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn missing_fields_are_a_validation_error() {
        let app = TestApp::spawn().await;
        let res = app
            .post(routes::DISH_RATINGS, &json!({"participantId": "u1"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert!(res.body["error"].as_str().unwrap().contains("dishId"));
    }

    #[tokio::test]
    async fn out_of_range_score_is_rejected_and_nothing_is_written() {
        let app = TestApp::spawn().await;
        let mut body = dish_rating_body("u1", "1", 1);
        body["scores"]["taste"] = json!(0);

        let res = app.post(routes::DISH_RATINGS, &body).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let listed = app
            .get(&routes::for_participant(routes::DISH_RATINGS, "u1", 1))
            .await;
        assert_eq!(listed.data().as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn day_outside_the_week_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .post(routes::DISH_RATINGS, &dish_rating_body("u1", "1", 8))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;
        let res = app.post_raw(routes::DISH_RATINGS, "{not json").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["success"], false);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn listing_requires_participant_and_day() {
        let app = TestApp::spawn().await;

        let res = app.get(&format!("{}?day=1", routes::DISH_RATINGS)).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app
            .get(&format!("{}?participantId=u1&day=abc", routes::DISH_RATINGS))
            .await;
        assert_eq!(res.status, 400);
    }
}

mod restaurant_ratings {
    use super::*;

    #[tokio::test]
    async fn valid_rating_is_recorded() {
        let app = TestApp::spawn().await;
        let res = app
            .post(routes::RESTAURANT_RATINGS, &restaurant_rating_body("u1", 4))
            .await;

        assert_eq!(res.status, 201, "submit failed: {}", res.text);
        assert_eq!(res.data()["rating"], 4);
        assert_eq!(res.data()["comment"], "Great atmosphere");

        let listed = app
            .get(&routes::for_participant(routes::RESTAURANT_RATINGS, "u1", 1))
            .await;
        assert_eq!(listed.status, 200);
        assert_eq!(listed.data().as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn score_outside_one_to_five_is_rejected() {
        let app = TestApp::spawn().await;
        for rating in [0, 6] {
            let res = app
                .post(
                    routes::RESTAURANT_RATINGS,
                    &restaurant_rating_body("u1", rating),
                )
                .await;
            assert_eq!(res.status, 400, "rating {rating} should be rejected");
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn second_rating_same_day_conflicts() {
        let app = TestApp::spawn().await;
        let first = app
            .post(routes::RESTAURANT_RATINGS, &restaurant_rating_body("u1", 4))
            .await;
        assert_eq!(first.status, 201);

        let second = app
            .post(routes::RESTAURANT_RATINGS, &restaurant_rating_body("u1", 5))
            .await;
        assert_eq!(second.status, 409);
        assert_eq!(second.body["code"], "CONFLICT");
    }
}
