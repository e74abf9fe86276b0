use crate::harness::{TestApp, routes};
use serde_json::json;

fn restaurant_body(day: i64) -> serde_json::Value {
    json!({
        "name": "La Cabaña",
        "description": "Wood-fired camperos by the lake",
        "meetingTime": "2024-09-15T19:00:00Z",
        "dayNumber": day,
        "latitude": 14.6349,
        "longitude": -90.5069,
    })
}

mod access {
    use super::*;

    #[tokio::test]
    async fn missing_token_is_unauthorized() {
        let app = TestApp::spawn().await;
        let res = app.get(routes::ADMIN_USERS).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let app = TestApp::spawn().await;
        let res = app.get_with_token(routes::ADMIN_USERS, "not-a-jwt").await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn participant_is_forbidden() {
        let app = TestApp::spawn().await;
        let token = app.participant_token();

        let res = app.get_with_token(routes::ADMIN_USERS, &token).await;
        assert_eq!(res.status, 403);
        assert_eq!(res.body["code"], "PERMISSION_DENIED");

        let res = app
            .post_with_token(routes::ADMIN_RESTAURANT, &restaurant_body(2), &token)
            .await;
        assert_eq!(res.status, 403);
    }

    #[tokio::test]
    async fn unknown_account_is_forbidden() {
        let app = TestApp::spawn_empty().await;
        let res = app
            .get_with_token(routes::ADMIN_USERS, &app.admin_token())
            .await;

        assert_eq!(res.status, 403);
    }
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn one_restaurant_per_day() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();

        let res = app
            .post_with_token(routes::ADMIN_RESTAURANT, &restaurant_body(1), &token)
            .await;
        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");

        let res = app
            .post_with_token(routes::ADMIN_RESTAURANT, &restaurant_body(2), &token)
            .await;
        assert_eq!(res.status, 201, "create failed: {}", res.text);
        assert_eq!(res.body["message"], "Restaurant added successfully");
        assert_eq!(res.data()["dayNumber"], 2);
        assert_eq!(res.data()["coordinates"]["latitude"], 14.6349);
        assert_eq!(
            res.data()["imageUrl"],
            "/images/restaurant-placeholder.jpg"
        );

        let listed = app
            .get_with_token(routes::ADMIN_RESTAURANT, &token)
            .await;
        assert_eq!(listed.status, 200);
        assert_eq!(listed.body["total"], 2);
        assert_eq!(listed.data()[0]["dayNumber"], 1);
        assert_eq!(listed.data()[1]["dayNumber"], 2);
    }

    #[tokio::test]
    async fn restaurant_requires_its_fields() {
        let app = TestApp::spawn().await;
        let res = app
            .post_with_token(
                routes::ADMIN_RESTAURANT,
                &json!({"name": "Nameless"}),
                &app.admin_token(),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn dish_needs_an_existing_restaurant() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();

        let res = app
            .post_with_token(
                routes::ADMIN_DISH,
                &json!({"name": "Campero Fantasma", "restaurantId": "missing", "dayNumber": 1}),
                &token,
            )
            .await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");

        let res = app
            .post_with_token(
                routes::ADMIN_DISH,
                &json!({
                    "name": "Campero Ahumado",
                    "tags": ["Smoky", " "],
                    "restaurantId": "1",
                    "dayNumber": 1,
                }),
                &token,
            )
            .await;
        assert_eq!(res.status, 201, "create failed: {}", res.text);
        assert_eq!(res.body["message"], "Dish added successfully");
        assert_eq!(res.data()["tags"], json!(["Smoky"]));
        assert_eq!(res.data()["imageUrl"], "/images/dish-placeholder.jpg");

        let today = app.get(routes::TODAY_DISHES).await;
        assert_eq!(today.data().as_array().unwrap().len(), 6);

        let listed = app.get_with_token(routes::ADMIN_DISH, &token).await;
        assert_eq!(listed.body["total"], 6);
    }
}

mod ratings_feed {
    use super::*;

    #[tokio::test]
    async fn feed_resolves_names_and_filters() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();

        let res = app
            .post(
                routes::DISH_RATINGS,
                &json!({
                    "participantId": "3",
                    "dishId": "1",
                    "day": 1,
                    "scores": {"taste": 4, "texture": 5, "ingredients": 4, "presentation": 3, "bonus": 5},
                    "comment": "  Crispy  ",
                }),
            )
            .await;
        assert_eq!(res.status, 201);
        let res = app
            .post(
                routes::RESTAURANT_RATINGS,
                &json!({"participantId": "4", "restaurantId": "1", "rating": 4, "day": 1}),
            )
            .await;
        assert_eq!(res.status, 201);

        let all = app.get_with_token(routes::ADMIN_RATINGS, &token).await;
        assert_eq!(all.status, 200, "feed failed: {}", all.text);
        assert_eq!(all.body["total"], 2);

        let dishes = app
            .get_with_token(&format!("{}?type=dish", routes::ADMIN_RATINGS), &token)
            .await;
        let entries = dishes.data().as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["type"], "dish");
        assert_eq!(entries[0]["participantName"], "maria");
        assert_eq!(entries[0]["itemName"], "Campero Clásico");
        assert_eq!(entries[0]["score"], "T:4, Tx:5, I:4, P:3, B:5");
        assert_eq!(entries[0]["average"], 4.2);
        assert_eq!(entries[0]["comment"], "Crispy");

        let restaurants = app
            .get_with_token(
                &format!("{}?type=restaurant", routes::ADMIN_RATINGS),
                &token,
            )
            .await;
        let entries = restaurants.data().as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["participantName"], "carlos");
        assert_eq!(entries[0]["itemName"], "El Campero Dorado");
        assert_eq!(entries[0]["score"], "4/5 stars");
        assert_eq!(entries[0]["average"], 4.0);

        let other_day = app
            .get_with_token(&format!("{}?day=2", routes::ADMIN_RATINGS), &token)
            .await;
        assert_eq!(other_day.body["total"], 0);
    }

    #[tokio::test]
    async fn invalid_day_filter_is_rejected() {
        let app = TestApp::spawn().await;
        let res = app
            .get_with_token(
                &format!("{}?day=9", routes::ADMIN_RATINGS),
                &app.admin_token(),
            )
            .await;

        assert_eq!(res.status, 400);
    }
}

mod users {
    use super::*;

    #[tokio::test]
    async fn lists_seeded_users() {
        let app = TestApp::spawn().await;
        let res = app
            .get_with_token(routes::ADMIN_USERS, &app.admin_token())
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"], 4);
        let names: Vec<&str> = res
            .data()
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["username"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["admin", "carlos", "maria", "testuser"]);
    }

    #[tokio::test]
    async fn promoting_a_participant_grants_admin_access() {
        let app = TestApp::spawn().await;
        let maria = app.participant_token();

        let res = app.get_with_token(routes::ADMIN_USERS, &maria).await;
        assert_eq!(res.status, 403);

        let res = app
            .patch_with_token(
                routes::ADMIN_USER_ROLE,
                &json!({"userId": "3", "isAdmin": true}),
                &app.admin_token(),
            )
            .await;
        assert_eq!(res.status, 200, "role update failed: {}", res.text);
        assert_eq!(res.data()["isAdmin"], true);
        assert_eq!(res.body["message"], "User promoted to admin successfully");

        let res = app.get_with_token(routes::ADMIN_USERS, &maria).await;
        assert_eq!(res.status, 200);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let app = TestApp::spawn().await;
        let res = app
            .patch_with_token(
                routes::ADMIN_USER_ROLE,
                &json!({"userId": "999", "isAdmin": false}),
                &app.admin_token(),
            )
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}

mod event_state {
    use super::*;

    #[tokio::test]
    async fn reads_the_current_state() {
        let app = TestApp::spawn().await;
        let res = app
            .get_with_token(routes::ADMIN_EVENT_STATE, &app.admin_token())
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.data()["currentDay"], 1);
    }

    #[tokio::test]
    async fn rejects_inverted_window() {
        let app = TestApp::spawn().await;
        let res = app
            .post_with_token(
                routes::ADMIN_EVENT_STATE,
                &json!({
                    "currentDay": 3,
                    "startDate": "2024-09-20T00:00:00Z",
                    "endDate": "2024-09-14T00:00:00Z",
                }),
                &app.admin_token(),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn update_is_visible_on_read() {
        let app = TestApp::spawn().await;
        let token = app.admin_token();
        let res = app
            .post_with_token(
                routes::ADMIN_EVENT_STATE,
                &json!({
                    "currentDay": 4,
                    "startDate": "2024-09-14T00:00:00Z",
                    "endDate": "2024-09-20T23:59:59Z",
                }),
                &token,
            )
            .await;
        assert_eq!(res.status, 200, "update failed: {}", res.text);
        assert_eq!(res.body["message"], "Event state updated successfully");

        let res = app.get_with_token(routes::ADMIN_EVENT_STATE, &token).await;
        assert_eq!(res.data()["currentDay"], 4);
    }
}
