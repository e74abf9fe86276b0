use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/rating", rating_routes())
        .nest("/today", today_routes())
        .routes(routes!(handlers::progress::get_progress))
        .nest("/admin", admin_routes())
}

fn rating_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::rating::submit_dish_rating,
            handlers::rating::list_dish_ratings
        ))
        .routes(routes!(
            handlers::rating::submit_restaurant_rating,
            handlers::rating::list_restaurant_ratings
        ))
}

fn today_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::today::today_dishes))
        .routes(routes!(handlers::today::today_restaurant))
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::admin::create_restaurant,
            handlers::admin::list_restaurants
        ))
        .routes(routes!(
            handlers::admin::create_dish,
            handlers::admin::list_dishes
        ))
        .routes(routes!(handlers::admin::list_ratings))
        .routes(routes!(handlers::admin::list_users))
        .routes(routes!(handlers::admin::update_user_role))
        .routes(routes!(
            handlers::admin::get_event_state,
            handlers::admin::update_event_state
        ))
}
