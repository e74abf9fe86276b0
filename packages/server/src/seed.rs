use anyhow::Context;
use chrono::{DateTime, Utc};
use common::EventDay;
use common::catalog::{Coordinates, Dish, Restaurant};
use common::event::EventState;
use common::storage::{RecordStore, StorageError};
use common::user::User;
use tracing::info;

use crate::state::Stores;

/// Demo accounts: (id, username, email, is_admin).
const DEMO_USERS: &[(&str, &str, &str, bool)] = &[
    ("1", "testuser", "testuser@example.com", true),
    ("2", "admin", "admin@campero.com", true),
    ("3", "maria", "maria@example.com", false),
    ("4", "carlos", "carlos@example.com", false),
];

/// Day-one dishes: (id, name, tags, image).
const DEMO_DISHES: &[(&str, &str, &[&str], &str)] = &[
    ("1", "Campero Clásico", &["Traditional", "Popular"], "/images/campero-clasico.jpg"),
    ("2", "Campero Especial", &["Premium", "Chef Special"], "/images/campero-especial.jpg"),
    ("3", "Campero Supremo", &["Deluxe", "Extra Large"], "/images/campero-supremo.jpg"),
    ("4", "Campero Vegetariano", &["Vegetarian", "Healthy"], "/images/campero-vegetariano.jpg"),
    ("5", "Campero Picante", &["Spicy", "Hot Sauce"], "/images/campero-picante.jpg"),
];

fn utc(rfc3339: &str) -> anyhow::Result<DateTime<Utc>> {
    let time = DateTime::parse_from_rfc3339(rfc3339)
        .with_context(|| format!("Invalid demo timestamp '{rfc3339}'"))?;
    Ok(time.with_timezone(&Utc))
}

/// Event window of the demo deployment, on day one.
pub fn demo_event_state() -> anyhow::Result<EventState> {
    Ok(EventState::new(
        EventDay::FIRST,
        utc("2024-09-14T00:00:00Z")?,
        utc("2024-09-20T23:59:59Z")?,
    ))
}

/// Insert a record unless one with the same key exists. Returns whether it was inserted.
async fn insert_missing<T>(store: &dyn RecordStore<T>, record: T) -> Result<bool, StorageError>
where
    T: common::storage::Keyed + Clone + Send + Sync + 'static,
{
    match store.insert(record).await {
        Ok(_) => Ok(true),
        Err(StorageError::Duplicate(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Load the demo users, day-one restaurant and dishes.
pub async fn seed_demo_data(stores: &Stores) -> anyhow::Result<()> {
    let mut users_inserted = 0u32;
    for &(id, username, email, is_admin) in DEMO_USERS {
        let user = User {
            id: id.into(),
            username: username.into(),
            email: email.into(),
            is_admin,
        };
        if insert_missing(stores.users.as_ref(), user).await? {
            users_inserted += 1;
        }
    }

    let now = Utc::now();
    let restaurant = Restaurant {
        id: "1".into(),
        name: "El Campero Dorado".into(),
        description: "A traditional Venezuelan restaurant known for their authentic camperos \
                      with fresh ingredients and bold flavors."
            .into(),
        image_url: "/images/restaurant-placeholder.jpg".into(),
        meeting_time: utc("2024-09-14T12:30:00Z")?,
        day_number: EventDay::FIRST,
        coordinates: Some(Coordinates {
            latitude: 10.4806,
            longitude: -66.9036,
        }),
        created_at: now,
    };
    let restaurant_inserted = insert_missing(stores.restaurants.as_ref(), restaurant).await?;

    let mut dishes_inserted = 0u32;
    for &(id, name, tags, image) in DEMO_DISHES {
        let dish = Dish {
            id: id.into(),
            name: name.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image_url: image.into(),
            restaurant_id: "1".into(),
            day_number: EventDay::FIRST,
            created_at: now,
        };
        if insert_missing(stores.dishes.as_ref(), dish).await? {
            dishes_inserted += 1;
        }
    }

    info!(
        users = users_inserted,
        restaurant = restaurant_inserted,
        dishes = dishes_inserted,
        "Seeded demo data"
    );
    Ok(())
}
