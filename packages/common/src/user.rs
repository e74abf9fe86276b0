use serde::{Deserialize, Serialize};

use crate::storage::Keyed;

/// A registered account. Accounts are created by the identity provider;
/// this service only reads them and toggles the administrator flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(example = "3")]
    pub id: String,
    #[schema(example = "maria")]
    pub username: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
    pub is_admin: bool,
}

impl Keyed for User {
    type Key = String;

    fn key(&self) -> Self::Key {
        self.id.clone()
    }
}
