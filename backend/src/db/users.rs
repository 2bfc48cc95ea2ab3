//! User records

use serde::{Deserialize, Serialize};

use super::Tables;
use super::table::{Entity, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Entity for UserRecord {
    const NAME: &'static str = "User";

    type Create = CreateUser;
    type Update = UpdateUser;

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: CreateUser) -> Self {
        Self {
            id,
            username: input.username.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: UpdateUser) {
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.users
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.users
    }
}
