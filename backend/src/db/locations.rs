//! Location records

use serde::{Deserialize, Serialize};

use super::Tables;
use super::table::{Entity, Table};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CreateLocation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateLocation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Entity for LocationRecord {
    const NAME: &'static str = "Location";

    type Create = CreateLocation;
    type Update = UpdateLocation;

    fn id(&self) -> &str {
        &self.id
    }

    fn create(id: String, input: CreateLocation) -> Self {
        Self {
            id,
            name: input.name.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            lat: input.lat.unwrap_or_default(),
            lng: input.lng.unwrap_or_default(),
        }
    }

    fn apply(&mut self, patch: UpdateLocation) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lng) = patch.lng {
            self.lng = lng;
        }
    }

    fn table(tables: &Tables) -> &Table<Self> {
        &tables.locations
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.locations
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::Database;

    #[test]
    fn test_add_get_delete_location() {
        let db = Database::new();
        let park = db.locations().create(CreateLocation {
            name: Some("Park".to_string()),
            ..Default::default()
        });

        assert_eq!(park.name, "Park");
        assert_eq!(park.lat, 0.0);
        assert_eq!(db.locations().get(&park.id), Some(park.clone()));

        assert_eq!(db.locations().delete(&park.id), Ok(park.clone()));
        assert_eq!(db.locations().get(&park.id), None);
    }

    #[test]
    fn test_update_coordinates_only() {
        let db = Database::new();
        let park = db.locations().create(CreateLocation {
            name: Some("Park".to_string()),
            description: Some("Green".to_string()),
            lat: Some(1.5),
            lng: Some(2.5),
        });

        let moved = db
            .locations()
            .update(
                &park.id,
                UpdateLocation {
                    lat: Some(-33.86),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(moved.lat, -33.86);
        assert_eq!(moved.lng, 2.5);
        assert_eq!(moved.name, "Park");
        assert_eq!(moved.description, "Green");
    }
}
