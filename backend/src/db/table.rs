//! Ordered in-memory collections and the generic repository over them
//!
//! A [`Table`] is a plain ordered sequence scanned linearly; lookups are
//! `find`/`filter` over the rows. [`Repository`] wraps a table inside the
//! shared store and implements the CRUD operations every entity supports.

use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, Tables};

/// A record kind stored in one of the [`Tables`].
///
/// `Create` is the input for a new record (the id is assigned by the store)
/// and `Update` is a typed patch whose `None` fields leave the stored value
/// untouched.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type name used in errors and logs
    const NAME: &'static str;

    type Create;
    type Update;

    fn id(&self) -> &str;

    /// Build a record from its creation input and a freshly assigned id
    fn create(id: String, input: Self::Create) -> Self;

    /// Merge a patch over this record, field by field
    fn apply(&mut self, patch: Self::Update);

    fn table(tables: &Tables) -> &Table<Self>;

    fn table_mut(tables: &mut Tables) -> &mut Table<Self>;
}

/// An ordered collection of records
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Entity> Table<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    /// First record whose id matches
    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// All records matching the predicate, in stored order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|&row| predicate(row)).cloned().collect()
    }

    /// Remove the first record whose id matches, preserving the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Remove every record, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let count = self.rows.len();
        self.rows.clear();
        count
    }
}

/// CRUD access to one collection of the shared store
pub struct Repository<T> {
    tables: Arc<RwLock<Tables>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Repository<T> {
    pub(crate) fn new(tables: Arc<RwLock<Tables>>) -> Self {
        Self {
            tables,
            _entity: PhantomData,
        }
    }

    /// Every record, in stored order
    pub fn list(&self) -> Vec<T> {
        T::table(&self.tables.read()).rows().to_vec()
    }

    pub fn count(&self) -> usize {
        T::table(&self.tables.read()).len()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        T::table(&self.tables.read()).find(id).cloned()
    }

    /// Like [`get`](Self::get), but a miss is a [`StoreError::NotFound`]
    pub fn require(&self, id: &str) -> StoreResult<T> {
        self.get(id).ok_or_else(|| not_found::<T>(id))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        T::table(&self.tables.read()).filter(predicate)
    }

    /// Append a new record under a freshly generated id
    pub fn create(&self, input: T::Create) -> T {
        let mut tables = self.tables.write();
        let table = T::table_mut(&mut tables);

        let mut id = Uuid::new_v4().to_string();
        while table.find(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        let record = T::create(id, input);
        table.push(record.clone());
        record
    }

    /// Merge a patch over an existing record and return the result
    pub fn update(&self, id: &str, patch: T::Update) -> StoreResult<T> {
        let mut tables = self.tables.write();
        let record = T::table_mut(&mut tables)
            .find_mut(id)
            .ok_or_else(|| not_found::<T>(id))?;

        record.apply(patch);
        Ok(record.clone())
    }

    /// Remove a record and return it as it was before removal
    pub fn delete(&self, id: &str) -> StoreResult<T> {
        T::table_mut(&mut self.tables.write())
            .remove(id)
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Remove every record, returning how many were removed
    pub fn delete_all(&self) -> usize {
        T::table_mut(&mut self.tables.write()).clear()
    }
}

fn not_found<T: Entity>(id: &str) -> StoreError {
    StoreError::NotFound {
        entity: T::NAME,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::{CreateUser, Database, UpdateUser, UserRecord};

    fn create_user(db: &Database, username: &str) -> UserRecord {
        db.users().create(CreateUser {
            username: Some(username.to_string()),
            email: Some(format!("{username}@example.com")),
        })
    }

    #[test]
    fn test_create_then_get_returns_same_record() {
        let db = Database::new();
        let user = create_user(&db, "ada");

        assert_eq!(db.users().get(&user.id), Some(user));
    }

    #[test]
    fn test_consecutive_creates_have_distinct_ids() {
        let db = Database::new();
        let a = create_user(&db, "ada");
        let b = create_user(&db, "ada");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let db = Database::new();
        let names = ["ada", "grace", "linus"];
        for name in names {
            create_user(&db, name);
        }

        let listed: Vec<String> = db.users().list().into_iter().map(|u| u.username).collect();
        assert_eq!(listed, names);
    }

    #[test]
    fn test_update_missing_record_is_not_found() {
        let db = Database::new();
        let result = db.users().update("missing", UpdateUser::default());

        assert_matches!(
            result,
            Err(StoreError::NotFound { entity: "User", ref id }) if id == "missing"
        );
    }

    #[test]
    fn test_delete_removes_exactly_one_record() {
        let db = Database::new();
        let ada = create_user(&db, "ada");
        let grace = create_user(&db, "grace");
        let linus = create_user(&db, "linus");

        let removed = db.users().delete(&grace.id).unwrap();

        assert_eq!(removed, grace);
        assert_eq!(db.users().list(), vec![ada, linus]);
        assert_matches!(db.users().require(&grace.id), Err(StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_missing_record_leaves_table_untouched() {
        let db = Database::new();
        create_user(&db, "ada");

        assert!(db.users().delete("missing").is_err());
        assert_eq!(db.users().count(), 1);
    }

    #[test]
    fn test_delete_all_reports_count_and_empties_table() {
        let db = Database::new();
        for name in ["ada", "grace", "linus"] {
            create_user(&db, name);
        }

        assert_eq!(db.users().delete_all(), 3);
        assert!(db.users().list().is_empty());
        assert_eq!(db.users().delete_all(), 0);
    }

    #[test]
    fn test_filter_keeps_matching_rows_in_order() {
        let db = Database::new();
        let ada = create_user(&db, "ada");
        create_user(&db, "grace");
        let alan = create_user(&db, "alan");

        let found = db.users().filter(|u| u.username.starts_with('a'));
        assert_eq!(found, vec![ada, alan]);
    }
}
