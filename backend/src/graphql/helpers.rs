// Helpers shared across GraphQL query/mutation modules.

use async_graphql::{ErrorExtensions, Result, ResultExt};

use crate::db::{StoreError, StoreResult};

impl ErrorExtensions for StoreError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| match self {
            StoreError::NotFound { entity, id } => {
                e.set("code", "NOT_FOUND");
                e.set("entity", *entity);
                e.set("id", id.as_str());
            }
        })
    }
}

/// Convert a store result into a GraphQL result, keeping the error code
pub(crate) fn store_result<T>(result: StoreResult<T>) -> Result<T> {
    if let Err(err) = &result {
        tracing::debug!(error = %err, "Store operation missed");
    }
    result.extend()
}
