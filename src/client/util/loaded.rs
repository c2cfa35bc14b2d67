use dioxus_logger::tracing::error;

use crate::client::error::ClientError;

/// A fetched value together with its loading flag, the shape listing components consume
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub is_loading: bool,
}

impl<T: Clone + Default> Loaded<T> {
    /// Reads the state of a resource
    ///
    /// A pending resource is loading with a default value. A failed fetch is logged and
    /// reported as loaded with a default value, so callers never stay in a loading state.
    pub fn from_resource(state: &Option<Result<T, ClientError>>, what: &str) -> Self {
        match state {
            None => Self {
                value: T::default(),
                is_loading: true,
            },
            Some(Ok(value)) => Self {
                value: value.clone(),
                is_loading: false,
            },
            Some(Err(err)) => {
                error!("Failed to load {}: {}", what, err);

                Self {
                    value: T::default(),
                    is_loading: false,
                }
            }
        }
    }
}
