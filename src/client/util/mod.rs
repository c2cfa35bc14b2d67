pub mod api;
pub mod loaded;

pub use api::ApiClient;
pub use loaded::Loaded;
