pub mod admin;
pub mod auth;
pub mod categories;
pub mod category;
pub mod checkout;
pub mod home;
pub mod not_found;
pub mod product_detail;
pub mod profile;

pub use auth::Auth;
pub use categories::Categories;
pub use category::Category;
pub use checkout::Checkout;
pub use home::Home;
pub use not_found::NotFound;
pub use product_detail::ProductDetail;
pub use profile::Profile;
