pub mod dashboard;
pub mod products;

pub use dashboard::AdminDashboard;
pub use products::AdminProducts;
