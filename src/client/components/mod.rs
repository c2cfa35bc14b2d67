pub mod admin;
pub mod guard;
pub mod loading;
pub mod navbar;
pub mod page;
pub mod product_card;
pub mod product_grid;
pub mod title;

pub use guard::Protected;
pub use loading::LoadingIndicator;
pub use navbar::Navbar;
pub use page::Page;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use title::StoreTitleButton;
