pub mod layout;
pub mod navbar;
pub mod quick_nav;

pub use layout::AdminLayout;
pub use navbar::AdminNavbar;
pub use quick_nav::AdminQuickNav;
