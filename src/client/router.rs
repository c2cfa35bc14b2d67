use dioxus::prelude::*;

use crate::client::{
    components::{admin::AdminLayout, Navbar, Protected},
    routes::{
        admin::{AdminDashboard, AdminProducts},
        Auth, Categories, Category, Checkout, Home, NotFound, ProductDetail, Profile,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/categories")]
    Categories {},

    #[route("/category/:name")]
    Category { name: String },

    #[route("/product/:id")]
    ProductDetail { id: i64 },

    #[route("/auth")]
    Auth {},

        #[layout(Protected)]

        #[route("/checkout")]
        Checkout {},

        #[route("/profile")]
        Profile {},

        #[nest("/admin")]

            #[layout(AdminLayout)]

            #[route("/")]
            AdminDashboard {},

            #[route("/products")]
            AdminProducts {},

            #[end_layout]

        #[end_nest]

        #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Whether the route sits behind the authentication guard
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Checkout {}
                | Route::Profile {}
                | Route::AdminDashboard {}
                | Route::AdminProducts {}
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::client::router::Route;

    /// Expect static and parameterized paths to parse to their routes
    #[test]
    fn test_paths_parse_to_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert_eq!(
            "/product/42".parse::<Route>().unwrap(),
            Route::ProductDetail { id: 42 }
        );
        assert_eq!(
            "/category/shoes".parse::<Route>().unwrap(),
            Route::Category {
                name: "shoes".to_string()
            }
        );
        assert_eq!(
            "/admin/products".parse::<Route>().unwrap(),
            Route::AdminProducts {}
        );
    }

    /// Expect unknown paths to fall through to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/no/such/page".parse::<Route>().unwrap();

        assert!(matches!(route, Route::NotFound { .. }));
        assert!(!route.is_protected());
    }

    /// Expect only checkout, profile, and admin routes to be protected
    #[test]
    fn test_is_protected() {
        assert!(Route::Checkout {}.is_protected());
        assert!(Route::Profile {}.is_protected());
        assert!(Route::AdminDashboard {}.is_protected());
        assert!(Route::AdminProducts {}.is_protected());

        assert!(!Route::Home {}.is_protected());
        assert!(!Route::Auth {}.is_protected());
        assert!(!Route::Categories {}.is_protected());
        assert!(!Route::ProductDetail { id: 1 }.is_protected());
    }

    /// Expect the auth route to render as the literal redirect target
    #[test]
    fn test_auth_route_path() {
        assert_eq!(Route::Auth {}.to_string(), "/auth");
    }
}
