use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct QuickNavLink {
    pub label: &'static str,
    pub route: Route,
}

/// Shortcuts shown in the admin quick navigation bar, in display order
pub fn quick_nav_links() -> Vec<QuickNavLink> {
    vec![
        QuickNavLink {
            label: "Dashboard",
            route: Route::AdminDashboard {},
        },
        QuickNavLink {
            label: "Manage products",
            route: Route::AdminProducts {},
        },
        QuickNavLink {
            label: "Storefront",
            route: Route::Home {},
        },
        QuickNavLink {
            label: "Categories",
            route: Route::Categories {},
        },
    ]
}

#[component]
pub fn AdminQuickNav() -> Element {
    let current = use_route::<Route>();
    let links: Vec<(QuickNavLink, &str)> = quick_nav_links()
        .into_iter()
        .map(|link| {
            let class = if link.route == current {
                "btn btn-xs btn-primary"
            } else {
                "btn btn-xs btn-ghost"
            };
            (link, class)
        })
        .collect();

    rsx!(
        nav { class: "flex flex-wrap gap-2 px-4 py-2 bg-base-200",
            for (link, class) in links {
                Link {
                    key: "{link.route}",
                    to: link.route.clone(),
                    class: "{class}",
                    "{link.label}"
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use crate::client::components::admin::quick_nav::quick_nav_links;

    /// Expect every quick link to point at a distinct route
    #[test]
    fn test_quick_nav_links_are_distinct() {
        let links = quick_nav_links();
        let mut paths: Vec<String> = links.iter().map(|l| l.route.to_string()).collect();
        paths.sort();
        paths.dedup();

        assert_eq!(paths.len(), links.len());
    }

    /// Expect the admin pages to be reachable from the quick links
    #[test]
    fn test_quick_nav_links_cover_admin_pages() {
        let links = quick_nav_links();

        assert!(links.iter().any(|l| l.route.to_string() == "/admin/products"));
        assert!(links.iter().any(|l| l.route.to_string().starts_with("/admin")));
    }
}
