//! Static route table
//!
//! Path-to-view mapping for the rendering layer. Pure data: no parameters,
//! no query strings, no guards.

/// One route table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: &'static str,
    /// Additional path this route answers to
    pub alias: Option<&'static str>,
}

/// Where the root path redirects
pub const ROOT_REDIRECT: &str = "/login";

/// All routes in declaration order
pub const ROUTES: &[Route] = &[
    // Auth
    Route { path: "/login", view: "LogIn", alias: None },
    Route { path: "/signup", view: "SignUp", alias: None },
    Route { path: "/forgot-password", view: "ForgotPassword", alias: None },
    Route { path: "/check-email", view: "CheckEmail", alias: None },
    Route { path: "/reset-password", view: "ResetPassword", alias: None },
    // Main
    Route { path: "/home", view: "Home", alias: None },
    // Search
    Route { path: "/select-car", view: "SelectCar", alias: None },
    Route { path: "/select-bmy", view: "SelectBMY", alias: None },
    Route { path: "/search-vin", view: "SearchVIN", alias: None },
    Route {
        path: "/search-license",
        view: "SearchLicense",
        alias: Some("/search-license-plate"),
    },
    // Results
    Route { path: "/result", view: "Result", alias: None },
    Route { path: "/result-page", view: "ResultPage", alias: None },
    Route { path: "/history", view: "History", alias: None },
    // User
    Route { path: "/profile", view: "Profile", alias: None },
    Route { path: "/maintain", view: "Maintain", alias: None },
];

/// Resolve a path to its route
///
/// `/` follows the root redirect; aliases resolve to their canonical route;
/// unknown paths resolve to nothing.
pub fn resolve(path: &str) -> Option<&'static Route> {
    let path = if path == "/" { ROOT_REDIRECT } else { path };
    ROUTES
        .iter()
        .find(|r| r.path == path || r.alias == Some(path))
}
