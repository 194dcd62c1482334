//! Route table

use std::fmt;

use letsbus_core::UserId;

/// Every page reachable by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    User(UserId),
    Users,
}

/// Path patterns in table order, with their page names
pub const ROUTE_TABLE: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/user/:id", "User"),
    ("/users", "Users"),
];

impl Route {
    /// Match a path. One trailing slash is tolerated.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        match trimmed {
            "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/users" => Some(Route::Users),
            other => {
                let id = other.strip_prefix("/user/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::User(UserId::from(id)))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::User(id) => format!("/user/{}", id),
            Route::Users => "/users".to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::User(_) => "User",
            Route::Users => "Users",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Links shown in the navigation bar
pub fn nav_links() -> Vec<(&'static str, &'static str)> {
    ROUTE_TABLE
        .iter()
        .filter(|(path, _)| !path.contains(':'))
        .map(|(path, name)| (*name, *path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_paths() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/about"), Some(Route::About));
        assert_eq!(Route::parse("/users"), Some(Route::Users));
        assert_eq!(Route::parse("/user/7"), Some(Route::User(UserId::Number(7))));
        assert_eq!(
            Route::parse("/user/ana"),
            Some(Route::User(UserId::Text("ana".into())))
        );
    }

    #[test]
    fn trailing_slash_tolerated() {
        assert_eq!(Route::parse("/users/"), Some(Route::Users));
        assert_eq!(Route::parse("/user/7/"), Some(Route::User(UserId::Number(7))));
    }

    #[test]
    fn unknown_paths_rejected() {
        for path in ["", "/nope", "/user", "/user/", "/user/1/edit", "users"] {
            assert_eq!(Route::parse(path), None, "{path}");
        }
    }

    #[test]
    fn path_is_inverse_of_parse() {
        for route in [
            Route::Home,
            Route::About,
            Route::User(UserId::Number(3)),
            Route::User(UserId::Text("x".into())),
            Route::Users,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn nav_skips_parameterised_routes() {
        assert_eq!(
            nav_links(),
            vec![("Home", "/"), ("About", "/about"), ("Users", "/users")]
        );
    }
}
