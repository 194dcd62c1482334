//! Static pages

use std::fmt;

use letsbus_core::UserId;

use crate::routes::nav_links;

pub struct HomePage;

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Home")
    }
}

pub struct AboutPage;

impl fmt::Display for AboutPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "About")
    }
}

/// Echoes the `:id` route parameter
pub struct UserPage<'a> {
    pub id: &'a UserId,
}

impl fmt::Display for UserPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User ID: {}", self.id)
    }
}

pub struct NavBar;

impl fmt::Display for NavBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links: Vec<String> = nav_links()
            .into_iter()
            .map(|(name, path)| format!("{} ({})", name, path))
            .collect();
        writeln!(f, "{}", links.join(" | "))
    }
}

/// Landing screen of the bus app: logo and the two entry buttons
pub struct BusHome;

impl BusHome {
    pub const TITLE: &'static str = "Let's Bus";
    pub const BUTTONS: [&'static str; 2] = ["Add report", "Get information"];
}

impl fmt::Display for BusHome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Self::TITLE)?;
        writeln!(f)?;
        for button in Self::BUTTONS {
            writeln!(f, "[ {} ]", button)?;
        }
        Ok(())
    }
}
