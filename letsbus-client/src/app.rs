//! Route dispatch: path in, rendered page out

use std::sync::Arc;

use crate::directory::Directory;
use crate::page::UsersPage;
use crate::routes::Route;
use crate::views::{AboutPage, HomePage, UserPage};

/// Render the page for a route. Only the users page touches the network.
pub async fn render_route(route: &Route, directory: Arc<dyn Directory>) -> String {
    tracing::debug!(path = %route, "rendering route");
    match route {
        Route::Home => HomePage.to_string(),
        Route::About => AboutPage.to_string(),
        Route::User(id) => UserPage { id }.to_string(),
        Route::Users => {
            let mut page = UsersPage::new(directory);
            page.load().await;
            page.view().to_string()
        }
    }
}
