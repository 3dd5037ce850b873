//! Qoogle Web Frontend
//!
//! A Yew single-page app: AI search, a reels feed and friend streaks,
//! behind a local username/password sign-in.

use qoogle_core::View;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
mod storage;

use components::{AuthGate, BottomNav};
use pages::{ReelsPage, SearchPage, StreaksPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/reels")]
    Reels,
    #[at("/streaks")]
    Streaks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Screen shown for this route
    pub fn view(&self) -> View {
        match self {
            Route::Reels => View::Reels,
            Route::Streaks => View::Streaks,
            Route::Home | Route::Search | Route::NotFound => View::Search,
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        match view {
            View::Search => Route::Search,
            View::Reels => Route::Reels,
            View::Streaks => Route::Streaks,
        }
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::Search => html! { <SearchPage /> },
        Route::Reels => html! { <ReelsPage /> },
        Route::Streaks => html! { <StreaksPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Search} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthGate>
                <div class="app-shell">
                    <main class="app-main">
                        <Switch<Route> render={switch} />
                    </main>
                    <BottomNav />
                </div>
            </AuthGate>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_view_round_trip() {
        for &view in View::all() {
            assert_eq!(Route::from(view).view(), view);
        }
        assert_eq!(Route::Home.view(), View::Search);
    }
}
