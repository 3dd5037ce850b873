//! Bottom navigation bar

use qoogle_core::View;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

fn icon(view: View) -> &'static str {
    match view {
        View::Search => "🔍",
        View::Reels => "🎬",
        View::Streaks => "🔥",
    }
}

#[function_component(BottomNav)]
pub fn bottom_nav() -> Html {
    let active = use_route::<Route>().unwrap_or(Route::Search).view();
    let navigator = use_navigator();

    html! {
        <nav class="bottom-nav">
            { for View::all().iter().map(|&view| {
                let onclick = {
                    let navigator = navigator.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::from(view));
                        }
                    })
                };
                let class = classes!("nav-item", (view == active).then_some("active"));
                html! {
                    <button key={view.as_str()} {class} {onclick}>
                        <span class="nav-icon">{ icon(view) }</span>
                        <span class="nav-label">{ view.label() }</span>
                    </button>
                }
            }) }
        </nav>
    }
}
