//! Reels Page
//!
//! Vertical snap-scrolling feed. An IntersectionObserver reports which reel
//! is on screen so only that one plays.

use std::rc::Rc;

use chrono::Utc;
use js_sys::Array;
use qoogle_core::{ReelFeed, VISIBILITY_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlInputElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Url,
};
use yew::prelude::*;

use crate::components::ReelItem;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub enum FeedAction {
    Observe { id: String, is_intersecting: bool },
    Upload(String),
}

#[derive(Clone, PartialEq)]
struct FeedState(ReelFeed);

impl Reducible for FeedState {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut feed = self.0.clone();
        match action {
            FeedAction::Observe { id, is_intersecting } => {
                if !feed.observe(&id, is_intersecting) {
                    return self;
                }
            }
            FeedAction::Upload(url) => {
                let reel = feed.upload(url, Utc::now());
                log::info!("Uploaded reel {}", reel.id);
            }
        }
        Rc::new(FeedState(feed))
    }
}

/// Watches every child of `container` and dispatches visibility changes
fn observe_reels(
    container: &web_sys::Element,
    feed: UseReducerDispatcher<FeedState>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if let Some(id) = entry.target().get_attribute("data-reel-id") {
                    feed.dispatch(FeedAction::Observe {
                        id,
                        is_intersecting: entry.is_intersecting(),
                    });
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let children = container.children();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            observer.observe(&child);
        }
    }
    Ok((observer, callback))
}

#[function_component(ReelsPage)]
pub fn reels_page() -> Html {
    let feed = use_reducer(|| FeedState(ReelFeed::seeded()));
    let container_ref = use_node_ref();
    let file_input_ref = use_node_ref();

    // Re-observe whenever a reel is added
    {
        let container_ref = container_ref.clone();
        let dispatcher = feed.dispatcher();
        use_effect_with(feed.0.len(), move |_| {
            let observed = container_ref
                .cast::<web_sys::Element>()
                .map(|container| observe_reels(&container, dispatcher))
                .transpose()
                .unwrap_or_else(|e| {
                    log::error!("Failed to create IntersectionObserver: {:?}", e);
                    None
                });
            move || {
                if let Some((observer, _callback)) = observed {
                    observer.disconnect();
                }
            }
        });
    }

    let on_upload_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_change = {
        let dispatcher = feed.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => dispatcher.dispatch(FeedAction::Upload(url)),
                Err(e) => log::error!("Failed to read {}: {:?}", file.name(), e),
            }
            // Allow picking the same file again
            input.set_value("");
        })
    };

    html! {
        <div class="reels-page">
            <div class="reels-header">
                <h2>{ "Reels" }</h2>
                <button class="btn-icon" title="Upload a video" onclick={on_upload_click}>{ "＋" }</button>
                <input
                    ref={file_input_ref}
                    type="file"
                    accept="video/*"
                    class="hidden"
                    onchange={on_file_change}
                />
            </div>

            <div class="reels-feed" ref={container_ref}>
                { for feed.0.reels().iter().map(|reel| html! {
                    <ReelItem
                        key={reel.id.clone()}
                        reel={reel.clone()}
                        is_visible={feed.0.is_visible(&reel.id)}
                    />
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Rc<FeedState> {
        Rc::new(FeedState(ReelFeed::seeded()))
    }

    #[test]
    fn test_observe_switches_visible_reel() {
        let state = seeded();
        let second = state.0.reels()[1].id.clone();

        let next = state.reduce(FeedAction::Observe {
            id: second.clone(),
            is_intersecting: true,
        });
        assert_eq!(next.0.visible_id(), Some(second.as_str()));
    }

    #[test]
    fn test_unchanged_observation_keeps_state() {
        let state = seeded();
        let first = state.0.reels()[0].id.clone();

        let next = state.clone().reduce(FeedAction::Observe {
            id: first,
            is_intersecting: true,
        });
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_upload_appends_reel() {
        let next = seeded().reduce(FeedAction::Upload("blob:http://localhost/abc".to_string()));
        assert_eq!(next.0.len(), 4);
        let reel = &next.0.reels()[3];
        assert_eq!(reel.author, "@me");
        assert_eq!(reel.url, "blob:http://localhost/abc");
    }
}
