//! Single reel: autoplay on visibility, tap to pause, double tap to like

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use qoogle_core::{Reel, ReelInteraction, TapOutcome, DOUBLE_TAP_WINDOW_MS, HEART_FLASH_MS};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReelItemProps {
    pub reel: Reel,
    pub is_visible: bool,
}

#[function_component(ReelItem)]
pub fn reel_item(props: &ReelItemProps) -> Html {
    let video_ref = use_node_ref();
    let interaction = use_mut_ref(ReelInteraction::default);
    let tap_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let heart_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let trigger = use_force_update();

    // Scrolling on screen starts playback; scrolling off pauses and rewinds
    {
        let interaction = interaction.clone();
        let video_ref = video_ref.clone();
        let trigger = trigger.clone();
        use_effect_with(props.is_visible, move |visible| {
            interaction.borrow_mut().set_visible(*visible);
            if !*visible {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_current_time(0.0);
                }
            }
            trigger.force_update();
            || ()
        });
    }

    let playing = interaction.borrow().playing;
    {
        let interaction = interaction.clone();
        let video_ref = video_ref.clone();
        let trigger = trigger.clone();
        let id = props.reel.id.clone();
        use_effect_with(playing, move |playing| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                if *playing {
                    // The attribute alone does not mute an element created from script
                    video.set_muted(true);
                    match video.play() {
                        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                            if let Err(e) = JsFuture::from(promise).await {
                                log::warn!("Autoplay blocked for reel {}: {:?}", id, e);
                                interaction.borrow_mut().playing = false;
                                trigger.force_update();
                            }
                        }),
                        Err(e) => log::warn!("Failed to play reel {}: {:?}", id, e),
                    }
                } else if let Err(e) = video.pause() {
                    log::warn!("Failed to pause reel {}: {:?}", id, e);
                }
            }
            || ()
        });
    }

    let on_tap = {
        let interaction = interaction.clone();
        let trigger = trigger.clone();
        Callback::from(move |_: MouseEvent| {
            let outcome = interaction.borrow_mut().tap();
            match outcome {
                TapOutcome::Pending => {
                    let interaction = interaction.clone();
                    let trigger = trigger.clone();
                    *tap_timer.borrow_mut() = Some(Timeout::new(DOUBLE_TAP_WINDOW_MS, move || {
                        if interaction.borrow_mut().tap_window_elapsed() {
                            trigger.force_update();
                        }
                    }));
                }
                TapOutcome::DoubleTap => {
                    // Dropping the pending timeout cancels the play/pause toggle
                    tap_timer.borrow_mut().take();
                    let interaction = interaction.clone();
                    let hide = trigger.clone();
                    *heart_timer.borrow_mut() = Some(Timeout::new(HEART_FLASH_MS, move || {
                        interaction.borrow_mut().hide_heart();
                        hide.force_update();
                    }));
                    trigger.force_update();
                }
            }
        })
    };

    let on_like = {
        let interaction = interaction.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            interaction.borrow_mut().toggle_like();
            trigger.force_update();
        })
    };

    let state = interaction.borrow().clone();
    let reel = &props.reel;

    html! {
        <div class="reel" data-reel-id={reel.id.clone()} onclick={on_tap}>
            <video
                ref={video_ref}
                class="reel-video"
                src={reel.url.clone()}
                loop=true
                muted=true
                playsinline=true
            />

            if !state.playing && props.is_visible {
                <div class="reel-overlay play-indicator">{ "▶" }</div>
            }
            if state.heart_visible {
                <div class="reel-overlay heart-flash">{ "❤️" }</div>
            }

            <div class="reel-actions">
                <button class={classes!("reel-action", state.liked.then_some("liked"))} onclick={on_like}>
                    <span>{ if state.liked { "❤️" } else { "🤍" } }</span>
                    <span class="reel-count">{ "1.2M" }</span>
                </button>
                <div class="reel-action">
                    <span>{ "💬" }</span>
                    <span class="reel-count">{ "3.4K" }</span>
                </div>
                <div class="reel-action">
                    <span>{ "↗️" }</span>
                    <span class="reel-count">{ "Share" }</span>
                </div>
            </div>

            <div class="reel-info">
                <p class="reel-author">{ &reel.author }</p>
                <p class="reel-description">{ &reel.description }</p>
            </div>
        </div>
    }
}
