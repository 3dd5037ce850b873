//! Streaks Page
//!
//! Friends ranked by streak. A timer re-applies the decay rule so streaks
//! expire while the page stays open.

use gloo_timers::callback::Interval;
use qoogle_core::utils::now_millis;
use qoogle_core::{Friend, StreakBook, StreakStatus, DECAY_SWEEP_INTERVAL_MS};
use yew::prelude::*;

use crate::components::AuthContext;
use crate::storage::BrowserStore;

pub enum StreaksMsg {
    Sweep,
    Send(u32),
    Logout,
}

pub struct StreaksPage {
    auth: Option<AuthContext>,
    book: Option<StreakBook<BrowserStore>>,
    now: i64,
    _sweep_interval: Interval,
}

impl Component for StreaksPage {
    type Message = StreaksMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let auth = ctx
            .link()
            .context::<AuthContext>(Callback::noop())
            .map(|(auth, _)| auth);
        let now = now_millis();
        // Shares the gate's store so streaks land next to the signed-in user
        let book = auth.as_ref().map(|auth| {
            StreakBook::load(auth.service().store().clone(), &auth.username(), now)
        });
        if book.is_none() {
            log::error!("Streaks page rendered outside of AuthGate");
        }

        let link = ctx.link().clone();
        let sweep_interval = Interval::new(DECAY_SWEEP_INTERVAL_MS, move || {
            link.send_message(StreaksMsg::Sweep);
        });

        Self {
            auth,
            book,
            now,
            _sweep_interval: sweep_interval,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StreaksMsg::Sweep => {
                self.now = now_millis();
                let Some(book) = self.book.as_mut() else {
                    return false;
                };
                let expired = book.sweep(self.now);
                if expired > 0 {
                    log::info!("{} streak(s) expired", expired);
                }
                // Warning indicators depend on the clock even when nothing expired
                true
            }
            StreaksMsg::Send(id) => {
                self.now = now_millis();
                let Some(book) = self.book.as_mut() else {
                    return false;
                };
                if let Err(e) = book.send(id, self.now) {
                    log::warn!("Failed to send snap: {}", e);
                }
                true
            }
            StreaksMsg::Logout => {
                if let Some(auth) = &self.auth {
                    auth.logout();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_logout = ctx.link().callback(|_| StreaksMsg::Logout);
        let friends = self.book.as_ref().map(StreakBook::ranked).unwrap_or_default();

        html! {
            <div class="streaks-page">
                <div class="streaks-header">
                    <h2>{ "Streaks" }</h2>
                    <button class="btn-secondary" onclick={on_logout}>{ "Sign Out" }</button>
                </div>

                <ul class="friend-list">
                    { for friends.iter().map(|friend| self.view_friend(ctx, friend)) }
                </ul>
            </div>
        }
    }
}

impl StreaksPage {
    fn view_friend(&self, ctx: &Context<Self>, friend: &Friend) -> Html {
        let id = friend.id;
        let on_send = ctx.link().callback(move |_| StreaksMsg::Send(id));
        let status = StreakStatus::of(friend, self.now);

        html! {
            <li key={id} class="friend-row">
                <img class="avatar" src={friend.avatar.clone()} alt={friend.name.clone()} />
                <div class="friend-info">
                    <span class="friend-name">{ &friend.name }</span>
                    if friend.is_active() {
                        <span class="friend-streak">
                            { format!("{} {}", friend.streak, status.emoji()) }
                        </span>
                    }
                </div>
                <button class="btn-primary" onclick={on_send}>{ "Send" }</button>
            </li>
        }
    }
}
