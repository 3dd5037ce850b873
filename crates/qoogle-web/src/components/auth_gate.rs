//! Auth Gate Component
//!
//! Renders the sign-in page until a user is present, then its children

use std::rc::Rc;

use qoogle_core::{AuthService, User};
use yew::prelude::*;

use crate::pages::AuthPage;
use crate::storage::BrowserStore;

/// Shared authentication state
#[derive(Clone)]
pub struct AuthContext {
    pub current_user: Option<User>,
    service: Rc<AuthService<BrowserStore>>,
    set_user: Callback<Option<User>>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.current_user == other.current_user && Rc::ptr_eq(&self.service, &other.service)
    }
}

impl AuthContext {
    pub fn service(&self) -> &AuthService<BrowserStore> {
        &self.service
    }

    pub fn username(&self) -> String {
        self.current_user
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }

    /// Called by the auth page after a successful login or signup
    pub fn signed_in(&self, user: User) {
        log::info!("Signed in as {}", user.username);
        self.set_user.emit(Some(user));
    }

    pub fn logout(&self) {
        self.service.logout();
        self.set_user.emit(None);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthGateProps {
    pub children: Html,
}

#[function_component(AuthGate)]
pub fn auth_gate(props: &AuthGateProps) -> Html {
    let service = use_memo((), |_| AuthService::new(BrowserStore::local()));
    let user = {
        let service = service.clone();
        use_state(move || service.current_user())
    };

    let set_user = {
        let user = user.clone();
        Callback::from(move |next: Option<User>| user.set(next))
    };

    let context = AuthContext {
        current_user: (*user).clone(),
        service,
        set_user,
    };

    html! {
        <ContextProvider<AuthContext> context={context.clone()}>
            if user.is_some() {
                { props.children.clone() }
            } else {
                <AuthPage auth={context} />
            }
        </ContextProvider<AuthContext>>
    }
}
