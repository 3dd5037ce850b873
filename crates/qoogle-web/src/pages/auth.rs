//! Sign In / Sign Up Page

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::AuthContext;

pub enum AuthMsg {
    UsernameChanged(String),
    PasswordChanged(String),
    Submit,
    ToggleMode,
}

#[derive(Properties, PartialEq)]
pub struct AuthPageProps {
    pub auth: AuthContext,
}

pub struct AuthPage {
    username: String,
    password: String,
    is_login: bool,
    error: Option<String>,
}

impl Component for AuthPage {
    type Message = AuthMsg;
    type Properties = AuthPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            is_login: true,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AuthMsg::UsernameChanged(username) => {
                self.username = username;
                true
            }
            AuthMsg::PasswordChanged(password) => {
                self.password = password;
                true
            }
            AuthMsg::ToggleMode => {
                self.is_login = !self.is_login;
                self.username.clear();
                self.password.clear();
                self.error = None;
                true
            }
            AuthMsg::Submit => {
                self.error = None;

                let auth = &ctx.props().auth;
                let result = if self.is_login {
                    auth.service().login(&self.username, &self.password)
                } else {
                    auth.service().signup(&self.username, &self.password)
                };

                match result {
                    Ok(user) => auth.signed_in(user),
                    Err(e) => {
                        log::warn!("Authentication failed: {}", e);
                        self.error = Some(e.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_username_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AuthMsg::UsernameChanged(input.value())
        });

        let on_password_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            AuthMsg::PasswordChanged(input.value())
        });

        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            AuthMsg::Submit
        });

        let on_toggle = ctx.link().callback(|_| AuthMsg::ToggleMode);

        let (subtitle, button_text, toggle_text) = if self.is_login {
            ("Sign in to continue", "Sign In", "Don't have an account? Sign Up")
        } else {
            ("Create an account", "Sign Up", "Already have an account? Sign In")
        };

        html! {
            <div class="auth-container">
                <div class="auth-box">
                    <h1 class="brand">{ "Qoogle" }</h1>
                    <h2>{ subtitle }</h2>

                    <form onsubmit={on_submit}>
                        <div class="form-group">
                            <input
                                type="text"
                                placeholder="Username"
                                value={self.username.clone()}
                                oninput={on_username_input}
                                required={true}
                            />
                        </div>
                        <div class="form-group">
                            <input
                                type="password"
                                placeholder="Password"
                                value={self.password.clone()}
                                oninput={on_password_input}
                                required={true}
                            />
                        </div>

                        if let Some(ref error) = self.error {
                            <div class="error-message">{ error }</div>
                        }

                        <button type="submit" class="btn-primary">{ button_text }</button>
                    </form>

                    <button class="btn-link" onclick={on_toggle}>{ toggle_text }</button>
                </div>
            </div>
        }
    }
}
