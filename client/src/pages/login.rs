//! Login page: credential form backed by the session store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSessionStore;
use crate::net::api::{AuthError, Authenticator};
use crate::net::types::User;
use crate::state::session::{SessionState, SessionStore};
use crate::state::ui::{ToastVariant, UiState};
use crate::util::auth::post_login_target;
use crate::util::storage::KeyValueStore;

pub const DEMO_IDENTIFIER: &str = "admin@school.edu";
pub const DEMO_SECRET: &str = "password123";

/// Toast content for a login outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginFeedback {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: ToastVariant,
}

impl LoginFeedback {
    pub fn from_outcome(outcome: &Result<User, AuthError>) -> Self {
        match outcome {
            Ok(_) => Self {
                title: "Login successful",
                description: "Welcome to EduManage!",
                variant: ToastVariant::Default,
            },
            Err(e @ AuthError::Unexpected(_)) => Self {
                title: "Login error",
                description: e.user_message(),
                variant: ToastVariant::Destructive,
            },
            Err(e) => Self { title: "Login failed", description: e.user_message(), variant: ToastVariant::Destructive },
        }
    }
}

fn disposed() -> AuthError {
    AuthError::Unexpected("session state disposed".to_owned())
}

/// Run one login against the reactive session, without holding a borrow of
/// the signal across the authenticator call.
async fn submit_login<S, A>(
    store: &SessionStore<S, A>,
    session: RwSignal<SessionState>,
    identifier: &str,
    secret: &str,
) -> Result<User, AuthError>
where
    S: KeyValueStore,
    A: Authenticator,
{
    session.try_update(|s| store.begin_login(s)).unwrap_or_else(|| Err(disposed()))?;
    let outcome = store.authenticate(identifier, secret).await;
    session.try_update(|s| store.complete_login(s, outcome)).unwrap_or_else(|| Err(disposed()))
}

/// Mark a submit as in flight. Returns false if one already is, so repeated
/// clicks do not start a second login.
fn claim_submit(submitting: RwSignal<bool>) -> bool {
    submitting
        .try_update(|busy| !std::mem::replace(busy, true))
        .unwrap_or(false)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let store = expect_context::<AppSessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(DEMO_IDENTIFIER.to_owned());
    let password = RwSignal::new(DEMO_SECRET.to_owned());
    let submitting = RwSignal::new(false);

    // Signed-in visitors (including right after a successful submit) go to
    // the destination the guard recorded.
    Effect::new(move || {
        if session.with(SessionState::is_authenticated) {
            let recorded = ui.try_update(|u| u.return_to.take()).flatten();
            navigate(
                &post_login_target(recorded.as_deref()),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !claim_submit(submitting) {
            return;
        }
        let identifier = email.get_untracked();
        let secret = password.get_untracked();
        let store = store.clone();

        leptos::task::spawn_local(async move {
            let outcome = submit_login(&store, session, &identifier, &secret).await;
            let feedback = LoginFeedback::from_outcome(&outcome);
            ui.update(|u| {
                u.push_toast(feedback.title, feedback.description, feedback.variant);
            });
            // The page may already be gone after a successful redirect.
            submitting.try_set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-page__inner">
                <div class="login-brand">
                    <div class="login-brand__logo">"E"</div>
                    <h1>"Welcome to EduManage"</h1>
                    <p>"Sign in to your school management system"</p>
                </div>

                <div class="login-card">
                    <h2 class="login-card__title">"Sign in"</h2>
                    <p class="login-card__subtitle">"Enter your credentials to access your dashboard"</p>
                    <form class="login-form" on:submit=on_submit>
                        <label class="login-form__label">
                            "Email address"
                            <input
                                class="login-input"
                                type="email"
                                placeholder="admin@school.edu"
                                required=true
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="login-form__label">
                            "Password"
                            <input
                                class="login-input"
                                type="password"
                                placeholder="Enter your password"
                                required=true
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="login-button" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>

                    <div class="login-demo">
                        <p class="login-demo__title">"Demo Credentials:"</p>
                        <p>"Email: " {DEMO_IDENTIFIER}</p>
                        <p>"Password: " {DEMO_SECRET}</p>
                    </div>
                </div>

                <p class="login-page__footer">"\u{00A9} 2024 EduManage. Professional School Management System."</p>
            </div>
        </div>
    }
}
