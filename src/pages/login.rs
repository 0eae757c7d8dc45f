//! Student Login Page
//!
//! Username/password sign-in against the external auth service. On success
//! the landing page depends on the account role.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::context::use_app;
use crate::models::Role;
use crate::pages::Page;
use crate::store::{session_login, use_session};

/// Landing page after a successful sign-in
fn landing_page(role: Role) -> Page {
    match role {
        Role::StudentAssistant => Page::Notifications,
        Role::Admin | Role::Nurse => Page::Home,
    }
}

#[component]
pub fn StudentLogin() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = use_session();
    let ctx = use_app();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let entered_username = username.get();
        let entered_password = password.get();
        if entered_username.is_empty() || entered_password.is_empty() {
            set_error.set("Username and password are required.".to_string());
            return;
        }
        set_error.set(String::new());
        set_submitting.set(true);

        let config = config.clone();
        spawn_local(async move {
            match api::login(&config, &entered_username, &entered_password).await {
                Ok(user) => {
                    let landing = landing_page(user.role);
                    let _ = set_submitting.try_set(false);
                    session_login(&session, user);
                    ctx.navigate(landing);
                }
                Err(err) => {
                    let _ = set_error.try_set(err.user_message());
                    let _ = set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1>"UCC Clinic Portal"</h1>
                    <p>"Sign in to your account"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="form-error">{move || error.get()}</div>
                    </Show>

                    <label class="form-field">
                        "Username"
                        <input
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="login-submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="login-roles">
                    <h3>"User Roles:"</h3>
                    <ul>
                        <li><strong>"Admin:"</strong> " Full system access"</li>
                        <li><strong>"Nurse:"</strong> " Medical services & inventory"</li>
                        <li><strong>"Student Assistant:"</strong> " Limited access"</li>
                    </ul>
                </div>

                <p class="login-help">"Need help? Contact the clinic administrator"</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_per_role() {
        assert_eq!(landing_page(Role::Admin), Page::Home);
        assert_eq!(landing_page(Role::Nurse), Page::Home);
        assert_eq!(landing_page(Role::StudentAssistant), Page::Notifications);
    }
}
