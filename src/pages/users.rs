//! User Management Page
//!
//! Accounts table with create, delete, and activate/deactivate. Only exposed
//! when the `user_management` feature flag is on. Duplicate rejections from
//! the server are rendered with category-specific messages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, DuplicateKind, NewUserPayload, Rejection};
use crate::components::{DeleteConfirmButton, Modal};
use crate::config::AppConfig;
use crate::derived;
use crate::models::User;
use crate::remote::{RemoteState, RemoteStore};

#[derive(Clone, Debug, PartialEq, Eq)]
struct UserForm {
    username: String,
    password: String,
    role: String,
    full_name: String,
    email: String,
    contact_number: String,
    student_id: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            role: "student_assistant".to_string(),
            full_name: String::new(),
            email: String::new(),
            contact_number: String::new(),
            student_id: String::new(),
        }
    }
}

impl UserForm {
    /// Presence checks only; duplicate detection is the server's job
    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username is required.".to_string());
        }
        if self.password.trim().is_empty() {
            return Err("Password is required.".to_string());
        }
        if self.full_name.trim().is_empty() {
            return Err("Full name is required.".to_string());
        }
        Ok(())
    }
}

/// Category-specific message for a duplicate rejection; falls back to the
/// server's own message for anything unrecognized.
fn duplicate_message(rejection: &Rejection, form: &UserForm) -> String {
    let existing = rejection.existing_user.clone().unwrap_or_default();
    let not_specified = || "Not specified".to_string();
    match rejection.duplicate {
        Some(DuplicateKind::Username) => format!(
            "Username \"{}\" already exists. Please choose a different username.",
            form.username
        ),
        Some(DuplicateKind::FullName) => format!(
            "A user with the name \"{}\" already exists ({}, student ID {}). Please verify if this is the same person or use a different name.",
            form.full_name,
            existing.role,
            existing.student_id.unwrap_or_else(not_specified),
        ),
        Some(DuplicateKind::StudentId) => format!(
            "Student ID \"{}\" is already registered to {} ({}). Please verify the student ID.",
            form.student_id, existing.full_name, existing.role
        ),
        Some(DuplicateKind::Email) => format!(
            "Email \"{}\" is already registered to {} ({}). Please use a different email address.",
            form.email,
            existing.full_name,
            existing.email.unwrap_or_else(not_specified),
        ),
        Some(DuplicateKind::ContactNumber) => format!(
            "Contact number \"{}\" is already registered to {} ({}). Please use a different contact number.",
            form.contact_number,
            existing.full_name,
            existing.contact_number.unwrap_or_else(not_specified),
        ),
        None => rejection
            .message
            .clone()
            .unwrap_or_else(|| "Failed to create user.".to_string()),
    }
}

fn role_badge_class(role: crate::models::Role) -> &'static str {
    match role {
        crate::models::Role::Admin => "badge badge-admin",
        crate::models::Role::Nurse => "badge badge-nurse",
        crate::models::Role::StudentAssistant => "badge badge-assistant",
    }
}

#[component]
pub fn UserManagementPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    if !config.features.user_management {
        return view! {
            <div class="page users-page">
                <div class="page-error">
                    "User management is not available in this environment."
                </div>
            </div>
        }
        .into_any();
    }

    let store: RemoteStore<Vec<User>> = RemoteStore::new();
    let (show_create, set_show_create) = signal(false);
    let form = RwSignal::new(UserForm::default());
    let (form_error, set_form_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let reload = {
        let config = config.clone();
        move || {
            let config = config.clone();
            store.load(async move { api::list_users(&config).await });
        }
    };
    reload();

    let close_modal = move || {
        set_show_create.set(false);
        set_form_error.set(String::new());
        form.set(UserForm::default());
    };

    let submit = {
        let config = config.clone();
        let reload = reload.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if saving.get() {
                return;
            }
            let current = form.get();
            if let Err(message) = current.validate() {
                set_form_error.set(message);
                return;
            }
            set_form_error.set(String::new());
            set_saving.set(true);

            let config = config.clone();
            let reload = reload.clone();
            spawn_local(async move {
                let payload = NewUserPayload {
                    username: &current.username,
                    password: &current.password,
                    role: &current.role,
                    full_name: &current.full_name,
                    email: &current.email,
                    contact_number: &current.contact_number,
                    student_id: &current.student_id,
                };
                match api::create_user(&config, &payload).await {
                    Ok(()) => {
                        let _ = set_show_create.try_set(false);
                        let _ = form.try_set(UserForm::default());
                        reload();
                    }
                    Err(err) => {
                        let message = match err.rejection() {
                            Some(rejection) => duplicate_message(rejection, &current),
                            None => err.user_message(),
                        };
                        let _ = set_form_error.try_set(message);
                    }
                }
                let _ = set_saving.try_set(false);
            });
        }
    };

    let delete = {
        let config = config.clone();
        let reload = reload.clone();
        move |id: String| {
            let config = config.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::delete_user(&config, &id).await {
                    Ok(()) => reload(),
                    Err(err) => log::error!("delete user failed: {}", err.user_message()),
                }
            });
        }
    };

    let toggle_status = {
        let config = config.clone();
        let reload = reload.clone();
        move |id: String, is_active: bool| {
            let config = config.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match api::set_user_status(&config, &id, !is_active).await {
                    Ok(()) => reload(),
                    Err(err) => log::error!("update user status failed: {}", err.user_message()),
                }
            });
        }
    };

    let user_table = move || match store.state().get() {
        RemoteState::Idle | RemoteState::Loading => {
            view! { <p class="page-loading">"Loading users..."</p> }.into_any()
        }
        RemoteState::Failed(message) => {
            view! { <div class="page-error">{message}</div> }.into_any()
        }
        RemoteState::Ready(users) if users.is_empty() => {
            view! { <p class="panel-empty">"No users found."</p> }.into_any()
        }
        RemoteState::Ready(users) => view! {
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Full Name"</th>
                        <th>"Role"</th>
                        <th>"Email"</th>
                        <th>"Contact"</th>
                        <th>"Created"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {users
                        .into_iter()
                        .map(|user| {
                            let toggle_id = user.id.clone();
                            let delete_id = user.id.clone();
                            let is_active = user.is_active;
                            let status_class = if is_active {
                                "status-btn active"
                            } else {
                                "status-btn inactive"
                            };
                            let toggle_status = toggle_status.clone();
                            let delete = delete.clone();
                            view! {
                                <tr>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.full_name.clone()}</td>
                                    <td>
                                        <span class=role_badge_class(user.role)>
                                            {user.role.label()}
                                        </span>
                                    </td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.contact_number.clone()}</td>
                                    <td>{derived::format_day(user.created_at.as_ref())}</td>
                                    <td>
                                        <button
                                            class=status_class
                                            on:click=move |_| {
                                                toggle_status(toggle_id.clone(), is_active)
                                            }
                                        >
                                            {if is_active { "Active" } else { "Inactive" }}
                                        </button>
                                    </td>
                                    <td>
                                        <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                            delete(delete_id.clone())
                                        }) />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    let create_modal = move || {
        if !show_create.get() {
            return ().into_any();
        }
        let submit = submit.clone();
        view! {
            <Modal title="Create User" on_close=Callback::new(move |_| close_modal())>
                <form class="modal-form" on:submit=submit>
                    <Show when=move || !form_error.get().is_empty()>
                        <div class="form-error">{move || form_error.get()}</div>
                    </Show>

                    <label class="form-field">
                        "Username *"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                form.update(|f| f.username = event_target_value(&ev))
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Password *"
                        <input
                            type="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev))
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Role"
                        <select
                            prop:value=move || form.with(|f| f.role.clone())
                            on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        >
                            <option value="student_assistant">"Student Assistant"</option>
                            <option value="nurse">"Nurse"</option>
                            <option value="admin">"Admin"</option>
                        </select>
                    </label>

                    <label class="form-field">
                        "Full Name *"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| {
                                form.update(|f| f.full_name = event_target_value(&ev))
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev))
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Contact Number"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.contact_number.clone())
                            on:input=move |ev| {
                                form.update(|f| f.contact_number = event_target_value(&ev))
                            }
                        />
                    </label>

                    <label class="form-field">
                        "Student ID"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.student_id.clone())
                            on:input=move |ev| {
                                form.update(|f| f.student_id = event_target_value(&ev))
                            }
                        />
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| close_modal()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || if saving.get() { "Creating..." } else { "Create User" }}
                        </button>
                    </div>
                </form>
            </Modal>
        }
        .into_any()
    };

    view! {
        <div class="page users-page">
            <div class="page-header">
                <h1>"User Management"</h1>
                <p class="page-subtitle">"Manage clinic system accounts and their access"</p>
                <button
                    class="primary-btn"
                    on:click=move |_| {
                        form.set(UserForm::default());
                        set_form_error.set(String::new());
                        set_show_create.set(true);
                    }
                >
                    "Create User"
                </button>
            </div>

            <div class="panel">{user_table}</div>

            {create_modal}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ExistingUser;

    fn sample_form() -> UserForm {
        UserForm {
            username: "jdoe".to_string(),
            password: "secret".to_string(),
            role: "nurse".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jdoe@ucc.edu.ph".to_string(),
            contact_number: "09171234567".to_string(),
            student_id: "2021-00123".to_string(),
        }
    }

    #[test]
    fn test_validate_requires_username_password_full_name() {
        assert!(sample_form().validate().is_ok());

        let mut form = sample_form();
        form.username.clear();
        assert_eq!(form.validate(), Err("Username is required.".to_string()));

        let mut form = sample_form();
        form.full_name = "   ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_username_conflict_gets_specific_message() {
        let rejection = Rejection {
            message: Some("Duplicate user".to_string()),
            duplicate: Some(DuplicateKind::Username),
            existing_user: None,
        };
        let message = duplicate_message(&rejection, &sample_form());
        assert!(message.contains("Username \"jdoe\" already exists"));
        assert_ne!(message, "Duplicate user");
    }

    #[test]
    fn test_email_conflict_names_existing_owner() {
        let rejection = Rejection {
            message: None,
            duplicate: Some(DuplicateKind::Email),
            existing_user: Some(ExistingUser {
                full_name: "Juan Dela Cruz".to_string(),
                role: "nurse".to_string(),
                ..ExistingUser::default()
            }),
        };
        let message = duplicate_message(&rejection, &sample_form());
        assert!(message.contains("jdoe@ucc.edu.ph"));
        assert!(message.contains("Juan Dela Cruz"));
    }

    #[test]
    fn test_unknown_conflict_falls_back_to_server_message() {
        let rejection = Rejection {
            message: Some("Something else went wrong".to_string()),
            duplicate: None,
            existing_user: None,
        };
        assert_eq!(
            duplicate_message(&rejection, &sample_form()),
            "Something else went wrong"
        );
    }
}
