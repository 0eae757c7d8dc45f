//! Announcements Admin Page
//!
//! List plus create/edit/delete. On a successful mutation the modal closes,
//! the form resets, and the collection is re-fetched; on failure the modal
//! stays open with the entered values intact.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AnnouncementPayload};
use crate::components::{DeleteConfirmButton, Modal};
use crate::config::AppConfig;
use crate::derived;
use crate::models::Announcement;
use crate::remote::{RemoteState, RemoteStore};

#[derive(Clone, Debug, PartialEq, Eq)]
enum EditorTarget {
    Closed,
    Create,
    Edit(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AnnouncementForm {
    title: String,
    description: String,
}

impl AnnouncementForm {
    fn from_announcement(announcement: &Announcement) -> Self {
        Self {
            title: announcement.title.clone(),
            description: announcement.description.clone(),
        }
    }

    /// Presence check only; everything else is the server's call
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required.".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required.".to_string());
        }
        Ok(())
    }
}

#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = RemoteStore::new();

    let (editor, set_editor) = signal(EditorTarget::Closed);
    let form = RwSignal::new(AnnouncementForm::default());
    let (form_error, set_form_error) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let reload = {
        let config = config.clone();
        move || {
            let config = config.clone();
            store.load(async move { api::list_announcements(&config).await });
        }
    };
    reload();

    let close_editor = move || {
        set_editor.set(EditorTarget::Closed);
        set_form_error.set(String::new());
        form.set(AnnouncementForm::default());
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
            let target = editor.get();
            spawn_local(async move {
                let payload = AnnouncementPayload {
                    title: &current.title,
                    description: &current.description,
                };
                let result = match &target {
                    EditorTarget::Edit(id) => {
                        api::update_announcement(&config, id, &payload).await
                    }
                    _ => api::create_announcement(&config, &payload).await,
                };
                match result {
                    Ok(()) => {
                        let _ = set_editor.try_set(EditorTarget::Closed);
                        let _ = form.try_set(AnnouncementForm::default());
                        reload();
                    }
                    Err(err) => {
                        let _ = set_form_error.try_set(err.user_message());
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
                match api::delete_announcement(&config, &id).await {
                    Ok(()) => reload(),
                    Err(err) => log::error!("delete announcement failed: {}", err.user_message()),
                }
            });
        }
    };

    let announcement_list = move || match store.state().get() {
        RemoteState::Idle | RemoteState::Loading => {
            view! { <p class="page-loading">"Loading announcements..."</p> }.into_any()
        }
        RemoteState::Failed(message) => {
            view! { <div class="page-error">{message}</div> }.into_any()
        }
        RemoteState::Ready(items) if items.is_empty() => {
            view! { <p class="panel-empty">"No announcements yet."</p> }.into_any()
        }
        RemoteState::Ready(items) => {
            let sorted = derived::latest_first(&items);
            sorted
                .into_iter()
                .map(|announcement| {
                    let edit_source = announcement.clone();
                    let delete_id = announcement.id.clone();
                    let delete = delete.clone();
                    view! {
                        <div class="announcement-row">
                            <div class="announcement-text">
                                <h3>{announcement.title.clone()}</h3>
                                <p>{announcement.description.clone()}</p>
                                <p class="announcement-date">
                                    {derived::format_date_time(Some(&announcement.created_at))}
                                </p>
                            </div>
                            <div class="announcement-actions">
                                <button
                                    class="edit-btn"
                                    on:click=move |_| {
                                        form.set(AnnouncementForm::from_announcement(&edit_source));
                                        set_form_error.set(String::new());
                                        set_editor.set(EditorTarget::Edit(edit_source.id.clone()));
                                    }
                                >
                                    "Edit"
                                </button>
                                <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                    delete(delete_id.clone())
                                }) />
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    let editor_modal = move || {
        let target = editor.get();
        if target == EditorTarget::Closed {
            return ().into_any();
        }
        let title = match &target {
            EditorTarget::Edit(_) => "Edit Announcement",
            _ => "New Announcement",
        };
        let submit = submit.clone();
        view! {
            <Modal title=title on_close=Callback::new(move |_| close_editor())>
                <form class="modal-form" on:submit=submit>
                    <Show when=move || !form_error.get().is_empty()>
                        <div class="form-error">{move || form_error.get()}</div>
                    </Show>

                    <label class="form-field">
                        "Title *"
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        "Description *"
                        <textarea
                            rows=5
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                form.update(|f| f.description = event_target_value(&ev))
                            }
                        ></textarea>
                    </label>

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| close_editor()>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Modal>
        }
        .into_any()
    };

    view! {
        <div class="page announcements-page">
            <div class="page-header">
                <h1>"Announcements"</h1>
                <p class="page-subtitle">"Post and maintain clinic announcements"</p>
                <button
                    class="primary-btn"
                    on:click=move |_| {
                        form.set(AnnouncementForm::default());
                        set_form_error.set(String::new());
                        set_editor.set(EditorTarget::Create);
                    }
                >
                    "New Announcement"
                </button>
            </div>

            <div class="announcement-list">{announcement_list}</div>

            {editor_modal}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_title_and_description() {
        let form = AnnouncementForm::default();
        assert!(form.validate().is_err());

        let form = AnnouncementForm {
            title: "Flu shots".to_string(),
            description: String::new(),
        };
        assert_eq!(form.validate(), Err("Description is required.".to_string()));

        let form = AnnouncementForm {
            title: "Flu shots".to_string(),
            description: "Available this week".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
