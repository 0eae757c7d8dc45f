//! Email Test Page
//!
//! Sends test messages through the server's notification mailer. Failed
//! tests are results to log on screen, newest first, not page errors.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, EmailConfig, TestOutcome};
use crate::config::AppConfig;
use crate::remote::{RemoteState, RemoteStore};

#[derive(Clone, Debug, PartialEq, Eq)]
struct TestRecord {
    test: String,
    success: bool,
    message: String,
    timestamp: String,
}

fn record_outcome(test: &str, outcome: TestOutcome, timestamp: String) -> TestRecord {
    TestRecord {
        test: test.to_string(),
        success: outcome.success,
        message: outcome
            .message
            .unwrap_or_else(|| "No message returned.".to_string()),
        timestamp,
    }
}

fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}

#[component]
pub fn EmailTestPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    if !config.features.email_testing {
        return view! {
            <div class="page email-test-page">
                <div class="page-error">"Email testing is not available in this environment."</div>
            </div>
        }
        .into_any();
    }

    let email_config: RemoteStore<EmailConfig> = RemoteStore::new();
    let (test_email, set_test_email) = signal(String::new());
    let (running, set_running) = signal(false);
    let results = RwSignal::new(Vec::<TestRecord>::new());

    {
        let config = config.clone();
        email_config.load(async move { api::email_config(&config).await });
    }

    // One helper per test button; each prepends its outcome to the log.
    let run_test = {
        let config = config.clone();
        move |test_name: &'static str, status: Option<&'static str>| {
            if running.get() {
                return;
            }
            let recipient = test_email.get();
            if recipient.trim().is_empty() {
                results.update(|log| {
                    log.insert(
                        0,
                        TestRecord {
                            test: test_name.to_string(),
                            success: false,
                            message: "Please enter a test email address.".to_string(),
                            timestamp: local_timestamp(),
                        },
                    )
                });
                return;
            }
            set_running.set(true);
            let config = config.clone();
            spawn_local(async move {
                let outcome = match (test_name, status) {
                    ("Request Status Email", Some(status)) => {
                        api::test_request_status_email(&config, &recipient, status).await
                    }
                    ("Inventory Expiration Email", _) => {
                        api::test_inventory_email(&config, &recipient).await
                    }
                    _ => api::test_email_connection(&config, &recipient).await,
                };
                let record = match outcome {
                    Ok(outcome) => record_outcome(test_name, outcome, local_timestamp()),
                    Err(_) => TestRecord {
                        test: test_name.to_string(),
                        success: false,
                        message: "Network error occurred".to_string(),
                        timestamp: local_timestamp(),
                    },
                };
                let _ = results.try_update(|log| log.insert(0, record));
                let _ = set_running.try_set(false);
            });
        }
    };

    let config_card = move || match email_config.state().get() {
        RemoteState::Idle | RemoteState::Loading => {
            view! { <p class="page-loading">"Loading email configuration..."</p> }.into_any()
        }
        RemoteState::Failed(message) => {
            view! { <div class="page-error">{message}</div> }.into_any()
        }
        RemoteState::Ready(settings) => view! {
            <div class="config-card">
                <h3>"Mailer Configuration"</h3>
                <p>
                    <strong>"Service: "</strong>
                    {settings.service.clone().unwrap_or_else(|| "-".to_string())}
                </p>
                <p>
                    <strong>"Host: "</strong>
                    {settings.host.clone().unwrap_or_else(|| "-".to_string())}
                    {settings.port.map(|port| format!(":{port}")).unwrap_or_default()}
                </p>
                <p>
                    <strong>"User: "</strong>
                    {settings.user.clone().unwrap_or_else(|| "-".to_string())}
                </p>
                <p>
                    <strong>"Status: "</strong>
                    {if settings.configured { "Configured" } else { "Not configured" }}
                </p>
            </div>
        }
        .into_any(),
    };

    let run_basic = run_test.clone();
    let run_approved = run_test.clone();
    let run_rejected = run_test.clone();
    let run_inventory = run_test.clone();

    view! {
        <div class="page email-test-page">
            <div class="page-header">
                <h1>"Email Test"</h1>
                <p class="page-subtitle">"Verify the notification mailer end to end"</p>
            </div>

            <div class="panel">{config_card}</div>

            <div class="panel">
                <label class="form-field">
                    "Test Email Address"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || test_email.get()
                        on:input=move |ev| set_test_email.set(event_target_value(&ev))
                    />
                </label>

                <div class="test-actions">
                    <button
                        class="primary-btn"
                        disabled=move || running.get()
                        on:click=move |_| run_basic("Basic Email Test", None)
                    >
                        "Test Connection"
                    </button>
                    <button
                        class="primary-btn"
                        disabled=move || running.get()
                        on:click=move |_| run_approved("Request Status Email", Some("approved"))
                    >
                        "Test Approved Email"
                    </button>
                    <button
                        class="primary-btn"
                        disabled=move || running.get()
                        on:click=move |_| run_rejected("Request Status Email", Some("rejected"))
                    >
                        "Test Rejected Email"
                    </button>
                    <button
                        class="primary-btn"
                        disabled=move || running.get()
                        on:click=move |_| run_inventory("Inventory Expiration Email", None)
                    >
                        "Test Inventory Email"
                    </button>
                </div>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h2>"Results"</h2>
                    <button class="secondary-btn" on:click=move |_| results.set(Vec::new())>
                        "Clear"
                    </button>
                </div>
                {move || {
                    let log = results.get();
                    if log.is_empty() {
                        view! { <p class="panel-empty">"No tests run yet."</p> }.into_any()
                    } else {
                        log.into_iter()
                            .map(|record| {
                                let row_class = if record.success {
                                    "result-row success"
                                } else {
                                    "result-row failure"
                                };
                                view! {
                                    <div class=row_class>
                                        <span class="result-test">{record.test}</span>
                                        <span class="result-message">{record.message}</span>
                                        <span class="result-time">{record.timestamp}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_record_keeps_server_message() {
        let record = record_outcome(
            "Basic Email Test",
            TestOutcome {
                success: true,
                message: Some("Email sent".to_string()),
            },
            "stamp".to_string(),
        );
        assert!(record.success);
        assert_eq!(record.message, "Email sent");
    }

    #[test]
    fn test_outcome_record_fills_missing_message() {
        let record = record_outcome(
            "Basic Email Test",
            TestOutcome {
                success: false,
                message: None,
            },
            "stamp".to_string(),
        );
        assert!(!record.success);
        assert_eq!(record.message, "No message returned.");
    }
}
