use api::StoreHandle;
use dioxus::prelude::*;
use time::UtcOffset;

use crate::{
    admin::{fetch_results, AdminResultsState, ResultsTable, ViewPhase},
    components::icons::{SpinnerIcon, WarningIcon},
    core::config::DEFAULT_DISPLAY_OFFSET,
    t,
};

/// Admin listing of every typing-test result.
///
/// Fetches once when mounted. The fetch task belongs to this component's
/// scope; if the view goes away first, the late result is dropped.
#[component]
pub fn AdminResultsView(
    store: StoreHandle,
    #[props(default = DEFAULT_DISPLAY_OFFSET)] utc_offset: UtcOffset,
) -> Element {
    let mut state = use_signal(AdminResultsState::default);

    use_hook(move || {
        spawn(async move {
            state.with_mut(AdminResultsState::begin_fetch);
            let outcome = fetch_results(&*store).await;
            match state.try_write() {
                Ok(mut current) => current.apply(outcome),
                Err(_) => tracing::debug!("admin view gone before results arrived; discarding"),
            }
        })
    });

    let current = state.read();

    if current.phase() == ViewPhase::Loading {
        return rsx! {
            div {
                class: "admin-loading",
                role: "status",
                aria_label: t!("admin-loading"),
                SpinnerIcon { class: "icon icon--lg icon--spin" }
            }
        };
    }

    let records = current.records.clone();
    let error = current.error.clone();
    drop(current);

    let count_label = (error.is_none() && !records.is_empty())
        .then(|| t!("admin-count", count = records.len()));

    rsx! {
        section { class: "page page-admin",
            div { class: "admin-card",
                div { class: "admin-card__header",
                    h1 { class: "admin-card__title", {t!("admin-title")} }
                    if let Some(label) = count_label {
                        span { class: "admin-card__meta", "{label}" }
                    }
                }

                div { class: "admin-card__content",
                    match error {
                        Some(message) => rsx! {
                            div { class: "admin-alert", role: "alert",
                                WarningIcon {}
                                span { "{message}" }
                            }
                        },
                        None => rsx! {
                            ResultsTable { records, utc_offset }
                        },
                    }
                }
            }
        }
    }
}
