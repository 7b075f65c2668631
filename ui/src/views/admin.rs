use api::StoreHandle;
use dioxus::prelude::*;

use crate::admin::AdminResultsView;
use crate::core::config::ViewConfig;

/// Routed admin page. Platforms provide the `StoreHandle` (and optionally a
/// `ViewConfig`) as context.
#[component]
pub fn Admin() -> Element {
    let store = use_context::<StoreHandle>();
    let config = try_use_context::<ViewConfig>().unwrap_or_default();

    rsx! {
        AdminResultsView { store, utc_offset: config.utc_offset }
    }
}
