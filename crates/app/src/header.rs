use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::components::{NavItem, Navbar, UserTypeSelector};
use tracing::info;

pub const APP_TITLE: &str = "PunPun";

/// Top navigation bar. Owns the current user-type selection and hands it
/// to the selector on every render.
#[component]
pub fn Header(items: Vec<String>, initial_selection: Option<String>, role: Role) -> Element {
    let mut selection = use_signal(|| initial_selection);

    rsx! {
        Navbar { class: "app-header",
            NavItem {
                span { class: "app-title", "{APP_TITLE}" }
            }
            UserTypeSelector {
                on_select: move |item: String| {
                    info!(%item, "user type changed");
                    selection.set(Some(item));
                },
                items,
                selected_item: selection(),
                role,
            }
        }
    }
}
