use dioxus::prelude::*;
use shared_types::Role;
use tracing::debug;

use crate::components::{Dropdown, NavItem};

/// Where a click inside the selector landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorClick {
    /// The label area around the list.
    Label,
    /// A row of the open list.
    Option(String),
}

/// Open/closed state of one selector instance.
///
/// Only the privileged role can change it. Losing the role while open
/// leaves `visible` set; [`SelectorState::shows_options`] hides the list
/// instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorState {
    visible: bool,
}

impl SelectorState {
    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility for the privileged role. Returns whether anything changed.
    pub fn toggle(&mut self, role: &Role) -> bool {
        if !role.is_privileged() {
            return false;
        }
        self.visible = !self.visible;
        true
    }

    /// Whether the option list should be on screen for `role`.
    pub fn shows_options(&self, role: &Role) -> bool {
        self.visible && role.is_privileged()
    }

    /// Route one click. Returns the item to report, if any.
    ///
    /// A label click toggles. An option click reports its item only while
    /// the list is on screen and never reaches the label, so it leaves the
    /// list open.
    pub fn click(&mut self, role: &Role, target: SelectorClick) -> Option<String> {
        match target {
            SelectorClick::Label => {
                self.toggle(role);
                None
            }
            SelectorClick::Option(item) => self.shows_options(role).then_some(item),
        }
    }
}

/// Label plus the guarded option list, rendered from an explicit state.
///
/// Clicks inside the list stop at the list. Left to bubble, a pick would
/// also hit the label's toggle and close the list as a side effect.
#[component]
pub fn SelectorBody(
    state: SelectorState,
    role: Role,
    on_select: EventHandler<String>,
    items: Vec<String>,
    #[props(default)]
    selected_item: Option<String>,
) -> Element {
    let label = selected_item.clone().unwrap_or_default();

    rsx! {
        span { class: "user-type-label", "{label}" }
        if state.shows_options(&role) {
            div {
                class: "user-type-options",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                Dropdown { on_select, items, selected_item }
            }
        }
    }
}

/// Navbar entry showing the current user type.
///
/// For the `OWNER` role a click opens or closes the list of `items`;
/// any other role sees a static label. The selection is owned by the
/// caller and only ever reported through `on_select`. The list stays open
/// after a pick.
#[component]
pub fn UserTypeSelector(
    /// Called once per pick with the chosen item.
    on_select: EventHandler<String>,
    /// Options in display order.
    items: Vec<String>,
    /// Current selection, shown verbatim. `None` shows an empty label.
    #[props(default)]
    selected_item: Option<String>,
    /// Role of the viewer, checked on every click.
    role: Role,
) -> Element {
    let mut state = use_signal(SelectorState::default);
    let click_role = role.clone();
    let pick_role = role.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        NavItem {
            class: "user-type-selector",
            onclick: move |_| {
                state.write().click(&click_role, SelectorClick::Label);
                debug!(
                    role = %click_role,
                    visible = state.peek().is_visible(),
                    "user type selector clicked"
                );
            },
            SelectorBody {
                state: state(),
                role,
                on_select: move |item: String| {
                    let picked = state.write().click(&pick_role, SelectorClick::Option(item));
                    if let Some(item) = picked {
                        debug!(%item, "user type selected");
                        on_select.call(item);
                    }
                },
                items,
                selected_item,
            }
        }
    }
}
