use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCheck;
use dioxus_free_icons::Icon;
use std::rc::Rc;

/// One rendered row of a [`Dropdown`].
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownEntry {
    pub label: String,
    pub selected: bool,
}

/// Map items to rows, in order, marking every row equal to `selected_item`.
pub fn option_entries(items: &[String], selected_item: Option<&str>) -> Vec<DropdownEntry> {
    items
        .iter()
        .map(|item| DropdownEntry {
            label: item.clone(),
            selected: selected_item == Some(item.as_str()),
        })
        .collect()
}

/// Handle a click on row `index`: report that row's item once.
///
/// Returns false, reporting nothing, when `index` is past the last row.
pub fn select_entry(entries: &[DropdownEntry], index: usize, report: impl FnOnce(String)) -> bool {
    match entries.get(index) {
        Some(entry) => {
            report(entry.label.clone());
            true
        }
        None => false,
    }
}

/// A plain option list. Clicking a row calls `on_select` with that row's
/// item. Opening and closing the list is up to the caller.
#[component]
pub fn Dropdown(
    /// Called with the picked item.
    on_select: EventHandler<String>,
    /// Options in display order.
    items: Vec<String>,
    /// Highlighted option, if any.
    #[props(default)]
    selected_item: Option<String>,
) -> Element {
    let entries = Rc::new(option_entries(&items, selected_item.as_deref()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ul { class: "dropdown", role: "listbox",
            {entries.iter().enumerate().map(|(index, entry)| {
                let rows = Rc::clone(&entries);
                rsx! {
                    li {
                        key: "{index}",
                        class: if entry.selected { "dropdown-item dropdown-item-selected" } else { "dropdown-item" },
                        role: "option",
                        aria_selected: if entry.selected { "true" } else { "false" },
                        onclick: move |_| {
                            select_entry(&rows, index, |item| on_select.call(item));
                        },
                        span { class: "dropdown-item-label", "{entry.label}" }
                        if entry.selected {
                            Icon { width: 12, height: 12, icon: LdCheck }
                        }
                    }
                }
            })}
        }
    }
}
