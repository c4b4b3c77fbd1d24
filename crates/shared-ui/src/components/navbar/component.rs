use dioxus::prelude::*;

/// Horizontal navigation bar. Children should be `NavItem`s.
#[component]
pub fn Navbar(
    /// Extra classes appended to the `nav` element.
    #[props(default)]
    class: String,
    children: Element,
) -> Element {
    let class = with_base_class("navbar", &class);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "{class}",
            ul { class: "navbar-list", {children} }
        }
    }
}

/// A single navbar entry. The stylesheet gives every item the same outer
/// spacing; behaviour comes entirely from the optional `onclick`.
#[component]
pub fn NavItem(
    /// Extra classes appended to the `li` element.
    #[props(default)]
    class: String,
    /// Called when anything inside the item is clicked.
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = with_base_class("nav-item", &class);

    rsx! {
        li {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

fn with_base_class(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}
