use dioxus::prelude::*;

mod config;
mod header;
mod session;

use header::Header;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::app_config();
    let role = use_hook(|| session::session_role(&config.session.role));

    rsx! {
        Header {
            items: config.selector.items.clone(),
            initial_selection: config.selector.initial_selection(),
            role,
        }
    }
}
