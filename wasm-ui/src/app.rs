//! Main application component.

use reclist_rs::{Endpoint, EndpointKind};
use yew::prelude::*;

use crate::components::RecordListView;

/// Collections selectable in the header, in tab order.
const COLLECTIONS: [EndpointKind; 2] = [EndpointKind::Examples, EndpointKind::Transactions];

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let active = use_state(|| EndpointKind::Examples);

    let tabs = COLLECTIONS.iter().map(|kind| {
        let active = active.clone();
        let kind = *kind;
        let class = if *active == kind { "tab active-tab" } else { "tab" };
        let onclick = Callback::from(move |_| active.set(kind));
        html! {
            <button {class} {onclick}>{ kind.label() }</button>
        }
    });

    // Keying the view by collection remounts it on tab switch, so each
    // selection gets its own mount-time fetch.
    let endpoint = Endpoint::local(*active);

    html! {
        <div class="app">
            <header class="header">
                <h1>{ format!("{} from the record service", active.label()) }</h1>
                <nav class="tabs">{ for tabs }</nav>
            </header>

            <main class="main">
                <RecordListView key={active.label()} endpoint={endpoint} />
            </main>

            <footer class="footer">
                <span class="footer-build">
                    { format!("Build: {}@{} {}", env!("BUILD_HOST"), env!("BUILD_COMMIT"), env!("BUILD_TIMESTAMP")) }
                </span>
            </footer>
        </div>
    }
}
