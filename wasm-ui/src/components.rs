//! UI components for the record list.

use std::cell::Cell;
use std::rc::Rc;

use reclist_rs::{Endpoint, ViewState};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::fetch;

/// Props for [`RecordListView`].
#[derive(Properties, PartialEq)]
pub struct RecordListViewProps {
    /// Collection endpoint this view is bound to.
    pub endpoint: Endpoint,
}

/// A list of records fetched once when the component mounts.
///
/// The unit dependency makes the effect run once per mounted lifetime, so
/// re-renders from unrelated state never refetch. A response that arrives
/// after unmount is dropped via the alive flag rather than written to a dead
/// state handle. Failures are logged and swallowed; the list simply stays
/// empty.
#[function_component(RecordListView)]
pub fn record_list_view(props: &RecordListViewProps) -> Html {
    let state = use_state(ViewState::new);

    {
        let state = state.clone();
        let endpoint = props.endpoint.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            let alive_on_teardown = alive.clone();

            spawn_local(async move {
                match fetch::fetch_records(&endpoint).await {
                    Ok(batch) => {
                        if alive.get() {
                            state.set(state.replaced(batch));
                        }
                    }
                    Err(e) => log::error!("Error fetching data: {e}"),
                }
            });

            move || alive_on_teardown.set(false)
        });
    }

    html! {
        <ul class="record-list">
            { for state.list_items().into_iter().map(|item| {
                html! {
                    <li key={item.key}>{ item.text }</li>
                }
            })}
        </ul>
    }
}
