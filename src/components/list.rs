//! Entity List Controller
//!
//! Generic fetch-render-refresh machinery shared by the user-scoped row
//! lists (medications, access codes): loading skeleton while rows are in
//! flight, an empty state with a call-to-action, or one rendered row per
//! record. Every successful mutation calls `refresh` for a full refetch;
//! the list never patches itself incrementally.

use leptos::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::components::loading::ListSkeleton;

/// List lifecycle states
#[derive(Clone)]
pub enum ListState<T: Clone + 'static> {
    Loading,
    Empty,
    Ready(Vec<T>),
}

type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, String>>>>;

/// Fetches rows for one collection and tracks the render state.
#[derive(Clone)]
pub struct ListController<T: Clone + 'static> {
    state: RwSignal<ListState<T>>,
    load: Rc<dyn Fn() -> LoadFuture<T>>,
}

impl<T: Clone + 'static> ListController<T> {
    pub fn new<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        Self {
            state: create_rw_signal(ListState::Loading),
            load: Rc::new(move || -> LoadFuture<T> { Box::pin(load()) }),
        }
    }

    pub fn state(&self) -> RwSignal<ListState<T>> {
        self.state
    }

    /// Refetch and re-render the whole list.
    pub fn refresh(&self) {
        let state = self.state;
        let load = Rc::clone(&self.load);

        state.set(ListState::Loading);
        spawn_local(async move {
            match load().await {
                Ok(rows) if rows.is_empty() => state.set(ListState::Empty),
                Ok(rows) => state.set(ListState::Ready(rows)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Fetch failed: {}", e).into());
                    state.set(ListState::Empty);
                }
            }
        });
    }
}

/// Renders a `ListController` through its three states, delegating row
/// markup to the caller.
#[component]
pub fn ListView<T, F, IV>(
    controller: ListController<T>,
    #[prop(into)] empty_title: String,
    #[prop(into)] empty_hint: String,
    row: F,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(T) -> IV + Clone + 'static,
    IV: IntoView + 'static,
{
    let state = controller.state();

    view! {
        {move || match state.get() {
            ListState::Loading => view! { <ListSkeleton /> }.into_view(),
            ListState::Empty => view! {
                <div class="text-center py-12">
                    <p class="text-gray-400">{empty_title.clone()}</p>
                    <p class="text-gray-500 text-sm mt-1">{empty_hint.clone()}</p>
                </div>
            }.into_view(),
            ListState::Ready(rows) => {
                let row = row.clone();
                rows.into_iter().map(|item| row(item)).collect_view()
            }
        }}
    }
}
