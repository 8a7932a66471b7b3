//! Application store provided through Leptos context.
//!
//! A single [`AppStore`] is created by [`crate::App`] and handed to every
//! screen with `provide_context`. It owns the shared [`AppState`] (session,
//! registry, upload flag) and the toast queue. Screens read through the
//! signals and write through the methods, so the dashboard and the upload
//! screen see the same registry.

use gloo_timers::future::sleep;
use leptos::*;
use zipslides::config::{MAX_TOASTS, TOAST_DURATION};
use zipslides::{AppState, Notice};

use crate::types::Toast;

/// Shared reactive state. `Copy`, so handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub state: RwSignal<AppState>,
    pub toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AppState::new()),
            toasts: create_rw_signal(Vec::new()),
            next_toast_id: store_value(0),
        }
    }

    /// Apply `f` to the state and hand back its result.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    /// Show a toast; it dismisses itself after [`TOAST_DURATION`].
    pub fn notify(&self, notice: Notice) {
        if notice.is_error() {
            log::warn!("{}", notice.message);
        } else {
            log::info!("{}", notice.message);
        }

        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, notice });
            if toasts.len() > MAX_TOASTS {
                toasts.remove(0);
            }
        });

        let store = *self;
        spawn_local(async move {
            sleep(TOAST_DURATION).await;
            store.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The store provided by [`crate::App`].
pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}
