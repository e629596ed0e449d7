//! Toast Notifications
//!
//! Fire-and-forget success/error/info notifications with auto-dismiss.
//! The `Toasts` handle is provided via context.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 3500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Notification handle provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, level, message });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toast handle from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Fixed-position toast stack
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let list = toasts.toasts;

    view! {
        <div class="toast-host">
            <For
                each=move || list.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.level.class()>{toast.message}</div>
                    }
                }
            />
        </div>
    }
}
