//! Toast notification host.
//!
//! Sections push [`Notice`] payloads through the shared manager; the
//! container renders them fixed in the top-right corner and auto-dismisses
//! after the notice's configured delay.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::core::notify::{Notice, NoticeKind};
use crate::ui::icon::{Icon, icons};

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Notice with a unique id for list tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notice: Notice,
}

/// Signal-backed queue of toasts. `Copy` so sections can capture it freely.
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Push a notice, dropping the oldest past the cap
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notice });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::success(title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::error(title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::info(title, message));
    }

    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Use the manager provided at the app root
pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}

/// Notifications container component, placed once at the app root
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                notifications.get().into_iter().map(|item| {
                    let id = item.id;
                    let notice = item.notice.clone();

                    view! {
                        <NotificationToast notice=notice id=id notifications=notifications />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast with auto-dismiss and a manual close button
#[component]
fn NotificationToast(
    notice: Notice,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let (is_visible, _set_is_visible) = signal(true);
    let (is_exiting, _set_is_exiting) = signal(false);

    // Auto-dismiss if specified
    if let Some(_ms) = notice.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                _set_is_visible.set(false);
                notifications.update(|n| {
                    n.retain(|i| i.id != id);
                });
            });
        }
    }

    let (bg_class, border_class, icon_class) = match notice.kind {
        NoticeKind::Success => ("bg-green-500/10", "border-green-500/30", "text-green-400"),
        NoticeKind::Error => ("bg-red-500/10", "border-red-500/30", "text-red-400"),
        NoticeKind::Warning => (
            "bg-yellow-500/10",
            "border-yellow-500/30",
            "text-yellow-400",
        ),
        NoticeKind::Info => ("bg-blue-500/10", "border-blue-500/30", "text-blue-400"),
    };

    let icon_name = match notice.kind {
        NoticeKind::Success => icons::CHECK_CIRCLE,
        NoticeKind::Error => icons::X,
        NoticeKind::Warning => icons::ALERT_TRIANGLE,
        NoticeKind::Info => icons::INFO,
    };

    let title = notice.title.clone();
    let message = notice.message.clone();
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {} {}",
        bg_class, border_class
    );

    view! {
        <Show when=move || is_visible.get()>
            <div
                class=container_class.clone()
                style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
            >
                <div class=icon_class>
                    <Icon name=icon_name class="w-5 h-5" />
                </div>
                <div class="flex-1 min-w-0">
                    <h4 class="text-sm font-medium text-theme-primary">{title.clone()}</h4>
                    <p class="text-xs text-theme-secondary mt-0.5">{message.clone()}</p>
                </div>
                <button
                    class="text-theme-tertiary hover:text-theme-primary transition-colors"
                    on:click=move |_| {
                        notifications.update(|n| {
                            n.retain(|i| i.id != id);
                        });
                    }
                >
                    <Icon name=icons::X class="w-4 h-4" />
                </button>
            </div>
        </Show>
    }
}
