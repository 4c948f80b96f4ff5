use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

/// Notifications close themselves after this long.
const AUTO_DISMISS: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Error,
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

/// Handle on the notification stack, shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = *next_id.peek();
        next_id.set(id + 1);

        tracing::debug!("toast.push: id={} kind={:?} title={}", id, kind, title);
        let mut toasts = self.toasts;
        toasts.with_mut(|items| {
            items.push(Toast {
                id,
                title,
                body,
                kind,
            })
        });

        // Owned by the root scope: the page that pushed may unmount first.
        let handle = *self;
        spawn_forever(async move {
            crate::pending::simulate_latency(AUTO_DISMISS).await;
            handle.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    pub fn info(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Info);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Success);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let tr = crate::use_translator();
    let items = (toasts.toasts)();

    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        "aria-label": tr.t("dismiss"),
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::*;

    thread_local! {
        static LEFT: Cell<usize> = const { Cell::new(usize::MAX) };
    }

    fn app() -> Element {
        rsx! {
            ToastProvider {
                Host {}
                Counter {}
            }
        }
    }

    /// Shows the pushing page, then unmounts it on the first scheduler turn.
    #[component]
    fn Host() -> Element {
        let mut show = use_signal(|| true);
        use_hook(|| spawn(async move { show.set(false) }));
        rsx! {
            if show() {
                Pusher {}
            }
        }
    }

    #[component]
    fn Pusher() -> Element {
        let toasts = use_toasts();
        use_hook(|| toasts.success("Draft saved".to_string(), None));
        rsx! { p { "page" } }
    }

    #[component]
    fn Counter() -> Element {
        let toasts = use_toasts();
        let count = toasts.toasts.read().len();
        LEFT.with(|left| left.set(count));
        rsx! {}
    }

    async fn drive(dom: &mut VirtualDom, budget: Duration) {
        let _ = tokio::time::timeout(budget, async {
            loop {
                dom.wait_for_work().await;
                let _ = dom.render_immediate_to_vec();
            }
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn toast_dismisses_after_its_page_unmounts() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert_eq!(LEFT.with(Cell::get), 1);

        drive(&mut dom, Duration::from_secs(1)).await;
        assert_eq!(LEFT.with(Cell::get), 1, "toast still shown before the delay");

        drive(&mut dom, Duration::from_secs(5)).await;
        assert_eq!(LEFT.with(Cell::get), 0);
    }
}
