use std::cell::Cell;
use std::rc::Rc;

use contact_form_domain::Notifier;
use gloo::timers::future::TimeoutFuture;
use shared::Notice;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Show(Toast),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Show(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(ToastQueue { toasts })
    }
}

/// [`Notifier`] that shows transient toasts.
///
/// Dispatch happens on the next microtask, so a notice raised while the form
/// state is borrowed never re-enters rendering.
#[derive(Clone)]
pub struct ToastNotifier {
    dispatcher: UseReducerDispatcher<ToastQueue>,
    next_id: Rc<Cell<u32>>,
    duration_ms: u32,
}

impl ToastNotifier {
    fn show(&self, notice: Notice) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let dispatcher = self.dispatcher.clone();
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            dispatcher.dispatch(ToastAction::Show(Toast { id, notice }));
            TimeoutFuture::new(duration_ms).await;
            dispatcher.dispatch(ToastAction::Dismiss(id));
        });
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, text: &str) {
        self.show(Notice::success(text));
    }

    fn error(&self, text: &str) {
        self.show(Notice::error(text));
    }
}

pub struct UseNotificationsResult {
    pub toasts: Vec<Toast>,
    pub notifier: ToastNotifier,
    pub dismiss: Callback<u32>,
}

/// Toast queue whose entries dismiss themselves after `duration_ms`
#[hook]
pub fn use_notifications(duration_ms: u32) -> UseNotificationsResult {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_memo((), |_| Rc::new(Cell::new(0u32)));

    let notifier = ToastNotifier {
        dispatcher: queue.dispatcher(),
        next_id: (*next_id).clone(),
        duration_ms,
    };

    let dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    UseNotificationsResult {
        toasts: queue.toasts.clone(),
        notifier,
        dismiss,
    }
}
