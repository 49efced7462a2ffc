use shared::NoticeKind;
use yew::prelude::*;

use crate::hooks::use_notifications::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastListProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast success",
        NoticeKind::Error => "toast error",
    }
}

#[function_component(ToastList)]
pub fn toast_list(props: &ToastListProps) -> Html {
    if props.toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-container" role="status">
            {for props.toasts.iter().map(|toast| {
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };

                html! {
                    <div key={toast.id} class={toast_class(toast.notice.kind)}>
                        <span class="toast-text">{&toast.notice.text}</span>
                        <button type="button" class="toast-close" aria-label="Dismiss" onclick={on_close}>
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
