use yew::prelude::*;

use crate::hooks::use_countdown::use_countdown;

#[derive(Properties, PartialEq)]
pub struct SuccessMessageProps {
    pub countdown_secs: u32,
    /// Returns the form to idle; fired once, on expiry or on request
    pub on_reset: Callback<()>,
}

#[function_component(SuccessMessage)]
pub fn success_message(props: &SuccessMessageProps) -> Html {
    let countdown = use_countdown(props.countdown_secs, props.on_reset.clone());

    let on_send_another = {
        let finish_now = countdown.finish_now.clone();
        Callback::from(move |_: MouseEvent| finish_now.emit(()))
    };

    html! {
        <section class="success-section" aria-live="polite">
            <div class="success-icon">{"✓"}</div>
            <h2>{"Message Sent!"}</h2>
            <p>{"Thank you for reaching out. We'll get back to you as soon as possible."}</p>
            <p class="countdown-text">{&countdown.status_text}</p>
            <button type="button" class="btn btn-primary" onclick={on_send_another}>
                {"Send Another Message"}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(countdown_secs: u32) -> (yew::AppHandle<SuccessMessage>, Element, Rc<Cell<u32>>) {
        let resets = Rc::new(Cell::new(0u32));
        let on_reset = {
            let resets = resets.clone();
            Callback::from(move |_| resets.set(resets.get() + 1))
        };

        let document = gloo::utils::document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let handle = yew::Renderer::<SuccessMessage>::with_root_and_props(
            root.clone(),
            SuccessMessageProps { countdown_secs, on_reset },
        )
        .render();

        (handle, root, resets)
    }

    fn click_send_another(root: &Element) {
        let button: HtmlElement = root
            .query_selector("button")
            .unwrap()
            .expect("send another button rendered")
            .dyn_into()
            .unwrap();
        button.click();
    }

    #[wasm_bindgen_test]
    async fn test_expiry_fires_reset_once() {
        let (_handle, root, resets) = mount(1);

        TimeoutFuture::new(3500).await;

        assert_eq!(resets.get(), 1);
        let text = root.text_content().unwrap_or_default();
        assert!(text.contains("Redirecting back to form in 0 seconds..."), "{}", text);
    }

    #[wasm_bindgen_test]
    async fn test_send_another_fires_once_and_stops_ticks() {
        let (_handle, root, resets) = mount(2);
        TimeoutFuture::new(50).await;

        click_send_another(&root);
        assert_eq!(resets.get(), 1);

        click_send_another(&root);
        TimeoutFuture::new(3000).await;
        assert_eq!(resets.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_unmount_releases_timer() {
        let (handle, _root, resets) = mount(1);
        TimeoutFuture::new(50).await;

        handle.destroy();
        TimeoutFuture::new(2500).await;

        assert_eq!(resets.get(), 0);
    }
}
