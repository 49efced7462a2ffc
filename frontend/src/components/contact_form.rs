use shared::{CounterTone, FieldName, FieldUpdate};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::attachment_picker::AttachmentPicker;
use crate::hooks::use_contact_form::{ContactFormView, UseContactFormActions};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub view: ContactFormView,
    pub actions: UseContactFormActions,
    /// Latest selectable date of birth (YYYY-MM-DD)
    pub today: String,
}

fn counter_class(tone: CounterTone) -> &'static str {
    match tone {
        CounterTone::Normal => "char-counter",
        CounterTone::NearLimit => "char-counter near-limit",
        CounterTone::OverLimit => "char-counter over-limit",
    }
}

fn field_error(view: &ContactFormView, field: FieldName) -> Html {
    match view.error(field) {
        Some(message) => html! { <div class="field-error" role="alert">{message}</div> },
        None => html! {},
    }
}

fn input_class(view: &ContactFormView, field: FieldName) -> &'static str {
    if view.error(field).is_some() {
        "form-input invalid"
    } else {
        "form-input"
    }
}

/// Emit a text update from an `<input>` event
fn text_input(on_change: &Callback<FieldUpdate>, to_update: fn(String) -> FieldUpdate) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(to_update(input.value()));
    })
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let view = &props.view;
    let actions = &props.actions;
    let disabled = view.is_submitting();

    let on_message_input = {
        let on_change = actions.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(FieldUpdate::Message(input.value()));
        })
    };

    let on_newsletter_change = {
        let on_change = actions.on_field_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FieldUpdate::Newsletter(input.checked()));
        })
    };

    let on_submit = {
        let on_submit = actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="contact-form-section">
            <h2>{"Send us a message"}</h2>

            <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                <div class="form-group">
                    <label for={FieldName::Name.as_str()}>{FieldName::Name.label()}</label>
                    <input
                        type="text"
                        id={FieldName::Name.as_str()}
                        class={input_class(view, FieldName::Name)}
                        placeholder="Your full name"
                        value={view.fields.name.clone()}
                        oninput={text_input(&actions.on_field_change, FieldUpdate::Name)}
                        disabled={disabled}
                    />
                    {field_error(view, FieldName::Name)}
                </div>

                <div class="form-group">
                    <label for={FieldName::Email.as_str()}>{FieldName::Email.label()}</label>
                    <input
                        type="email"
                        id={FieldName::Email.as_str()}
                        class={input_class(view, FieldName::Email)}
                        placeholder="you@example.com"
                        value={view.fields.email.clone()}
                        oninput={text_input(&actions.on_field_change, FieldUpdate::Email)}
                        disabled={disabled}
                    />
                    {field_error(view, FieldName::Email)}
                </div>

                {if view.variant.collects_date_of_birth() {
                    html! {
                        <div class="form-group">
                            <label for={FieldName::DateOfBirth.as_str()}>{FieldName::DateOfBirth.label()}</label>
                            <div class="date-of-birth-row">
                                <input
                                    type="date"
                                    id={FieldName::DateOfBirth.as_str()}
                                    class={input_class(view, FieldName::DateOfBirth)}
                                    max={props.today.clone()}
                                    value={view.fields.date_of_birth.clone()}
                                    oninput={text_input(&actions.on_field_change, FieldUpdate::DateOfBirth)}
                                    disabled={disabled}
                                />
                                <span class="age-display">{&view.age_display}</span>
                            </div>
                            {field_error(view, FieldName::DateOfBirth)}
                        </div>
                    }
                } else { html! {} }}

                <div class="form-group">
                    <label for={FieldName::Message.as_str()}>{FieldName::Message.label()}</label>
                    <textarea
                        id={FieldName::Message.as_str()}
                        class={input_class(view, FieldName::Message)}
                        placeholder="How can we help?"
                        rows="6"
                        maxlength={view.max_message_length.to_string()}
                        value={view.fields.message.clone()}
                        oninput={on_message_input}
                        disabled={disabled}
                    />
                    <div class={counter_class(view.counter_tone)}>
                        {format!("{}/{}", view.message_length, view.max_message_length)}
                    </div>
                    {field_error(view, FieldName::Message)}
                </div>

                {if view.variant.accepts_attachment() {
                    html! {
                        <AttachmentPicker
                            attachment={view.attachment.clone()}
                            max_bytes={view.max_attachment_bytes}
                            disabled={disabled}
                            on_selected={actions.on_attachment_selected.clone()}
                            on_removed={actions.on_attachment_removed.clone()}
                        />
                    }
                } else { html! {} }}

                <div class="form-group checkbox-group">
                    <input
                        type="checkbox"
                        id={FieldName::Newsletter.as_str()}
                        checked={view.fields.newsletter}
                        onchange={on_newsletter_change}
                        disabled={disabled}
                    />
                    <label for={FieldName::Newsletter.as_str()}>{"Subscribe to our newsletter"}</label>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary submit-btn"
                    disabled={!view.can_submit}
                >
                    {view.submit_label}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_counter_class_per_tone() {
        assert_eq!(counter_class(CounterTone::Normal), "char-counter");
        assert_eq!(counter_class(CounterTone::NearLimit), "char-counter near-limit");
        assert_eq!(counter_class(CounterTone::OverLimit), "char-counter over-limit");
    }
}
