use std::collections::BTreeMap;
use std::rc::Rc;

use contact_form_domain::{ContactForm, Notifier, SubmissionOutcome, SubmissionTransport};
use shared::{
    AttachmentInfo, ContactFormSettings, CounterTone, FieldName, FieldUpdate, FormFields, FormVariant,
    SubmissionState,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::BrowserClock;
use crate::services::logging::Logger;

const COMPONENT: &str = "contact-form-hook";

/// Render-ready snapshot of a [`ContactForm`]
#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormView {
    pub variant: FormVariant,
    pub fields: FormFields,
    pub errors: BTreeMap<FieldName, String>,
    pub age_display: String,
    pub message_length: usize,
    pub max_message_length: usize,
    pub counter_tone: CounterTone,
    pub attachment: Option<AttachmentInfo>,
    pub max_attachment_bytes: u64,
    pub state: SubmissionState,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub success_countdown_secs: u32,
}

impl ContactFormView {
    pub fn of(form: &ContactForm) -> Self {
        let errors = form
            .field_errors()
            .keys()
            .filter_map(|field| form.field_error_message(*field).map(|message| (*field, message)))
            .collect();

        Self {
            variant: form.variant(),
            fields: form.fields().clone(),
            errors,
            age_display: form.age_display(),
            message_length: form.message_length(),
            max_message_length: form.config().max_message_length,
            counter_tone: form.counter_tone(),
            attachment: form.staged_attachment().cloned(),
            max_attachment_bytes: form.config().max_attachment_bytes,
            state: form.state(),
            can_submit: form.can_submit(),
            submit_label: form.submit_label(),
            success_countdown_secs: form.config().success_countdown_secs,
        }
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }
}

#[derive(Clone, PartialEq)]
pub struct UseContactFormActions {
    pub on_field_change: Callback<FieldUpdate>,
    pub on_attachment_selected: Callback<AttachmentInfo>,
    pub on_attachment_removed: Callback<()>,
    pub on_submit: Callback<()>,
    pub on_reset: Callback<()>,
}

pub struct UseContactFormResult {
    pub view: ContactFormView,
    pub actions: UseContactFormActions,
}

/// Owns one [`ContactForm`] for the lifetime of the calling component
#[hook]
pub fn use_contact_form(
    settings: &ContactFormSettings,
    notifier: Rc<dyn Notifier>,
    api_client: &ApiClient,
) -> UseContactFormResult {
    let form = {
        let settings = settings.clone();
        use_mut_ref(move || {
            ContactForm::with_config(settings.variant, settings.form)
                .with_clock(Rc::new(BrowserClock))
                .with_notifier(notifier)
        })
    };
    let rerender = use_force_update();

    let on_field_change = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |update: FieldUpdate| {
            let changed = form.borrow_mut().update_field(update);
            if changed {
                rerender.force_update();
            }
        })
    };

    let on_attachment_selected = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |file: AttachmentInfo| {
            let file_name = file.file_name.clone();
            let result = form.borrow_mut().stage_attachment(file);
            match result {
                Ok(()) => Logger::debug_with_component(COMPONENT, &format!("Staged '{}'", file_name)),
                Err(e) => Logger::info_with_component(COMPONENT, &format!("Rejected '{}': {}", file_name, e)),
            }
            rerender.force_update();
        })
    };

    let on_attachment_removed = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let removed = form.borrow_mut().remove_attachment();
            if removed.is_some() {
                rerender.force_update();
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let rerender = rerender.clone();
        let api_client = api_client.clone();
        Callback::from(move |_| {
            let started = form.borrow_mut().begin_submit();
            let ticket = match started {
                Ok(ticket) => ticket,
                Err(rejection) => {
                    Logger::debug_with_component(COMPONENT, &format!("Submit rejected: {}", rejection));
                    rerender.force_update();
                    return;
                }
            };
            rerender.force_update();

            let form = form.clone();
            let rerender = rerender.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                let outcome = SubmissionOutcome::from(api_client.send(&ticket.record).await);
                let state = form.borrow_mut().finish_submission(&ticket, outcome);
                Logger::debug_with_component(COMPONENT, &format!("Submission settled in {:?}", state));
                rerender.force_update();
            });
        })
    };

    let on_reset = {
        let form = form.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let reset = form.borrow_mut().reset();
            if reset {
                rerender.force_update();
            }
        })
    };

    let view = ContactFormView::of(&form.borrow());

    UseContactFormResult {
        view,
        actions: UseContactFormActions {
            on_field_change,
            on_attachment_selected,
            on_attachment_removed,
            on_submit,
            on_reset,
        },
    }
}
