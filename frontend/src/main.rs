use std::rc::Rc;

use contact_form_domain::Notifier;
use shared::SubmissionState;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::contact_form::ContactForm;
use components::header::Header;
use components::success_message::SuccessMessage;
use components::toast::ToastList;
use hooks::use_contact_form::use_contact_form;
use hooks::use_notifications::use_notifications;
use services::api::ApiClient;
use services::config::read_settings;
use services::date_utils::get_current_date;

#[function_component(App)]
fn app() -> Html {
    let settings = use_memo((), |_| read_settings());
    let api_client = use_memo((), {
        let delay_ms = settings.form.submit_delay_ms;
        move |_| ApiClient::new(delay_ms)
    });

    let notifications = use_notifications(settings.form.notice_duration_ms);
    let notifier: Rc<dyn Notifier> = Rc::new(notifications.notifier.clone());
    let contact_form = use_contact_form(&settings, notifier, &api_client);

    let view = &contact_form.view;

    html! {
        <div class="app">
            <Header variant={view.variant} />
            <main class="container">
                {if view.state == SubmissionState::Submitted {
                    html! {
                        <SuccessMessage
                            countdown_secs={view.success_countdown_secs}
                            on_reset={contact_form.actions.on_reset.clone()}
                        />
                    }
                } else {
                    html! {
                        <ContactForm
                            view={view.clone()}
                            actions={contact_form.actions.clone()}
                            today={get_current_date()}
                        />
                    }
                }}
            </main>
            <ToastList toasts={notifications.toasts.clone()} on_dismiss={notifications.dismiss.clone()} />
        </div>
    }
}

fn main() {
    services::logging::Logger::init(tracing::Level::INFO);
    yew::Renderer::<App>::new().render();
}
