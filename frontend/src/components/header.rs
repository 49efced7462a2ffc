use shared::FormVariant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub variant: FormVariant,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Contact Us"}</h1>
                <p class="header-subtitle">
                    {match props.variant {
                        FormVariant::Basic => "Have a question? Drop us a line.",
                        FormVariant::Extended => "Tell us a bit about yourself and attach anything useful.",
                    }}
                </p>
            </div>
        </header>
    }
}
