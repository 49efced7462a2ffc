pub mod attachment_picker;
pub mod contact_form;
pub mod header;
pub mod success_message;
pub mod toast;
