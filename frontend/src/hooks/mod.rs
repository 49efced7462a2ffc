pub mod use_contact_form;
pub mod use_countdown;
pub mod use_notifications;
