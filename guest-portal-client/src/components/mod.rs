pub mod credentials;
pub mod nav;
pub mod registration;
pub mod request_card;
pub mod request_form;
