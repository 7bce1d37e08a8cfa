use leptos::*;

use guest_portal_common::user::Registration;

use crate::{
    api::{self, UnauthorizedApi, DEFAULT_API_URL},
    components::registration::RegistrationForm,
    pages::{notify, redirect, Page},
};

#[component]
pub fn Register(cx: Scope) -> impl IntoView {
    let api = UnauthorizedApi::new(DEFAULT_API_URL);
    let (register_error, set_register_error) = create_signal(cx, None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(cx, false);
    let register_action = create_action(cx, move |registration: &Registration| {
        let registration = registration.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = api.register(&registration).await;
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(()) => {
                    set_register_error.update(|e| *e = None);
                    notify("Registration successful! Please log in.");
                    redirect(Page::Login);
                }
                Err(err) => {
                    let msg = match err {
                        api::Error::Fetch(js_err) => {
                            error!("Registration error: {js_err:?}");
                            "An error occurred during registration. Please try again.".to_owned()
                        }
                        api::Error::Api(err) => err,
                        other => format!("{other}"),
                    };
                    set_register_error.update(|e| *e = Some(msg));
                }
            }
        }
    });
    let disabled = Signal::derive(cx, move || wait_for_response.get());
    view! { cx,
        <RegistrationForm
            action=register_action
            error=register_error.into()
            disabled/>
    }
}
