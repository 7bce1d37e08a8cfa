use leptos::*;

use guest_portal_common::user::{Credentials, Session};

use crate::{
    api::{self, UnauthorizedApi, DEFAULT_API_URL},
    components::credentials::CredentialsForm,
    pages::{redirect, Page},
    storage,
};

#[component]
pub fn Login(cx: Scope, set_session: WriteSignal<Option<Session>>) -> impl IntoView {
    let api = UnauthorizedApi::new(DEFAULT_API_URL);
    let (login_error, set_login_error) = create_signal(cx, None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(cx, false);
    let login_action = create_action(cx, move |(email, password): &(String, String)| {
        let credentials = Credentials {
            email: email.clone(),
            password: password.clone(),
        };
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = api.login(&credentials).await;
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(session) => {
                    if let Err(error) = storage::save_session(&session) {
                        warn!("Could not persist the session: {error}");
                    }
                    let home = Page::home_for(session.user_type);
                    set_login_error.update(|e| *e = None);
                    set_session.update(|s| *s = Some(session));
                    redirect(home);
                }
                Err(err) => {
                    let msg = match err {
                        api::Error::Fetch(js_err) => {
                            format!("{js_err:?}")
                        }
                        api::Error::Api(err) => err,
                        _ => format!("{}", err),
                    };
                    error!("Unable to login with {}: {msg}", credentials.email);
                    set_login_error.update(|e| *e = Some(msg));
                }
            }
        }
    });
    let disabled = Signal::derive(cx, move || wait_for_response.get());
    view! { cx,
        <CredentialsForm
            action=login_action
            error=login_error.into()
            disabled/>
    }
}
