use leptos::*;

use guest_portal_common::user::Session;

use crate::{
    api::{AuthorizedApi, DEFAULT_API_URL},
    components::request_form::RequestForm,
    pages::not_logged_in,
};

/// Request creation page. The employee directory backing the dropdown is only
/// fetched when a session is present.
#[component]
pub fn AddRequest(cx: Scope, session: Signal<Option<Session>>) -> impl IntoView {
    let employees = create_local_resource(
        cx,
        move || session.get(),
        move |session| async move {
            let Some(session) = session else {
                return Ok(None);
            };
            let api = AuthorizedApi::new(DEFAULT_API_URL, Some(session.clone()));
            match api.list_employees().await {
                Ok(employees) => Ok(Some((session, employees))),
                Err(error) => {
                    error!("Error fetching employees: {error}");
                    Err("Failed to load employee list.".to_owned())
                }
            }
        },
    );
    view! { cx,
        <main class="container">
            <h2>"New Request"</h2>
            {move || match employees.read(cx) {
                None => view! { cx, <p>"Loading..."</p> }.into_view(cx),
                Some(Ok(None)) => not_logged_in(cx),
                Some(Ok(Some((session, employees)))) => {
                    view! { cx, <RequestForm employees=employees session=session/> }.into_view(cx)
                }
                Some(Err(message)) => view! { cx, <p class="text-danger">{message}</p> }.into_view(cx),
            }}
        </main>
    }
}
