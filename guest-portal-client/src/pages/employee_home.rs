use leptos::*;

use guest_portal_common::user::Session;

use crate::{
    api::{AuthorizedApi, DEFAULT_API_URL},
    components::request_card::RequestCard,
    pages::not_logged_in,
};

/// Employee dashboard showing every request assigned to the employee as an
/// editable card. Updates from a card trigger a refetch of the whole list.
#[component]
pub fn EmployeeHome(cx: Scope, session: Signal<Option<Session>>) -> impl IntoView {
    let requests = create_local_resource(
        cx,
        move || session.get(),
        move |session| async move {
            let Some(session) = session else {
                return Ok(None);
            };
            let api = AuthorizedApi::new(DEFAULT_API_URL, Some(session.clone()));
            match api.list_requests().await {
                Ok(requests) => Ok(Some((session, requests))),
                Err(error) => {
                    error!("Error loading employee requests: {error}");
                    Err("Failed to load employee requests.".to_owned())
                }
            }
        },
    );
    let on_updated = move || requests.refetch();
    view! { cx,
        <main class="container">
            <h2>"Assigned Requests"</h2>
            <div id="requests-container">
                {move || match requests.read(cx) {
                    None => view! { cx, <p>"Loading..."</p> }.into_view(cx),
                    Some(Ok(None)) => not_logged_in(cx),
                    Some(Ok(Some((_, requests)))) if requests.is_empty() => {
                        view! { cx, <p>"No requests are assigned to you."</p> }.into_view(cx)
                    }
                    Some(Ok(Some((session, requests)))) => {
                        requests
                            .into_iter()
                            .map(|request| {
                                let session = session.clone();
                                view! { cx,
                                    <RequestCard request=request session=session on_updated=on_updated/>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_view(cx)
                    }
                    Some(Err(message)) => {
                        view! { cx, <p class="text-danger">{message}</p> }.into_view(cx)
                    }
                }}
            </div>
        </main>
    }
}
