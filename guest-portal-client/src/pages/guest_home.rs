use leptos::*;

use guest_portal_common::{request::Request, user::Session};

use crate::{
    api::{AuthorizedApi, DEFAULT_API_URL},
    pages::not_logged_in,
};

/// Guest landing page listing the guest's own service requests. The list is
/// only fetched when a session is present.
#[component]
pub fn GuestHome(cx: Scope, session: Signal<Option<Session>>) -> impl IntoView {
    let requests = create_local_resource(
        cx,
        move || session.get(),
        move |session| async move {
            let Some(session) = session else {
                return Ok(None);
            };
            let api = AuthorizedApi::new(DEFAULT_API_URL, Some(session));
            match api.list_requests().await {
                Ok(requests) => Ok(Some(requests)),
                Err(error) => {
                    error!("Error fetching guest requests: {error}");
                    Err("Failed to load requests. Please try again later.".to_owned())
                }
            }
        },
    );
    view! { cx,
        <main class="container">
            <h2>"My Requests"</h2>
            {move || match requests.read(cx) {
                None => view! { cx, <p>"Loading..."</p> }.into_view(cx),
                Some(Ok(None)) => not_logged_in(cx),
                Some(Ok(Some(requests))) if requests.is_empty() => {
                    view! { cx,
                        <p id="no-requests-message">"You have no requests yet."</p>
                    }
                        .into_view(cx)
                }
                Some(Ok(Some(requests))) => {
                    view! { cx,
                        <ul class="list-group" id="guest-requests">
                            {requests.into_iter().map(|r| request_item(cx, r)).collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_view(cx)
                }
                Some(Err(message)) => view! { cx, <p class="text-danger">{message}</p> }.into_view(cx),
            }}
        </main>
    }
}

fn request_item(cx: Scope, request: Request) -> impl IntoView {
    let assigned_employee = request.employee_display().to_owned();
    let description = request.description.clone().unwrap_or_default();
    view! { cx,
        <li class="list-group-item">
            <strong>"Type: "</strong>{request.request_type.label()}<br/>
            <strong>"Status: "</strong>{request.status.label()}<br/>
            <strong>"Description: "</strong>{description}<br/>
            <strong>"Assigned Employee: "</strong>{assigned_employee}
        </li>
    }
}
