use leptos::*;
use strum::IntoEnumIterator;

use guest_portal_common::{
    request::{Request, RequestStatus, RequestUpdate},
    user::Session,
};

use crate::api::{AuthorizedApi, DEFAULT_API_URL};

/// Editable card for one assigned request. The status dropdown patches the
/// status on change; the update button patches status and notes together.
#[component]
pub fn RequestCard<F>(cx: Scope, request: Request, session: Session, on_updated: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Copy,
{
    let request_id = request.id;
    let initial_status = request.status;
    let (status, set_status) = create_signal(cx, request.status);
    let (notes, set_notes) = create_signal(cx, request.notes.clone().unwrap_or_default());
    let (update_error, set_update_error) = create_signal(cx, None::<String>);
    let update_action = create_action(cx, move |update: &RequestUpdate| {
        let update = update.clone();
        let session = session.clone();
        async move {
            let api = AuthorizedApi::new(DEFAULT_API_URL, Some(session));
            match api.update_request(request_id, &update).await {
                Ok(()) => {
                    set_update_error.update(|e| *e = None);
                    on_updated();
                }
                Err(error) => {
                    error!("Error updating request {request_id}: {error}");
                    set_update_error.update(|e| *e = Some("Failed to update the request.".to_owned()));
                }
            }
        }
    });
    let pending = update_action.pending();

    let description = request.description.clone().unwrap_or_default();
    let initial_notes = request.notes.clone().unwrap_or_default();
    view! { cx,
        <div class="request-card card my-2 p-2">
            {move || {
                update_error
                    .get()
                    .map(|err| {
                        view! { cx, <p class="text-danger">{err}</p> }
                    })
            }}
            <p><strong>"Type: "</strong>{request.request_type.label()}</p>
            <p>
                <strong>"Status: "</strong>
                <select
                    class="request-status form-select"
                    prop:disabled=move || pending.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        match value.parse::<RequestStatus>() {
                            Ok(new_status) => {
                                set_status.update(|s| *s = new_status);
                                update_action.dispatch(RequestUpdate::status_only(new_status));
                            }
                            Err(_) => error!("Unknown request status `{value}`"),
                        }
                    }
                >
                    {RequestStatus::iter()
                        .map(|option| {
                            let value: &'static str = option.into();
                            view! { cx,
                                <option value=value selected={option == initial_status}>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </p>
            <p><strong>"Description: "</strong>{description}</p>
            <textarea
                class="form-control"
                placeholder="Add notes"
                prop:disabled=move || pending.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_notes.update(|n| *n = val);
                }
            >
                {initial_notes}
            </textarea>
            <button
                class="update-request btn btn-primary mt-2"
                prop:disabled=move || pending.get()
                on:click=move |_| {
                    update_action.dispatch(RequestUpdate::with_notes(status.get(), notes.get()))
                }
            >
                "Update"
            </button>
        </div>
    }
}
