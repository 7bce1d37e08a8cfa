use leptos::*;
use strum::IntoEnumIterator;

use guest_portal_common::{
    request::{NewRequest, RequestType},
    user::{Employee, Session},
};

use crate::{
    api::{self, AuthorizedApi, DEFAULT_API_URL},
    pages::{notify, redirect, Page},
};

/// Form for creating a new service request, addressed to one employee picked
/// from the directory dropdown.
#[component]
pub fn RequestForm(cx: Scope, employees: Vec<Employee>, session: Session) -> impl IntoView {
    let (request_type, set_request_type) = create_signal(cx, RequestType::New);
    let (description, set_description) = create_signal(cx, String::new());
    let (employee, set_employee) = create_signal(cx, None::<i64>);
    let (form_error, set_form_error) = create_signal(cx, None::<String>);
    let submit_action = create_action(cx, move |new_request: &NewRequest| {
        let new_request = new_request.clone();
        let session = session.clone();
        async move {
            let api = AuthorizedApi::new(DEFAULT_API_URL, Some(session));
            match api.create_request(&new_request).await {
                Ok(()) => {
                    set_form_error.update(|e| *e = None);
                    notify("Request created successfully!");
                    redirect(Page::GuestHome);
                }
                Err(err) => {
                    let msg = match err {
                        api::Error::Api(err) => err,
                        other => {
                            error!("Failed to create request: {other}");
                            "Failed to create request.".to_owned()
                        }
                    };
                    set_form_error.update(|e| *e = Some(msg));
                }
            }
        }
    });
    let pending = submit_action.pending();

    let dispatch_action = move || {
        let Some(employee) = employee.get() else {
            set_form_error.update(|e| *e = Some("Please select an employee.".to_owned()));
            return;
        };
        submit_action.dispatch(NewRequest {
            request_type: request_type.get(),
            description: description.get(),
            employee,
        });
    };

    view! { cx,
        <form id="add-request-form" on:submit=|ev| ev.prevent_default()>
            {move || {
                form_error
                    .get()
                    .map(|err| {
                        view! { cx, <p class="text-danger">{err}</p> }
                    })
            }}
            <div class="form-group">
            <label for="type">"Type"</label>
            <select
                class="form-select"
                id="type"
                name="type"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    match value.parse::<RequestType>() {
                        Ok(new_type) => set_request_type.update(|t| *t = new_type),
                        Err(_) => error!("Unknown request type `{value}`"),
                    }
                }
            >
                {RequestType::iter()
                    .map(|option| {
                        let value: &'static str = option.into();
                        view! { cx,
                            <option value=value selected={option == RequestType::New}>
                                {option.label()}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            </div>
            <div class="form-group">
            <label for="description">"Description"</label>
            <textarea
                class="form-control"
                id="description"
                name="description"
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_description.update(|d| *d = val);
                }
            ></textarea>
            </div>
            <div class="form-group">
            <label for="employee-dropdown">"Employee"</label>
            <select
                class="form-select"
                id="employee-dropdown"
                name="employee"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_employee.update(|e| *e = value.parse().ok());
                }
            >
                <option value="">"Select Employee"</option>
                {employees
                    .into_iter()
                    .map(|employee| {
                        view! { cx,
                            <option value=employee.id.to_string()>{employee.full_name}</option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            </div>
            <button
                class="btn btn-primary mt-2"
                prop:disabled=move || pending.get()
                on:click=move |_| dispatch_action()
            >
                "Submit Request"
            </button>
        </form>
    }
}
