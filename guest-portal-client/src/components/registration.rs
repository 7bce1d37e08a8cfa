use leptos::*;

use guest_portal_common::user::Registration;

#[component]
fn TextField(
    cx: Scope,
    label: &'static str,
    id: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    set_value: WriteSignal<String>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! { cx,
        <div class="form-group">
        <label for=id>{label}</label>
        <input
            class="form-control"
            type=input_type
            id=id
            name=id
            required={true}
            prop:disabled=move || disabled.get()
            on:input=move |ev| {
                let val = event_target_value(&ev);
                set_value.update(|v| *v = val);
            }
        />
        </div>
    }
}

/// Guest self-registration form. All six payload fields are required; the
/// `user_type` is fixed to guest by [Registration::new_guest] so the form only
/// collects the remaining five.
#[component]
pub fn RegistrationForm(
    cx: Scope,
    action: Action<Registration, ()>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let (full_name, set_full_name) = create_signal(cx, String::new());
    let (email, set_email) = create_signal(cx, String::new());
    let (primary_phone, set_primary_phone) = create_signal(cx, String::new());
    let (secondary_phone, set_secondary_phone) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());

    let dispatch_action = move || {
        action.dispatch(Registration::new_guest(
            full_name.get(),
            email.get(),
            primary_phone.get(),
            secondary_phone.get(),
            password.get(),
        ))
    };

    view! { cx,
        <main>
            <h3>"Register for the Guest Portal"</h3>
            <form id="register-form" on:submit=|ev| ev.prevent_default()>
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! { cx, <p class="text-danger">{err}</p> }
                        })
                }}
                <TextField label="Full Name" id="full_name" set_value=set_full_name disabled/>
                <TextField label="Email" id="email" input_type="email" set_value=set_email disabled/>
                <TextField label="Primary Phone" id="primary_phone" set_value=set_primary_phone disabled/>
                <TextField label="Secondary Phone" id="secondary_phone" set_value=set_secondary_phone disabled/>
                <TextField label="Password" id="password" input_type="password" set_value=set_password disabled/>
                <button
                    class="btn btn-primary"
                    prop:disabled=move || disabled.get()
                    on:click=move |_| dispatch_action()
                >
                    "Register"
                </button>
            </form>
        </main>
    }
}
