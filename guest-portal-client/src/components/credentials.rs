use leptos::*;

#[component]
pub fn CredentialsForm(
    cx: Scope,
    action: Action<(String, String), ()>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let (email, set_email) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());

    let dispatch_action = move || action.dispatch((email.get(), password.get()));

    let button_is_disabled = Signal::derive(cx, move || {
        disabled.get() || password.get().is_empty() || email.get().is_empty()
    });

    view! { cx,
        <main>
            <h3>"Login to the Guest Portal"</h3>
            <form id="login-form" on:submit=|ev| ev.prevent_default()>
                {move || {
                    error
                        .get()
                        .map(|err| {
                            view! { cx, <p class="text-danger">{err}</p> }
                        })
                }}
                <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    class="form-control"
                    type="email"
                    id="email"
                    name="email"
                    required={true}
                    prop:disabled=move || disabled.get()
                    on:keyup=move |ev: ev::KeyboardEvent| {
                        let val = event_target_value(&ev);
                        set_email.update(|v| *v = val);
                    }
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        set_email.update(|v| *v = val);
                    }
                />
                </div>
                <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    class="form-control"
                    type="password"
                    id="password"
                    name="password"
                    required={true}
                    prop:disabled=move || disabled.get()
                    on:keyup=move |ev: ev::KeyboardEvent| {
                        match &*ev.key() {
                            "Enter" => dispatch_action(),
                            _ => {
                                let val = event_target_value(&ev);
                                set_password.update(|p| *p = val);
                            }
                        }
                    }
                    on:change=move |ev| {
                        let val = event_target_value(&ev);
                        set_password.update(|p| *p = val);
                    }
                />
                </div>
                <button
                    class="btn btn-primary"
                    prop:disabled=move || button_is_disabled.get()
                    on:click=move |_| dispatch_action()
                >
                    "Login"
                </button>
            </form>
        </main>
    }
}
