use leptos::*;

use guest_portal_common::user::{Session, UserType};

use crate::{
    api::{AuthorizedApi, DEFAULT_API_URL},
    pages::{redirect, Page},
    storage,
};

#[component]
pub fn NavBar(
    cx: Scope,
    session: Signal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
) -> impl IntoView {
    let logout_action = create_action(cx, move |_: &()| async move {
        // server side invalidation is best-effort; the local session always
        // gets cleared
        let api = AuthorizedApi::load(DEFAULT_API_URL);
        if let Err(error) = api.logout().await {
            warn!("Server logout failed. Clearing the local session anyway. {error}");
        }
        storage::clear_session();
        set_session.update(|s| *s = None);
        redirect(Page::Login);
    });
    view! { cx,
        <nav class="navbar navbar-expand-lg bg-body-tertiary" id="mainNavBar">
            <div class="container-fluid">
                <a class="navbar-brand" href="/">"Guest Portal"</a>
                <ul class="navbar-nav me-auto my-2 my-lg-0 navbar-nav-scroll">
                    {move || match session.get() {
                        Some(session) => {
                            let new_request = (session.user_type == UserType::Guest)
                                .then(|| {
                                    view! { cx,
                                        <li class="nav-item">
                                            <a class="nav-link" href=Page::AddRequest.path()>"New Request"</a>
                                        </li>
                                    }
                                });
                            view! { cx,
                                <li class="nav-item">
                                    <a class="nav-link" href=Page::home_for(session.user_type).path()>"Home"</a>
                                </li>
                                {new_request}
                                <li class="nav-item">
                                    <button
                                        id="logout-button"
                                        class="btn btn-link nav-link"
                                        on:click=move |_| logout_action.dispatch(())
                                    >
                                        "Logout"
                                    </button>
                                </li>
                            }
                                .into_view(cx)
                        }
                        None => {
                            view! { cx,
                                <li class="nav-item">
                                    <a class="nav-link" href=Page::Login.path()>"Login"</a>
                                </li>
                                <li class="nav-item">
                                    <a class="nav-link" href=Page::Register.path()>"Register"</a>
                                </li>
                            }
                                .into_view(cx)
                        }
                    }}
                </ul>
            </div>
        </nav>
    }
}
