mod api;
mod components;
mod pages;
mod storage;

use leptos::*;
use leptos_router::*;

use crate::{
    components::nav::NavBar,
    pages::{
        add_request::AddRequest, employee_home::EmployeeHome, guest_home::GuestHome, login::Login,
        register::Register, Page,
    },
};

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    let (session, set_session) = create_signal(cx, storage::load_session());
    view! {
        cx,
        <Router>
            <NavBar session=session.into() set_session=set_session/>
            <Routes>
                <Route
                    path="/"
                    view=move |cx| {
                        view! { cx, <Redirect path=Page::Login.path()/> }
                    }
                />
                <Route
                    path=Page::Login.path()
                    view=move |cx| {
                        view! { cx, <Login set_session=set_session/> }
                    }
                />
                <Route
                    path=Page::Register.path()
                    view=move |cx| {
                        view! { cx, <Register/> }
                    }
                />
                <Route
                    path=Page::GuestHome.path()
                    view=move |cx| {
                        view! { cx, <GuestHome session=session.into()/> }
                    }
                />
                <Route
                    path=Page::EmployeeHome.path()
                    view=move |cx| {
                        view! { cx, <EmployeeHome session=session.into()/> }
                    }
                />
                <Route
                    path=Page::AddRequest.path()
                    view=move |cx| {
                        view! { cx, <AddRequest session=session.into()/> }
                    }
                />
            </Routes>
        </Router>
    }
}
