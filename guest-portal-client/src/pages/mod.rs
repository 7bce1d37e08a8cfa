pub mod add_request;
pub mod employee_home;
pub mod guest_home;
pub mod login;
pub mod register;

use leptos::*;
use leptos_router::*;

use guest_portal_common::user::UserType;

/// Explicit route table for every page this client can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    GuestHome,
    EmployeeHome,
    AddRequest,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login/",
            Self::Register => "/register/",
            Self::GuestHome => "/guest/home/",
            Self::EmployeeHome => "/employee/home/",
            Self::AddRequest => "/requests/add/",
        }
    }

    /// Landing page for a freshly authenticated user. Total over [UserType]
    /// since unknown roles are already rejected while parsing the login
    /// response.
    pub const fn home_for(user_type: UserType) -> Self {
        match user_type {
            UserType::Guest => Self::GuestHome,
            UserType::Employee => Self::EmployeeHome,
        }
    }
}

/// Send the browser to `page`, leaving the current page behind
pub(crate) fn redirect(page: Page) {
    if let Err(error) = window().location().set_href(page.path()) {
        error!("Could not redirect to {}. {error:?}", page.path());
    }
}

/// Blocking user notification for flow changing events
pub(crate) fn notify(message: &str) {
    if window().alert_with_message(message).is_err() {
        log!("{message}");
    }
}

/// Shared view for authenticated pages opened without a stored session
pub(crate) fn not_logged_in(cx: Scope) -> View {
    view! { cx,
        <p>"You are not logged in."</p>
        <A href=Page::Login.path()>"Login now."</A>
    }
    .into_view(cx)
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use guest_portal_common::user::UserType;

    use super::Page;

    #[rstest]
    #[case::guest(UserType::Guest, "/guest/home/")]
    #[case::employee(UserType::Employee, "/employee/home/")]
    fn home_for_should_map_role_to_landing_page(
        #[case] user_type: UserType,
        #[case] expected_path: &str,
    ) {
        assert_eq!(Page::home_for(user_type).path(), expected_path);
    }

    #[rstest]
    #[case(Page::Login, "/login/")]
    #[case(Page::Register, "/register/")]
    #[case(Page::GuestHome, "/guest/home/")]
    #[case(Page::EmployeeHome, "/employee/home/")]
    #[case(Page::AddRequest, "/requests/add/")]
    fn path_should_match_server_routes(#[case] page: Page, #[case] expected: &str) {
        assert_eq!(page.path(), expected);
    }
}
