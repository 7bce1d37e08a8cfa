use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString, IntoStaticStr};

use crate::error::{GpError, GpResult};

/// Portal user role. The string forms match the `user_type` values stored by
/// the server exactly, so any other value read from a response or from browser
/// storage fails to parse.
#[derive(
    Serialize, Deserialize, EnumString, IntoStaticStr, AsRefStr, PartialEq, Eq, Debug, Copy, Clone,
)]
pub enum UserType {
    #[serde(rename = "guest")]
    #[strum(serialize = "guest")]
    Guest,
    #[serde(rename = "employee")]
    #[strum(serialize = "employee")]
    Employee,
}

/// Login payload sent to `POST /login/`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload sent to `POST /register/`. Constructed through
/// [Registration::new_guest] since this client only ever self-registers guest
/// accounts.
#[derive(Serialize, Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub password: String,
    pub user_type: UserType,
}

impl Registration {
    /// Create a new guest registration from raw form input
    pub fn new_guest(
        full_name: String,
        email: String,
        primary_phone: String,
        secondary_phone: String,
        password: String,
    ) -> Self {
        Self {
            full_name,
            email,
            primary_phone,
            secondary_phone,
            password,
            user_type: UserType::Guest,
        }
    }

    /// Checks that every user supplied field contains at least one
    /// non-whitespace character. Must pass before the payload is submitted.
    /// # Errors
    /// This function will return an error naming the first empty field found
    pub fn validate(&self) -> GpResult<()> {
        let fields = [
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("primary_phone", &self.primary_phone),
            ("secondary_phone", &self.secondary_phone),
            ("password", &self.password),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(GpError::EmptyField(name));
            }
        }
        Ok(())
    }
}

/// Client held authentication state for the current browser tab. Created by a
/// successful login, read on every authenticated call and destroyed on logout.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_type: UserType,
}

/// User record embedded in a [LoginResponse]. Only the role is of interest to
/// this client so all other fields of the server's user serializer are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct LoginUser {
    pub user_type: Option<String>,
}

/// Raw body of a successful `POST /login/` response. Every field is optional
/// so that presence can be checked explicitly instead of surfacing a
/// deserialization error for a malformed but 2xx response.
#[derive(Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub access: Option<String>,
    pub refresh: Option<String>,
    pub user: Option<LoginUser>,
}

impl LoginResponse {
    /// Convert the raw response into a [Session], confirming that both tokens
    /// and a recognized role are present. No partial session is ever produced.
    /// # Errors
    /// This function will return an error if a required field is absent or the
    /// role is not a known [UserType]
    pub fn into_session(self) -> GpResult<Session> {
        let Some(access_token) = self.access else {
            return Err(GpError::MissingField("access"));
        };
        let Some(refresh_token) = self.refresh else {
            return Err(GpError::MissingField("refresh"));
        };
        let Some(user) = self.user else {
            return Err(GpError::MissingField("user"));
        };
        let Some(user_type) = user.user_type else {
            return Err(GpError::MissingField("user.user_type"));
        };
        let user_type = user_type
            .parse()
            .map_err(|_| GpError::InvalidUserType(user_type))?;
        Ok(Session {
            access_token,
            refresh_token,
            user_type,
        })
    }
}

/// Employee directory entry returned by `GET /employees/`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{LoginResponse, LoginUser, Registration, UserType};
    use crate::error::GpError;

    fn registration(
        full_name: &str,
        email: &str,
        primary_phone: &str,
        secondary_phone: &str,
        password: &str,
    ) -> Registration {
        Registration::new_guest(
            full_name.to_owned(),
            email.to_owned(),
            primary_phone.to_owned(),
            secondary_phone.to_owned(),
            password.to_owned(),
        )
    }

    fn login_response(
        access: Option<&str>,
        refresh: Option<&str>,
        user_type: Option<&str>,
    ) -> LoginResponse {
        LoginResponse {
            access: access.map(str::to_owned),
            refresh: refresh.map(str::to_owned),
            user: user_type.map(|user_type| LoginUser {
                user_type: Some(user_type.to_owned()),
            }),
        }
    }

    #[test]
    fn validate_should_succeed_when_all_fields_present() {
        let request = registration("Mr Test", "test@example.com", "111", "222", "Test1!");

        assert_eq!(request.validate(), Ok(()));
    }

    #[rstest]
    #[case::full_name("", "test@example.com", "111", "222", "Test1!", "full_name")]
    #[case::email("Mr Test", "", "111", "222", "Test1!", "email")]
    #[case::primary_phone("Mr Test", "test@example.com", "", "222", "Test1!", "primary_phone")]
    #[case::secondary_phone("Mr Test", "test@example.com", "111", "", "Test1!", "secondary_phone")]
    #[case::password("Mr Test", "test@example.com", "111", "222", "", "password")]
    #[case::whitespace_only("   ", "test@example.com", "111", "222", "Test1!", "full_name")]
    fn validate_should_fail_when_field_empty(
        #[case] full_name: &str,
        #[case] email: &str,
        #[case] primary_phone: &str,
        #[case] secondary_phone: &str,
        #[case] password: &str,
        #[case] expected_field: &'static str,
    ) {
        let request = registration(full_name, email, primary_phone, secondary_phone, password);

        assert_eq!(request.validate(), Err(GpError::EmptyField(expected_field)));
    }

    #[test]
    fn new_guest_should_always_set_guest_user_type() {
        let request = registration("Mr Test", "test@example.com", "111", "222", "Test1!");

        assert_eq!(request.user_type, UserType::Guest);
    }

    #[rstest]
    #[case::guest("guest", UserType::Guest)]
    #[case::employee("employee", UserType::Employee)]
    fn into_session_should_succeed_when_response_complete(
        #[case] role: &str,
        #[case] expected: UserType,
    ) {
        let response = login_response(Some("access-token"), Some("refresh-token"), Some(role));

        let session = response.into_session().expect("complete login response");

        assert_eq!(session.access_token, "access-token");
        assert_eq!(session.refresh_token, "refresh-token");
        assert_eq!(session.user_type, expected);
    }

    #[rstest]
    #[case::no_access(None, Some("refresh"), Some("guest"), "access")]
    #[case::no_refresh(Some("access"), None, Some("guest"), "refresh")]
    #[case::no_user(Some("access"), Some("refresh"), None, "user")]
    fn into_session_should_fail_when_field_missing(
        #[case] access: Option<&str>,
        #[case] refresh: Option<&str>,
        #[case] user_type: Option<&str>,
        #[case] expected_field: &'static str,
    ) {
        let response = login_response(access, refresh, user_type);

        assert_eq!(
            response.into_session(),
            Err(GpError::MissingField(expected_field))
        );
    }

    #[test]
    fn into_session_should_fail_when_user_type_missing() {
        let response = LoginResponse {
            access: Some("access".to_owned()),
            refresh: Some("refresh".to_owned()),
            user: Some(LoginUser { user_type: None }),
        };

        assert_eq!(
            response.into_session(),
            Err(GpError::MissingField("user.user_type"))
        );
    }

    #[test]
    fn into_session_should_fail_when_user_type_unknown() {
        let response = login_response(Some("access"), Some("refresh"), Some("admin"));

        assert_eq!(
            response.into_session(),
            Err(GpError::InvalidUserType("admin".to_owned()))
        );
    }

    #[test]
    fn login_response_should_deserialize_server_body() {
        let body = r#"{
            "refresh": "refresh-token",
            "access": "access-token",
            "user": {
                "id": 4,
                "email": "test@example.com",
                "full_name": "Mr Test",
                "user_type": "employee",
                "primary_phone": "111",
                "secondary_phone": "222"
            }
        }"#;

        let response: LoginResponse = serde_json::from_str(body).expect("valid login body");
        let session = response.into_session().expect("complete login response");

        assert_eq!(session.user_type, UserType::Employee);
    }
}
