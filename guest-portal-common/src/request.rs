use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// All states a service request moves through. String forms match the server's
/// status choices, including the space in `on process`.
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    AsRefStr,
    PartialEq,
    Eq,
    Debug,
    Copy,
    Clone,
)]
pub enum RequestStatus {
    #[serde(rename = "open")]
    #[strum(serialize = "open")]
    Open,
    #[serde(rename = "on process")]
    #[strum(serialize = "on process")]
    OnProcess,
    #[serde(rename = "closed")]
    #[strum(serialize = "closed")]
    Closed,
}

impl RequestStatus {
    /// Human readable form shown in list and card views
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::OnProcess => "On Process",
            Self::Closed => "Closed",
        }
    }
}

/// Category of a service request as accepted by the server
#[derive(
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    AsRefStr,
    PartialEq,
    Eq,
    Debug,
    Copy,
    Clone,
)]
pub enum RequestType {
    #[serde(rename = "new")]
    #[strum(serialize = "new")]
    New,
    #[serde(rename = "complain")]
    #[strum(serialize = "complain")]
    Complain,
}

impl RequestType {
    ///
    pub const fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Complain => "Complain",
        }
    }
}

/// Service request entity as returned by `GET /requests/list/`. The server
/// owns these records; the client only holds ephemeral copies for rendering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub id: i64,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub employee: Option<i64>,
    pub employee_name: Option<String>,
}

impl Request {
    /// Name of the assigned employee or a placeholder when no employee is
    /// linked or the server sent no name
    pub fn employee_display(&self) -> &str {
        if self.employee.is_none() {
            return "N/A";
        }
        self.employee_name.as_deref().unwrap_or("N/A")
    }
}

/// Payload for `POST /requests/create/`
#[derive(Serialize, Debug, Clone)]
pub struct NewRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub description: String,
    pub employee: i64,
}

/// Partial payload for `PATCH /requests/{id}/edit/`. Fields left as [None]
/// are omitted from the serialized body so the server only touches what the
/// user changed.
#[derive(Serialize, Debug, Clone)]
pub struct RequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RequestUpdate {
    /// Update triggered by the status dropdown alone
    pub const fn status_only(status: RequestStatus) -> Self {
        Self {
            status: Some(status),
            notes: None,
        }
    }

    /// Update triggered by the explicit update button, carrying the notes text
    pub fn with_notes(status: RequestStatus, notes: String) -> Self {
        Self {
            status: Some(status),
            notes: Some(notes),
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::rstest;

    use super::{Request, RequestStatus, RequestType, RequestUpdate};

    fn request(employee: Option<i64>, employee_name: Option<&str>) -> Request {
        Request {
            id: 1,
            request_type: RequestType::New,
            status: RequestStatus::Open,
            description: Some("Towels please".to_owned()),
            notes: None,
            employee,
            employee_name: employee_name.map(str::to_owned),
        }
    }

    #[test]
    fn request_should_deserialize_server_body() {
        let body = r#"[{
            "id": 7,
            "type": "complain",
            "status": "on process",
            "description": "Noisy neighbors",
            "notes": null,
            "employee": 2,
            "guest": 4,
            "employee_name": "Front Desk"
        }]"#;

        let requests: Vec<Request> = serde_json::from_str(body).expect("valid request list");

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].request_type, RequestType::Complain);
        assert_eq!(requests[0].status, RequestStatus::OnProcess);
        assert_eq!(requests[0].employee_display(), "Front Desk");
    }

    #[rstest]
    #[case::unassigned(None, None, "N/A")]
    #[case::assigned_without_name(Some(2), None, "N/A")]
    #[case::assigned(Some(2), Some("Front Desk"), "Front Desk")]
    fn employee_display_should_fall_back_to_placeholder(
        #[case] employee: Option<i64>,
        #[case] employee_name: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(request(employee, employee_name).employee_display(), expected);
    }

    #[test]
    fn status_only_update_should_omit_notes_field() {
        let update = RequestUpdate::status_only(RequestStatus::Closed);

        let body = serde_json::to_string(&update).expect("serializable update");

        assert_eq!(body, r#"{"status":"closed"}"#);
    }

    #[test]
    fn update_with_notes_should_serialize_both_fields() {
        let update = RequestUpdate::with_notes(RequestStatus::OnProcess, "Called guest".to_owned());

        let body = serde_json::to_string(&update).expect("serializable update");

        assert_eq!(body, r#"{"status":"on process","notes":"Called guest"}"#);
    }

    #[rstest]
    #[case(RequestStatus::Open, "open")]
    #[case(RequestStatus::OnProcess, "on process")]
    #[case(RequestStatus::Closed, "closed")]
    fn request_status_should_round_trip_wire_form(
        #[case] status: RequestStatus,
        #[case] wire: &str,
    ) {
        assert_eq!(status.as_ref(), wire);
        assert_eq!(wire.parse::<RequestStatus>(), Ok(status));
    }
}
