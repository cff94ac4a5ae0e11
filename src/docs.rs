use utoipa::OpenApi;

use crate::model::{
    Employee, LeaveRequest, LeaveType, NewEmployee, NewLeaveRequest, NewLeaveType,
    NewNotification, NewRole, Notification, Role,
};

/// Component schemas for the five entities and their insert payloads, ready
/// for a host web layer to merge into its own OpenAPI document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management Data Model",
        version = "1.0.0",
        description = r#"
## Leave Management (LMS) Schema

Entity shapes for a leave-management application:

- **Role** and **Employee** (every employee belongs to one role, starts with 20 days of leave)
- **LeaveType** and **LeaveRequest** (requests reference an employee and a leave type)
- **Notification** (addressed to one employee)

Required fields reject empty values; `Employee.name` is capped at 100 characters and
`Employee.email` must be an email address.
"#,
    ),
    components(
        schemas(
            Role,
            NewRole,
            Employee,
            NewEmployee,
            LeaveType,
            NewLeaveType,
            LeaveRequest,
            NewLeaveRequest,
            Notification,
            NewNotification
        )
    ),
    tags(
        (name = "Employee", description = "Employees and their roles"),
        (name = "Leave", description = "Leave types and leave requests"),
        (name = "Notification", description = "Messages addressed to employees"),
    )
)]
pub struct SchemaDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::{RefOr, Schema};

    fn object(name: &str) -> utoipa::openapi::schema::Object {
        let doc = SchemaDoc::openapi();
        let components = doc.components.expect("components");
        match components.schemas.get(name) {
            Some(RefOr::T(Schema::Object(obj))) => obj.clone(),
            other => panic!("{name} is not an object schema: {other:?}"),
        }
    }

    #[test]
    fn every_entity_has_a_schema() {
        let doc = SchemaDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in ["Role", "Employee", "LeaveType", "LeaveRequest", "Notification"] {
            assert!(schemas.contains_key(name), "missing {name}");
            assert!(schemas.contains_key(&format!("New{name}")), "missing New{name}");
        }
    }

    #[test]
    fn employee_schema_carries_constraints() {
        let employee = object("Employee");

        for field in ["emp_id", "name", "email", "leave_balance", "role_id"] {
            assert!(employee.required.iter().any(|r| r == field), "{field} not required");
        }

        match employee.properties.get("name") {
            Some(RefOr::T(Schema::Object(name))) => assert_eq!(name.max_length, Some(100)),
            other => panic!("unexpected name schema: {other:?}"),
        }
    }
}
