/// Input for registering a user.
///
/// Required fields are optional here so that a missing value is reported as a
/// validation error rather than rejected by the transport.
#[derive(Debug, Clone, Default)]
pub struct CreateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}
