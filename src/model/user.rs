use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the API's session endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}
