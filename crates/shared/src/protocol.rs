use std::fmt;

use serde::{Deserialize, Serialize};

pub const SEND_OTP_PATH: &str = "/otp/send-otp";
pub const VERIFY_OTP_PATH: &str = "/otp/verify-otp";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendOtpResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub age: u32,
    pub password: String,
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("age", &self.age)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
    #[serde(rename = "userData")]
    pub user_data: UserData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
