//! Three-step sign-up: details → emailed one-time code → password.
//!
//! Step 1 asks the API to email a code, step 2 only checks the code's length,
//! and step 3 sends the code together with the registration payload. A failed
//! request leaves the flow on the same step with every field intact.

use std::fmt;

use shared::{
    error::FieldErrors,
    protocol::{UserData, VerifyOtpRequest},
};
use tracing::{error, info, warn};

use crate::{
    auth_client::AuthApi,
    error::RegistrationError,
    token_store::TokenStore,
    validation::{parse_age, validate_details, validate_otp, validate_passwords},
};

const OTP_SENT_NOTICE: &str = "OTP sent successfully to your email";
const OTP_RESENT_NOTICE: &str = "OTP resent successfully to your email";
const REGISTERED_NOTICE: &str = "Registration successful!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RegistrationStep {
    #[default]
    Details = 1,
    VerifyOtp = 2,
    SetPassword = 3,
}

impl RegistrationStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Details => Some(Self::VerifyOtp),
            Self::VerifyOtp => Some(Self::SetPassword),
            Self::SetPassword => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::Details => None,
            Self::VerifyOtp => Some(Self::Details),
            Self::SetPassword => Some(Self::VerifyOtp),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Step(RegistrationStep),
    /// Back from the first step leaves the flow.
    Exited,
}

/// Step position only; validation gates live in [`RegistrationFlow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistrationWizard {
    step: RegistrationStep,
}

impl RegistrationWizard {
    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    fn advance(&mut self) -> RegistrationStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    pub fn back(&mut self) -> BackOutcome {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                BackOutcome::Step(previous)
            }
            None => BackOutcome::Exited,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    FullName,
    Email,
    Phone,
    Age,
    Otp,
    Password,
    ConfirmPassword,
}

impl RegistrationField {
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Age => "age",
            Self::Otp => "otp",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub otp: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::FullName => &self.full_name,
            RegistrationField::Email => &self.email,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Age => &self.age,
            RegistrationField::Otp => &self.otp,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::FullName => &mut self.full_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Age => &mut self.age,
            RegistrationField::Otp => &mut self.otp,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn user_data(&self) -> UserData {
        UserData {
            name: self.full_name.clone(),
            email: self.email.clone(),
            mobile: self.phone.clone(),
            age: parse_age(&self.age).unwrap_or_default(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for RegistrationDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationDraft")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("age", &self.age)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced {
        step: RegistrationStep,
        notice: Option<String>,
    },
    Completed {
        message: String,
        token_stored: bool,
    },
}

pub struct RegistrationFlow<A, S> {
    api: A,
    tokens: S,
    wizard: RegistrationWizard,
    draft: RegistrationDraft,
    errors: FieldErrors,
    finished: bool,
}

impl<A: AuthApi, S: TokenStore> RegistrationFlow<A, S> {
    pub fn new(api: A, tokens: S) -> Self {
        Self {
            api,
            tokens,
            wizard: RegistrationWizard::default(),
            draft: RegistrationDraft::default(),
            errors: FieldErrors::new(),
            finished: false,
        }
    }

    pub fn step(&self) -> RegistrationStep {
        self.wizard.step()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn token_store(&self) -> &S {
        &self.tokens
    }

    /// Edits one field and clears any pending error for it.
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        *self.draft.slot_mut(field) = value.into();
        self.errors.remove(field.key());
    }

    /// Validates the current step and, when it passes, performs the step's
    /// request (if any) and moves forward.
    pub async fn advance(&mut self) -> Result<StepOutcome, RegistrationError> {
        if self.finished {
            return Err(RegistrationError::Finished);
        }

        match self.wizard.step() {
            RegistrationStep::Details => {
                self.check(validate_details(
                    &self.draft.full_name,
                    &self.draft.email,
                    &self.draft.phone,
                    &self.draft.age,
                ))?;
                let response = self.api.send_otp(&self.draft.email).await?;
                let step = self.wizard.advance();
                info!(step = step.number(), "otp sent, awaiting code");
                Ok(StepOutcome::Advanced {
                    step,
                    notice: Some(
                        non_empty(response.message).unwrap_or_else(|| OTP_SENT_NOTICE.into()),
                    ),
                })
            }
            RegistrationStep::VerifyOtp => {
                self.check(validate_otp(&self.draft.otp))?;
                let step = self.wizard.advance();
                info!(step = step.number(), "otp captured, awaiting password");
                Ok(StepOutcome::Advanced { step, notice: None })
            }
            RegistrationStep::SetPassword => {
                self.check(validate_passwords(
                    &self.draft.password,
                    &self.draft.confirm_password,
                ))?;
                self.submit().await
            }
        }
    }

    /// Sends another code to the email the first one went to. Only offered
    /// while the code is being entered; concurrent calls are not coalesced.
    pub async fn resend_otp(&self) -> Result<String, RegistrationError> {
        if self.finished {
            return Err(RegistrationError::Finished);
        }
        let step = self.wizard.step();
        if step != RegistrationStep::VerifyOtp {
            return Err(RegistrationError::ResendUnavailable { step });
        }
        let response = self.api.send_otp(&self.draft.email).await?;
        info!("otp resent");
        Ok(non_empty(response.message).unwrap_or_else(|| OTP_RESENT_NOTICE.into()))
    }

    /// Goes back one step. Leaving from the first step discards the draft.
    pub fn back(&mut self) -> BackOutcome {
        let outcome = self.wizard.back();
        if outcome == BackOutcome::Exited {
            self.draft = RegistrationDraft::default();
            self.errors = FieldErrors::new();
            info!("registration abandoned");
        }
        outcome
    }

    fn check(&mut self, errors: FieldErrors) -> Result<(), RegistrationError> {
        self.errors = errors.clone();
        errors.into_result().map_err(|errors| {
            warn!(
                step = self.wizard.step().number(),
                fields = errors.len(),
                "registration step failed validation"
            );
            RegistrationError::Validation(errors)
        })
    }

    async fn submit(&mut self) -> Result<StepOutcome, RegistrationError> {
        let request = VerifyOtpRequest {
            email: self.draft.email.clone(),
            otp: self.draft.otp.clone(),
            user_data: self.draft.user_data(),
        };
        let response = self.api.verify_otp_and_register(&request).await?;

        let token = response.token.as_deref().filter(|token| !token.is_empty());
        let token_stored = match token {
            Some(token) => match self.tokens.store(token).await {
                Ok(()) => true,
                Err(err) => {
                    error!(error = %err, "failed to persist auth token");
                    false
                }
            },
            None => false,
        };

        self.finished = true;
        self.draft = RegistrationDraft::default();
        self.errors = FieldErrors::new();
        info!(token_stored, "registration complete");

        Ok(StepOutcome::Completed {
            message: non_empty(response.message).unwrap_or_else(|| REGISTERED_NOTICE.into()),
            token_stored,
        })
    }
}

/// Blank server text counts as absent.
fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|text| !text.is_empty())
}

#[cfg(test)]
#[path = "tests/registration_tests.rs"]
mod tests;
