//! Login and signup forms.
//!
//! A placeholder, not a security mechanism: nothing is stored, hashed or
//! checked against a directory. Login takes any non-empty email/password,
//! signup additionally wants a matching confirmation of at least
//! [`MIN_PASSWORD_LEN`] characters.
//!
//! Both screens share one state machine:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──ok──▶ Succeeded (navigate away)
//!   ▲                  │
//!   └──────err─────────┘ (toast)
//! ```
//!
//! While `Submitting`, [`AuthPhase::begin`] refuses, which is what keeps the
//! submit button disabled. The delay itself cannot be cancelled.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::config::{AppConfig, MIN_PASSWORD_LEN};
use crate::error::{AuthError, AuthResult};
use crate::models::{Route, UserProfile};
use crate::notice::{messages, Notice};

// =============================================================================
// Forms
// =============================================================================

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields present.
    pub fn validate(&self) -> AuthResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }
        Ok(())
    }
}

/// Signup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks, in order: blank name/email/password, confirmation mismatch,
    /// password length (in characters).
    pub fn validate(&self) -> AuthResult<()> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordsDoNotMatch);
        }
        let len = self.password.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(AuthError::too_short(len));
        }
        Ok(())
    }
}

// =============================================================================
// State machine
// =============================================================================

/// Where a login/signup form is in its submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl AuthPhase {
    /// Enter `Submitting`. Refused unless idle.
    pub fn begin(&self) -> AuthResult<AuthPhase> {
        match self {
            AuthPhase::Idle => Ok(AuthPhase::Submitting),
            AuthPhase::Submitting | AuthPhase::Succeeded => Err(AuthError::AlreadySubmitting),
        }
    }

    /// Phase after the attempt resolves.
    pub fn settle<T>(&self, outcome: &AuthResult<T>) -> AuthPhase {
        match (self, outcome) {
            (AuthPhase::Submitting, Ok(_)) => AuthPhase::Succeeded,
            (AuthPhase::Submitting, Err(_)) => AuthPhase::Idle,
            (other, _) => *other,
        }
    }

    /// Submit control should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, AuthPhase::Submitting)
    }
}

// =============================================================================
// Attempts
// =============================================================================

/// A successful login or signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    /// Identity to put in the session
    pub profile: UserProfile,
    /// Where to navigate
    pub redirect: Route,
    pub notice: Notice,
}

/// Simulated login: wait, then accept any non-empty pair.
pub async fn login<C: Clock>(clock: &C, config: &AppConfig, form: &LoginForm) -> AuthResult<AuthSuccess> {
    log::debug!("Login attempt for {:?}", form.email);
    clock.sleep(config.auth_delay).await;
    form.validate()?;

    let profile = UserProfile {
        email: form.email.clone(),
        ..UserProfile::demo()
    };
    log::info!("🔑 Signed in as {}", profile.email);

    Ok(AuthSuccess {
        profile,
        redirect: Route::Dashboard,
        notice: Notice::success(messages::LOGIN_OK),
    })
}

/// Simulated signup: validate immediately, then wait.
///
/// A refused form never waits.
pub async fn signup<C: Clock>(clock: &C, config: &AppConfig, form: &SignupForm) -> AuthResult<AuthSuccess> {
    form.validate()?;
    clock.sleep(config.auth_delay).await;

    let profile = UserProfile {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        company: String::new(),
        member_since: clock.now().format("%B %Y").to_string(),
    };
    log::info!("🆕 Account created for {}", profile.email);

    Ok(AuthSuccess {
        profile,
        redirect: Route::Dashboard,
        notice: Notice::success(messages::SIGNUP_OK),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantClock;
    use chrono::TimeZone;
    use futures::executor::block_on;
    use std::time::Duration;

    fn signup_form(password: &str, confirm: &str) -> SignupForm {
        SignupForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    /// Mirrors what the screens do: begin, attempt, settle, navigate on success.
    fn submit_login(
        phase: &mut AuthPhase,
        clock: &InstantClock,
        form: &LoginForm,
        navigations: &mut Vec<Route>,
    ) -> AuthResult<()> {
        *phase = phase.begin()?;
        let result = block_on(login(clock, &AppConfig::default(), form));
        *phase = phase.settle(&result);
        let success = result?;
        navigations.push(success.redirect);
        Ok(())
    }

    #[test]
    fn test_login_accepts_any_non_empty_pair() {
        let clock = InstantClock::new();
        let mut phase = AuthPhase::Idle;
        let mut navigations = Vec::new();

        let form = LoginForm::new("someone@anywhere", "x");
        submit_login(&mut phase, &clock, &form, &mut navigations).unwrap();

        assert_eq!(phase, AuthPhase::Succeeded);
        assert_eq!(navigations, vec![Route::Dashboard]);
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(1)]);
    }

    #[test]
    fn test_login_navigates_once() {
        let clock = InstantClock::new();
        let mut phase = AuthPhase::Idle;
        let mut navigations = Vec::new();
        let form = LoginForm::new("a@b.c", "pw");

        submit_login(&mut phase, &clock, &form, &mut navigations).unwrap();
        let again = submit_login(&mut phase, &clock, &form, &mut navigations);

        assert_eq!(again, Err(AuthError::AlreadySubmitting));
        assert_eq!(navigations.len(), 1);
    }

    #[test]
    fn test_login_empty_fails_after_delay() {
        let clock = InstantClock::new();
        let mut phase = AuthPhase::Idle;
        let mut navigations = Vec::new();

        let result = submit_login(&mut phase, &clock, &LoginForm::new("a@b.c", ""), &mut navigations);

        assert_eq!(result, Err(AuthError::EmptyCredentials));
        assert_eq!(phase, AuthPhase::Idle);
        assert!(navigations.is_empty());
        assert_eq!(clock.sleeps().len(), 1);
    }

    #[test]
    fn test_login_keeps_demo_profile_with_email() {
        let clock = InstantClock::new();
        let success = block_on(login(&clock, &AppConfig::default(), &LoginForm::new("me@x.io", "pw"))).unwrap();
        assert_eq!(success.profile.email, "me@x.io");
        assert_eq!(success.profile.name, "John Doe");
        assert_eq!(success.notice.message, "Login successful!");
    }

    #[test]
    fn test_signup_short_password() {
        let clock = InstantClock::new();
        let result = block_on(signup(&clock, &AppConfig::default(), &signup_form("abc12", "abc12")));

        assert_eq!(result, Err(AuthError::PasswordTooShort { len: 5, min: 6 }));
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn test_signup_mismatch() {
        let clock = InstantClock::new();
        let result = block_on(signup(&clock, &AppConfig::default(), &signup_form("secret1", "secret2")));
        assert_eq!(result, Err(AuthError::PasswordsDoNotMatch));
    }

    #[test]
    fn test_signup_mismatch_reported_before_length() {
        assert_eq!(signup_form("abc", "abcd").validate(), Err(AuthError::PasswordsDoNotMatch));
    }

    #[test]
    fn test_signup_length_counts_characters() {
        // six characters, more than six bytes
        assert!(signup_form("éééééé", "éééééé").validate().is_ok());
    }

    #[test]
    fn test_signup_requires_name_and_email() {
        let mut form = signup_form("secret1", "secret1");
        form.name = "  ".into();
        assert_eq!(form.validate(), Err(AuthError::EmptyCredentials));
    }

    #[test]
    fn test_signup_success_builds_profile() {
        let clock = InstantClock::frozen(chrono::Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap());
        let success = block_on(signup(&clock, &AppConfig::default(), &signup_form("secret1", "secret1"))).unwrap();

        assert_eq!(success.redirect, Route::Dashboard);
        assert_eq!(success.profile.name, "Ada");
        assert_eq!(success.profile.member_since, "October 2026");
        assert_eq!(success.notice.message, "Account created successfully!");
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(1)]);
    }

    #[test]
    fn test_phase_transitions() {
        assert_eq!(AuthPhase::Idle.begin(), Ok(AuthPhase::Submitting));
        assert_eq!(AuthPhase::Submitting.begin(), Err(AuthError::AlreadySubmitting));
        assert!(AuthPhase::Submitting.is_busy());
        assert!(!AuthPhase::Idle.is_busy());

        let failed: AuthResult<()> = Err(AuthError::EmptyCredentials);
        assert_eq!(AuthPhase::Submitting.settle(&failed), AuthPhase::Idle);
        assert_eq!(AuthPhase::Submitting.settle(&Ok(())), AuthPhase::Succeeded);
        assert_eq!(AuthPhase::Idle.settle(&Ok(())), AuthPhase::Idle);
    }
}
