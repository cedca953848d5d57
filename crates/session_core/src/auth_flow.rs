//! Step machine behind the sign-in / sign-up screen.
//!
//! Credentials are collected but never checked: the only way into a session
//! is a demo account, which yields a [`SessionEvent::Login`].

use shared::domain::Role;
use tracing::info;

use crate::state::SessionEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStep {
    SignIn,
    SignUp,
    DoctorVerification,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub institution: String,
    pub credentials: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    VerificationRequired,
    StudentAccepted,
    RoleMissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    NotAvailable,
}

/// Summary of a submitted doctor verification form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub name: String,
    pub institution: String,
    pub has_license_number: bool,
    pub has_bio: bool,
}

/// Badge and explanation shown once a role is picked on the sign-up form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleNotice {
    pub badge: &'static str,
    pub detail: &'static str,
}

/// Display names used by the demo login buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoAccounts {
    pub doctor_name: String,
    pub student_name: String,
}

impl Default for DemoAccounts {
    fn default() -> Self {
        Self {
            doctor_name: "Dr. Sarah Johnson".to_string(),
            student_name: "Alex Thompson".to_string(),
        }
    }
}

impl DemoAccounts {
    pub fn name_for(&self, role: Role) -> &str {
        match role {
            Role::Doctor => &self.doctor_name,
            Role::Student => &self.student_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFlow {
    step: AuthStep,
    selected_role: Option<Role>,
    pub form: AuthForm,
}

impl Default for AuthFlow {
    fn default() -> Self {
        Self {
            step: AuthStep::SignIn,
            selected_role: None,
            form: AuthForm::default(),
        }
    }
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.selected_role
    }

    pub fn select_role(&mut self, role: Role) {
        self.selected_role = Some(role);
    }

    /// Switches between sign-in and sign-up; verification is left as is.
    pub fn toggle_mode(&mut self) {
        self.step = match self.step {
            AuthStep::SignIn => AuthStep::SignUp,
            AuthStep::SignUp => AuthStep::SignIn,
            AuthStep::DoctorVerification => AuthStep::DoctorVerification,
        };
    }

    pub fn role_notice(&self) -> Option<RoleNotice> {
        self.selected_role.map(|role| match role {
            Role::Doctor => RoleNotice {
                badge: "Doctor Verification Required",
                detail: "Doctors require manual verification to maintain platform quality",
            },
            Role::Student => RoleNotice {
                badge: "Immediate Access",
                detail: "Students can access the platform immediately after signup",
            },
        })
    }

    pub fn sign_up(&mut self) -> SignUpOutcome {
        match self.selected_role {
            Some(Role::Doctor) => {
                info!(name = %self.form.name, "doctor sign-up routed to verification");
                self.step = AuthStep::DoctorVerification;
                SignUpOutcome::VerificationRequired
            }
            Some(Role::Student) => {
                info!(name = %self.form.name, "student sign-up accepted");
                SignUpOutcome::StudentAccepted
            }
            None => SignUpOutcome::RoleMissing,
        }
    }

    pub fn sign_in(&self) -> SignInOutcome {
        info!(email = %self.form.email, "sign-in requested; credential login is not available");
        SignInOutcome::NotAvailable
    }

    pub fn submit_verification(&self) -> VerificationRequest {
        let request = VerificationRequest {
            name: self.form.name.trim().to_string(),
            institution: self.form.institution.trim().to_string(),
            has_license_number: !self.form.credentials.trim().is_empty(),
            has_bio: !self.form.bio.trim().is_empty(),
        };
        info!(
            institution = %request.institution,
            has_license_number = request.has_license_number,
            "doctor verification submitted"
        );
        request
    }

    pub fn demo_login(&self, role: Role, accounts: &DemoAccounts) -> SessionEvent {
        SessionEvent::login(role, accounts.name_for(role))
    }

    /// Back to a blank sign-in form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_sign_in_and_sign_up() {
        let mut flow = AuthFlow::new();
        assert_eq!(flow.step(), AuthStep::SignIn);
        flow.toggle_mode();
        assert_eq!(flow.step(), AuthStep::SignUp);
        flow.toggle_mode();
        assert_eq!(flow.step(), AuthStep::SignIn);
    }

    #[test]
    fn doctor_sign_up_requires_verification() {
        let mut flow = AuthFlow::new();
        flow.toggle_mode();
        flow.select_role(Role::Doctor);
        assert_eq!(
            flow.role_notice().map(|notice| notice.badge),
            Some("Doctor Verification Required")
        );
        assert_eq!(flow.sign_up(), SignUpOutcome::VerificationRequired);
        assert_eq!(flow.step(), AuthStep::DoctorVerification);

        flow.toggle_mode();
        assert_eq!(flow.step(), AuthStep::DoctorVerification);
    }

    #[test]
    fn student_sign_up_keeps_form_step() {
        let mut flow = AuthFlow::new();
        flow.toggle_mode();
        flow.select_role(Role::Student);
        assert_eq!(flow.sign_up(), SignUpOutcome::StudentAccepted);
        assert_eq!(flow.step(), AuthStep::SignUp);
    }

    #[test]
    fn sign_up_without_role_is_reported() {
        let mut flow = AuthFlow::new();
        flow.toggle_mode();
        assert_eq!(flow.role_notice(), None);
        assert_eq!(flow.sign_up(), SignUpOutcome::RoleMissing);
        assert_eq!(flow.sign_in(), SignInOutcome::NotAvailable);
    }

    #[test]
    fn verification_summary_reflects_filled_fields() {
        let mut flow = AuthFlow::new();
        flow.form.institution = " Johns Hopkins Hospital ".to_string();
        flow.form.credentials = "MD-12345".to_string();
        let request = flow.submit_verification();
        assert_eq!(request.institution, "Johns Hopkins Hospital");
        assert!(request.has_license_number);
        assert!(!request.has_bio);
    }

    #[test]
    fn demo_buttons_emit_login_with_configured_names() {
        let flow = AuthFlow::new();
        let accounts = DemoAccounts {
            doctor_name: "Dr. House".to_string(),
            student_name: "Jamie".to_string(),
        };
        assert_eq!(
            flow.demo_login(Role::Doctor, &accounts),
            SessionEvent::login(Role::Doctor, "Dr. House")
        );
        assert_eq!(
            flow.demo_login(Role::Student, &accounts),
            SessionEvent::login(Role::Student, "Jamie")
        );
    }
}
