use shared::domain::{Role, ViewId};

use crate::{gate, session::Session};

/// Everything the profile screen varies by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub role: Role,
    pub title: &'static str,
    pub bio: &'static str,
    pub badge: &'static str,
    pub shows_posted_cases: bool,
}

impl ProfileCard {
    pub fn for_session(session: &Session) -> Option<Self> {
        let identity = session.identity()?;
        let shows_posted_cases = gate::is_permitted(Some(identity.role), ViewId::Upload);
        let card = match identity.role {
            Role::Doctor => ProfileCard {
                name: identity.display_name.clone(),
                role: identity.role,
                title: "Radiologist at Johns Hopkins Hospital",
                bio: "Radiologist with 12 years of experience specializing in emergency and trauma imaging. Passionate about medical education and case-based learning.",
                badge: "Verified Doctor",
                shows_posted_cases,
            },
            Role::Student => ProfileCard {
                name: identity.display_name.clone(),
                role: identity.role,
                title: "Medical Student at Harvard Medical School",
                bio: "4th year medical student with keen interest in radiology and diagnostic imaging. Excited to learn from experienced practitioners.",
                badge: "Medical Student",
                shows_posted_cases,
            },
        };
        Some(card)
    }
}
