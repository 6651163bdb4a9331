use serde::{Deserialize, Serialize};

/// A registered user, patient or doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u64,
    pub gender: String,
    pub is_doctor: bool,
}

impl UserProfile {
    /// The contract returns a zeroed struct for unknown accounts.
    pub fn is_registered(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn role_label(&self) -> &'static str {
        if self.is_doctor {
            "Yes"
        } else {
            "No"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_profile_is_unregistered() {
        let zero = UserProfile {
            name: String::new(),
            age: 0,
            gender: String::new(),
            is_doctor: false,
        };
        assert!(!zero.is_registered());

        let alice = UserProfile {
            name: "Alice".into(),
            ..zero
        };
        assert!(alice.is_registered());
        assert_eq!(alice.role_label(), "No");
    }
}
