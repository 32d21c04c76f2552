//! Static reference records loaded from the data directory.

use serde::{Deserialize, Serialize};

use super::{Identity, Role};

/// A course offering, as listed in `courses.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub sigle: String,
    pub titre: String,
    pub groupe: String,
    pub nb_max_student: u32,
    pub date_debut: String,
    pub date_fin: String,
}

/// A student account, listed to teachers exactly as stored in `students.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A teacher account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<&Student> for Identity {
    fn from(s: &Student) -> Self {
        Identity {
            id: s.id.clone(),
            email: s.email.clone(),
            password: s.password.clone(),
            role: Role::Student,
        }
    }
}

impl From<&Teacher> for Identity {
    fn from(t: &Teacher) -> Self {
        Identity {
            id: t.id.clone(),
            email: t.email.clone(),
            password: t.password.clone(),
            role: Role::Teacher,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_serializes_as_stored() {
        let student = Student {
            id: "3".to_string(),
            first_name: "Chloe".to_string(),
            last_name: "Roy".to_string(),
            email: "student+3@gmail.com".to_string(),
            password: "1234".to_string(),
        };
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "3",
                "first_name": "Chloe",
                "last_name": "Roy",
                "email": "student+3@gmail.com",
                "password": "1234"
            })
        );
    }

    #[test]
    fn test_identity_from_teacher() {
        let teacher = Teacher {
            id: "3".to_string(),
            first_name: "Louis".to_string(),
            last_name: "Lavoie".to_string(),
            email: "teacher+3@gmail.com".to_string(),
            password: "1234".to_string(),
        };
        let identity = Identity::from(&teacher);
        assert_eq!(identity.role, Role::Teacher);
        assert_eq!(identity.id, "3");
    }
}
