use strum::Display;

/// The two kinds of account that can log in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

/// Login credentials of a student or teacher, resolved from the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
