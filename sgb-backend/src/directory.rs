//! Directory — static reference data for the gradebook.
//!
//! Loaded once at startup from three JSON files in the data directory:
//! `courses.json`, `students.json` and `teachers.json`. Never mutated afterwards.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::DirectoryError;
use crate::models::{Course, Identity, Student, Teacher};

pub const COURSES_FILE: &str = "courses.json";
pub const STUDENTS_FILE: &str = "students.json";
pub const TEACHERS_FILE: &str = "teachers.json";

#[derive(Debug, Clone, Default)]
pub struct Directory {
    courses: Vec<Course>,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
}

impl Directory {
    pub fn new(courses: Vec<Course>, students: Vec<Student>, teachers: Vec<Teacher>) -> Self {
        Self {
            courses,
            students,
            teachers,
        }
    }

    /// Load every reference file from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self, DirectoryError> {
        let courses: Vec<Course> = read_json(&data_dir.join(COURSES_FILE))?;
        let students: Vec<Student> = read_json(&data_dir.join(STUDENTS_FILE))?;
        let teachers: Vec<Teacher> = read_json(&data_dir.join(TEACHERS_FILE))?;

        log::info!(
            "[Directory] Loaded {} courses, {} students, {} teachers from {:?}",
            courses.len(),
            students.len(),
            teachers.len(),
            data_dir
        );

        Ok(Self::new(courses, students, teachers))
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Exact, case-sensitive match on both email and password.
    /// Students are checked before teachers.
    pub fn find_identity(&self, email: &str, password: &str) -> Option<Identity> {
        if let Some(student) = self
            .students
            .iter()
            .find(|s| s.email == email && s.password == password)
        {
            return Some(Identity::from(student));
        }

        self.teachers
            .iter()
            .find(|t| t.email == email && t.password == password)
            .map(Identity::from)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DirectoryError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DirectoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_data_dir;
    use crate::models::Role;
    use tempfile::tempdir;

    #[test]
    fn test_load_bundled_data() {
        let directory = Directory::load(&default_data_dir()).expect("Failed to load data");
        assert!(!directory.courses().is_empty());
        assert!(directory.students().iter().any(|s| s.email == "student+3@gmail.com"));
        assert!(directory.find_identity("teacher+3@gmail.com", "1234").is_some());
    }

    #[test]
    fn test_find_identity_student_and_teacher() {
        let directory = Directory::load(&default_data_dir()).unwrap();

        let student = directory.find_identity("student+3@gmail.com", "1234").unwrap();
        assert_eq!(student.role, Role::Student);
        assert_eq!(student.id, "3");

        let teacher = directory.find_identity("teacher+3@gmail.com", "1234").unwrap();
        assert_eq!(teacher.role, Role::Teacher);
    }

    #[test]
    fn test_find_identity_is_exact() {
        let directory = Directory::load(&default_data_dir()).unwrap();
        assert!(directory.find_identity("student+3@gmail.com", "12345").is_none());
        assert!(directory.find_identity("Student+3@gmail.com", "1234").is_none());
        assert!(directory.find_identity(" student+3@gmail.com", "1234").is_none());
        assert!(directory.find_identity("invalid+3@gmail.com", "1234").is_none());
        assert!(directory.find_identity("", "").is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Directory::load(dir.path()).unwrap_err();
        assert!(matches!(err, DirectoryError::Io { .. }));
        assert!(err.to_string().contains(COURSES_FILE));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(COURSES_FILE), "[]").unwrap();
        std::fs::write(dir.path().join(STUDENTS_FILE), "{ not json").unwrap();
        std::fs::write(dir.path().join(TEACHERS_FILE), "[]").unwrap();

        let err = Directory::load(dir.path()).unwrap_err();
        assert!(matches!(err, DirectoryError::Parse { .. }));
        assert!(err.to_string().contains(STUDENTS_FILE));
    }
}
