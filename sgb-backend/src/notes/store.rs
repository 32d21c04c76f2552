//! NoteStore — append-only in-memory note storage
//!
//! Notes keep the exact text they were submitted with and are always
//! returned in insertion order. The only removal is `clear_all`.

use parking_lot::RwLock;
use sgb_types::{CourseNote, StudentNote};

/// One grade entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub student: String,
    pub course: String,
    pub kind: String,
    pub type_id: String,
    pub note: String,
}

impl From<&Note> for StudentNote {
    fn from(n: &Note) -> Self {
        StudentNote {
            course: n.course.clone(),
            kind: n.kind.clone(),
            type_id: n.type_id.clone(),
            note: n.note.clone(),
        }
    }
}

impl From<&Note> for CourseNote {
    fn from(n: &Note) -> Self {
        CourseNote {
            course: n.course.clone(),
            student: n.student.clone(),
            kind: n.kind.clone(),
            type_id: n.type_id.clone(),
            note: n.note.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct NoteStore {
    notes: RwLock<Vec<Note>>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note. No check is made that the course or type exists.
    pub fn add_note(&self, student: &str, course: &str, kind: &str, type_id: &str, note: &str) {
        let mut notes = self.notes.write();
        notes.push(Note {
            student: student.to_string(),
            course: course.to_string(),
            kind: kind.to_string(),
            type_id: type_id.to_string(),
            note: note.to_string(),
        });
        log::debug!(
            "[Notes] Added note {} for student {} in course {} ({} total)",
            note,
            student,
            course,
            notes.len()
        );
    }

    pub fn notes_for_student(&self, student: &str) -> Vec<StudentNote> {
        self.notes
            .read()
            .iter()
            .filter(|n| n.student == student)
            .map(StudentNote::from)
            .collect()
    }

    pub fn notes_for_course(&self, course: &str) -> Vec<CourseNote> {
        self.notes
            .read()
            .iter()
            .filter(|n| n.course == course)
            .map(CourseNote::from)
            .collect()
    }

    pub fn clear_all(&self) {
        let mut notes = self.notes.write();
        let removed = notes.len();
        notes.clear();
        log::info!("[Notes] Cleared {} notes", removed);
    }

    pub fn len(&self) -> usize {
        self.notes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.read().is_empty()
    }
}
