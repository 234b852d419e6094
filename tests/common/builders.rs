use curriculum_core::models::{Grade, NewGrade, NewSubject, Subject};
use curriculum_core::store::InMemoryCurriculumStore;
use std::sync::Arc;

/// Seeds an [`InMemoryCurriculumStore`] with subjects and grades
#[derive(Default)]
pub struct CatalogBuilder {
    subjects: Vec<NewSubject>,
    grades: Vec<NewGrade>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subject(mut self, name: &str, slug: &str) -> Self {
        self.subjects.push(NewSubject::active(name, slug));
        self
    }

    pub fn inactive_subject(mut self, name: &str, slug: &str) -> Self {
        let mut subject = NewSubject::active(name, slug);
        subject.is_active = false;
        self.subjects.push(subject);
        self
    }

    pub fn grade(mut self, code: &str, display_name: &str, sort_order: i32) -> Self {
        self.grades.push(NewGrade::active(code, display_name, sort_order));
        self
    }

    pub fn inactive_grade(mut self, code: &str, display_name: &str, sort_order: i32) -> Self {
        let mut grade = NewGrade::active(code, display_name, sort_order);
        grade.is_active = false;
        self.grades.push(grade);
        self
    }

    pub fn build(self) -> SeededCatalog {
        let store = Arc::new(InMemoryCurriculumStore::new());
        let subjects = self
            .subjects
            .into_iter()
            .map(|s| store.add_subject(s))
            .collect();
        let grades = self.grades.into_iter().map(|g| store.add_grade(g)).collect();
        SeededCatalog {
            store,
            subjects,
            grades,
        }
    }
}

pub struct SeededCatalog {
    pub store: Arc<InMemoryCurriculumStore>,
    /// Subjects in insertion order, with assigned ids
    pub subjects: Vec<Subject>,
    /// Grades in insertion order, with assigned ids
    pub grades: Vec<Grade>,
}

impl SeededCatalog {
    pub fn subject(&self, slug: &str) -> &Subject {
        self.subjects
            .iter()
            .find(|s| s.slug == slug)
            .unwrap_or_else(|| panic!("no seeded subject with slug {slug}"))
    }

    pub fn grade(&self, code: &str) -> &Grade {
        self.grades
            .iter()
            .find(|g| g.code == code)
            .unwrap_or_else(|| panic!("no seeded grade with code {code}"))
    }
}

/// Single subject ("Math", mathematics) and single grade ("3", Grade 3)
pub fn math_grade_three() -> SeededCatalog {
    CatalogBuilder::new()
        .subject("Math", "mathematics")
        .grade("3", "Grade 3", 3)
        .build()
}

/// All four built-in subjects, one unmapped subject, and grades K, 1, 4, 7, 10
pub fn full_catalog() -> SeededCatalog {
    CatalogBuilder::new()
        .subject("Science", "science")
        .subject("Art", "art")
        .subject("Math", "mathematics")
        .subject("English Language Arts", "language-arts")
        .subject("Social Studies", "social-studies")
        .grade("10", "Grade 10", 10)
        .grade("K", "Kindergarten", 0)
        .grade("4", "Grade 4", 4)
        .grade("1", "Grade 1", 1)
        .grade("7", "Grade 7", 7)
        .build()
}
