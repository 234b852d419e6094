//! Table-driven strategy shared by every known subject.

use super::{lesson_title, stamp_questions, ContentStrategy, GradeBand, LessonContent, QuestionSet};
use crate::constants::Difficulty;
use crate::models::{Grade, NewLessonQuestion, Subject};

/// Static content for one subject, indexed by `[band][difficulty]`
#[derive(Debug)]
pub struct SubjectTables {
    pub focus: [[&'static str; 2]; 4],
    pub questions: [[QuestionSet; 2]; 4],
}

impl SubjectTables {
    pub fn focus_for(&self, band: GradeBand, difficulty: Difficulty) -> &'static str {
        self.focus[band.index()][difficulty.index()]
    }

    pub fn questions_for(&self, band: GradeBand, difficulty: Difficulty) -> &QuestionSet {
        &self.questions[band.index()][difficulty.index()]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BandedStrategy {
    slug: &'static str,
    tables: &'static SubjectTables,
}

impl BandedStrategy {
    pub const fn new(slug: &'static str, tables: &'static SubjectTables) -> Self {
        Self { slug, tables }
    }

    pub fn tables(&self) -> &'static SubjectTables {
        self.tables
    }
}

impl ContentStrategy for BandedStrategy {
    fn slug(&self) -> &str {
        self.slug
    }

    fn lesson_content(
        &self,
        subject: &Subject,
        grade: &Grade,
        difficulty: Difficulty,
    ) -> LessonContent {
        let focus = self
            .tables
            .focus_for(GradeBand::from_grade(grade), difficulty);

        LessonContent {
            title: lesson_title(subject, grade, difficulty),
            description: format!(
                "{} {} lesson for {} focusing on {}.",
                difficulty.label(),
                subject.name,
                grade.display_name,
                focus
            ),
        }
    }

    fn questions(
        &self,
        _subject: &Subject,
        grade: &Grade,
        difficulty: Difficulty,
        lesson_id: i64,
    ) -> Vec<NewLessonQuestion> {
        let set = self
            .tables
            .questions_for(GradeBand::from_grade(grade), difficulty);
        stamp_questions(set, lesson_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHOICES_PER_QUESTION, QUESTIONS_PER_LESSON};
    use crate::content::{language_arts, mathematics, science, social_studies};

    const ALL_BANDS: [GradeBand; 4] = [
        GradeBand::EarlyElementary,
        GradeBand::Elementary,
        GradeBand::Middle,
        GradeBand::HighSchool,
    ];

    fn all_tables() -> [(&'static str, &'static SubjectTables); 4] {
        [
            (language_arts::SLUG, &language_arts::TABLES),
            (mathematics::SLUG, &mathematics::TABLES),
            (science::SLUG, &science::TABLES),
            (social_studies::SLUG, &social_studies::TABLES),
        ]
    }

    #[test]
    fn test_every_table_is_well_formed() {
        for (slug, tables) in all_tables() {
            for band in ALL_BANDS {
                for difficulty in Difficulty::all() {
                    assert!(!tables.focus_for(band, difficulty).is_empty(), "{slug}");
                    let set = tables.questions_for(band, difficulty);
                    assert_eq!(set.len(), QUESTIONS_PER_LESSON);
                    for template in set {
                        assert!(
                            usize::from(template.correct_choice) < CHOICES_PER_QUESTION,
                            "{slug} {band} {difficulty}: {}",
                            template.prompt
                        );
                        assert!(!template.prompt.is_empty());
                        assert!(!template.explanation.is_empty());
                        assert!(template.choices.iter().all(|c| !c.is_empty()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_difficulties_use_distinct_questions() {
        for (slug, tables) in all_tables() {
            for band in ALL_BANDS {
                let a = tables.questions_for(band, Difficulty::A);
                let b = tables.questions_for(band, Difficulty::B);
                assert_ne!(a[0].prompt, b[0].prompt, "{slug} {band}");
            }
        }
    }

    #[test]
    fn test_questions_are_stamped_in_order() {
        let strategy = mathematics::strategy();
        let subject = Subject {
            subject_id: 1,
            name: "Math".to_string(),
            slug: mathematics::SLUG.to_string(),
            is_active: true,
        };
        let grade = Grade {
            grade_id: 1,
            code: "3".to_string(),
            display_name: "Grade 3".to_string(),
            sort_order: 3,
            is_active: true,
        };

        let questions = strategy.questions(&subject, &grade, Difficulty::A, 42);
        let orders: Vec<i32> = questions.iter().map(|q| q.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
        assert!(questions.iter().all(|q| q.lesson_id == 42));
        assert!(questions.iter().all(|q| q.choices.len() == CHOICES_PER_QUESTION));

        let content = strategy.lesson_content(&subject, &grade, Difficulty::B);
        assert_eq!(content.title, "Intermediate Math - Grade 3");
        assert!(content
            .description
            .contains(mathematics::TABLES.focus_for(GradeBand::Elementary, Difficulty::B)));
    }
}
