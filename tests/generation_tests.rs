mod common;

use common::*;
use curriculum_core::config::GenerationConfig;
use curriculum_core::constants::{messages, Difficulty, LessonStatus, UserRole};
use curriculum_core::models::LessonKey;
use curriculum_core::orchestration::{GenerationRequest, LessonGenerator, QuestionGenerator};
use curriculum_core::store::CurriculumStore;
use std::sync::Arc;

fn generator_for(store: Arc<dyn CurriculumStore>) -> LessonGenerator {
    LessonGenerator::new(store, QuestionGenerator::default())
}

#[tokio::test]
async fn test_single_pair_creates_two_lessons_and_ten_questions() {
    let catalog = math_grade_three();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(GenerationRequest::all(7, UserRole::Teacher))
        .await;

    assert!(!result.has_errors(), "{:?}", result.error_messages);
    assert_eq!(result.lessons_created, 2);
    assert_eq!(result.questions_created, 10);
    assert_eq!(catalog.store.lesson_count(), 2);
    assert_eq!(catalog.store.question_count(), 10);

    let subject_id = catalog.subject("mathematics").subject_id;
    let grade_id = catalog.grade("3").grade_id;
    for difficulty in Difficulty::all() {
        let lesson = catalog
            .store
            .find_lesson(&LessonKey::new(subject_id, grade_id, difficulty))
            .await
            .unwrap()
            .expect("lesson stored for key");
        assert_eq!(lesson.status, LessonStatus::Draft);
        assert_eq!(lesson.created_by_id, 7);
        assert_eq!(lesson.created_by_role, UserRole::Teacher);
        assert!(lesson.published_at.is_none());

        let questions = catalog
            .store
            .questions_for_lesson(lesson.lesson_id)
            .await
            .unwrap();
        assert_eq!(questions.len(), 5);
        let orders: Vec<i32> = questions.iter().map(|q| q.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }

    let titles: Vec<&str> = result
        .generated_lessons
        .iter()
        .map(|l| l.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Basic Math - Grade 3", "Intermediate Math - Grade 3"]);
}

#[tokio::test]
async fn test_rerunning_generation_creates_nothing_new() {
    let catalog = full_catalog();
    let generator = generator_for(catalog.store.clone());

    let first = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;
    assert_eq!(first.lessons_created, 50);
    assert_eq!(first.questions_created, 250);

    for _ in 0..2 {
        let again = generator
            .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
            .await;
        assert!(!again.has_errors(), "{:?}", again.error_messages);
        assert_eq!(again.lessons_created, 0);
        assert_eq!(again.questions_created, 0);
        assert!(again.generated_lessons.is_empty());
    }

    assert_eq!(catalog.store.lesson_count(), 50);
    assert_eq!(catalog.store.question_count(), 250);
}

#[tokio::test]
async fn test_dry_run_previews_without_writing() {
    let catalog = full_catalog();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin).dry_run(true))
        .await;

    assert!(!result.has_errors(), "{:?}", result.error_messages);
    assert_eq!(result.lessons_created, 50);
    assert_eq!(result.questions_created, 250);
    assert_eq!(result.generated_lessons.len(), 50);
    for lesson in &result.generated_lessons {
        assert_eq!(lesson.lesson_id, 0);
        assert!(!lesson.is_persisted());
        assert_eq!(lesson.questions.len(), 5);
        assert!(lesson.questions.iter().all(|q| q.lesson_id == 0));
        assert!(!lesson.title.is_empty());
    }

    assert_eq!(catalog.store.lesson_count(), 0);
    assert_eq!(catalog.store.question_count(), 0);
}

#[tokio::test]
async fn test_dry_run_matches_real_run() {
    let catalog = full_catalog();
    let generator = generator_for(catalog.store.clone());

    let preview = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin).dry_run(true))
        .await;
    let real = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    assert_eq!(preview.lessons_created, real.lessons_created);
    assert_eq!(preview.questions_created, real.questions_created);
    for (p, r) in preview.generated_lessons.iter().zip(&real.generated_lessons) {
        assert_eq!(p.key(), r.key());
        assert_eq!(p.title, r.title);
        assert_eq!(p.description, r.description);
        let prompts = |l: &curriculum_core::models::GeneratedLesson| {
            l.questions.iter().map(|q| q.prompt.clone()).collect::<Vec<_>>()
        };
        assert_eq!(prompts(p), prompts(r));
    }

    let after = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin).dry_run(true))
        .await;
    assert_eq!(after.lessons_created, 0);
}

#[tokio::test]
async fn test_lessons_follow_subject_name_then_grade_sort_order() {
    let catalog = full_catalog();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin).dry_run(true))
        .await;

    let titles: Vec<&str> = result
        .generated_lessons
        .iter()
        .take(6)
        .map(|l| l.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Basic Art - Kindergarten",
            "Intermediate Art - Kindergarten",
            "Basic Art - Grade 1",
            "Intermediate Art - Grade 1",
            "Basic Art - Grade 4",
            "Intermediate Art - Grade 4",
        ]
    );
    assert_eq!(
        result.generated_lessons.last().map(|l| l.title.as_str()),
        Some("Intermediate Social Studies - Grade 10")
    );
}

#[tokio::test]
async fn test_unmapped_subject_uses_placeholder_questions() {
    let catalog = full_catalog();
    let generator = generator_for(catalog.store.clone());
    let art_id = catalog.subject("art").subject_id;

    let result = generator
        .generate_lessons(
            GenerationRequest::all(1, UserRole::Admin)
                .with_subjects(vec![art_id])
                .dry_run(true),
        )
        .await;

    assert_eq!(result.lessons_created, 10);
    for lesson in &result.generated_lessons {
        assert_eq!(lesson.questions.len(), 5);
        assert!(lesson.questions.iter().all(|q| q.correct_choice_index == 0));
        assert!(lesson.questions[0].prompt.starts_with("Art practice question 1"));
    }
}

#[tokio::test]
async fn test_failing_pair_is_reported_and_run_continues() {
    let catalog = full_catalog();
    let math = catalog.subject("mathematics").clone();
    let grade = catalog.grade("4").clone();
    let store = Arc::new(FailingStore::new(
        catalog.store.clone(),
        FailurePlan {
            fail_pair: Some((math.subject_id, grade.grade_id)),
            ..FailurePlan::default()
        },
    ));
    let generator = generator_for(store);

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    assert_eq!(
        result.error_messages,
        vec!["Error generating lessons for Math - Grade 4: Store error: injected lookup failure"]
    );
    assert_eq!(result.lessons_created, 48);
    assert_eq!(result.questions_created, 240);
    assert_eq!(catalog.store.lesson_count(), 48);
    assert_eq!(catalog.store.question_count(), 240);
    assert!(result
        .generated_lessons
        .iter()
        .all(|l| !(l.subject_id == math.subject_id && l.grade_id == grade.grade_id)));
}

#[tokio::test]
async fn test_empty_universe_reports_single_error() {
    let catalog = CatalogBuilder::new().grade("1", "Grade 1", 1).build();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    assert_eq!(result.error_messages, vec![messages::EMPTY_UNIVERSE]);
    assert_eq!(result.lessons_created, 0);
    assert_eq!(result.questions_created, 0);
    assert!(result.generated_lessons.is_empty());
}

#[tokio::test]
async fn test_filters_that_match_nothing_yield_empty_universe() {
    let catalog = math_grade_three();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin).with_grades(vec![999]))
        .await;

    assert_eq!(result.error_messages, vec![messages::EMPTY_UNIVERSE]);
    assert_eq!(catalog.store.lesson_count(), 0);
}

#[tokio::test]
async fn test_inactive_records_are_excluded() {
    let catalog = CatalogBuilder::new()
        .subject("Math", "mathematics")
        .inactive_subject("Science", "science")
        .grade("1", "Grade 1", 1)
        .inactive_grade("2", "Grade 2", 2)
        .build();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    assert_eq!(result.lessons_created, 2);
    assert!(result
        .generated_lessons
        .iter()
        .all(|l| l.title.ends_with("Math - Grade 1")));

    let only_inactive = generator
        .generate_lessons(
            GenerationRequest::all(1, UserRole::Admin)
                .with_subjects(vec![catalog.subject("science").subject_id]),
        )
        .await;
    assert_eq!(only_inactive.error_messages, vec![messages::EMPTY_UNIVERSE]);
}

#[tokio::test]
async fn test_id_filters_restrict_the_matrix() {
    let catalog = full_catalog();
    let generator = generator_for(catalog.store.clone());

    let result = generator
        .generate_lessons(
            GenerationRequest::all(1, UserRole::Admin)
                .with_subjects(vec![catalog.subject("science").subject_id])
                .with_grades(vec![catalog.grade("K").grade_id, catalog.grade("10").grade_id]),
        )
        .await;
    assert_eq!(result.lessons_created, 4);
    assert_eq!(result.questions_created, 20);

    // Empty lists mean no filter
    let rest = generator
        .generate_lessons(
            GenerationRequest::all(1, UserRole::Admin)
                .with_subjects(vec![])
                .with_grades(vec![]),
        )
        .await;
    assert_eq!(rest.lessons_created, 46);
    assert_eq!(catalog.store.lesson_count(), 50);
}

#[tokio::test]
async fn test_commit_failure_returns_partial_result_with_generic_error() {
    let catalog = math_grade_three();
    let store = Arc::new(FailingStore::new(
        catalog.store.clone(),
        FailurePlan {
            fail_commit: true,
            ..FailurePlan::default()
        },
    ));
    let generator = generator_for(store);

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    assert_eq!(result.error_messages.len(), 1);
    let message = &result.error_messages[0];
    assert!(message.starts_with(messages::GENERATION_FAILED_PREFIX));
    assert!(
        message.ends_with(&format!("({}: 1, 2)", messages::LESSONS_WITHOUT_QUESTIONS)),
        "{message}"
    );
    assert_eq!(result.lessons_created, 2);
    // Nothing from the failed batch was stored
    assert_eq!(result.questions_created, 0);
    assert_eq!(catalog.store.lesson_count(), 2);
    assert_eq!(catalog.store.question_count(), 0);
}

#[tokio::test]
async fn test_universe_failure_returns_generic_error() {
    let catalog = math_grade_three();
    let store = Arc::new(FailingStore::new(
        catalog.store.clone(),
        FailurePlan {
            fail_universe: true,
            ..FailurePlan::default()
        },
    ));
    let generator = generator_for(store);

    let result = generator
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    assert_eq!(
        result.error_messages,
        vec![format!(
            "{}: Store error: injected universe failure",
            messages::GENERATION_FAILED_PREFIX
        )]
    );
    assert_eq!(result.lessons_created, 0);
}

fn interleaving_store(catalog: &SeededCatalog, plan: FailurePlan) -> Arc<FailingStore> {
    Arc::new(FailingStore::new(
        catalog.store.clone(),
        FailurePlan {
            yield_calls: true,
            ..plan
        },
    ))
}

#[tokio::test]
async fn test_insert_conflict_is_skipped_silently() {
    let catalog = full_catalog();
    generator_for(catalog.store.clone())
        .generate_lessons(GenerationRequest::all(1, UserRole::Admin))
        .await;

    // Every lookup misses, so every insert runs into the unique key
    let store = Arc::new(FailingStore::new(
        catalog.store.clone(),
        FailurePlan {
            blind_lookup: true,
            ..FailurePlan::default()
        },
    ));
    let result = generator_for(store.clone())
        .generate_lessons(GenerationRequest::all(2, UserRole::Admin))
        .await;

    assert!(!result.has_errors(), "{:?}", result.error_messages);
    assert_eq!(result.lessons_created, 0);
    assert_eq!(result.questions_created, 0);
    assert!(result.generated_lessons.is_empty());
    assert_eq!(store.insert_conflicts(), 50);
    assert_eq!(catalog.store.lesson_count(), 50);
    assert_eq!(catalog.store.question_count(), 250);
}

#[tokio::test]
async fn test_unserialized_concurrent_runs_create_each_lesson_once() {
    let catalog = full_catalog();
    let store = interleaving_store(&catalog, FailurePlan::default());
    let generator = LessonGenerator::with_config(
        store.clone(),
        QuestionGenerator::default(),
        &GenerationConfig {
            serialize_runs: false,
        },
    );

    let (first, second) = tokio::join!(
        generator.generate_lessons(GenerationRequest::all(1, UserRole::Admin)),
        generator.generate_lessons(GenerationRequest::all(2, UserRole::Admin)),
    );

    assert!(!first.has_errors(), "{:?}", first.error_messages);
    assert!(!second.has_errors(), "{:?}", second.error_messages);
    // Both runs saw the same keys as missing; the loser of each insert skipped it
    assert!(store.insert_conflicts() > 0);
    assert_eq!(first.lessons_created + second.lessons_created, 50);
    assert_eq!(first.questions_created + second.questions_created, 250);
    assert_eq!(catalog.store.lesson_count(), 50);
    assert_eq!(catalog.store.question_count(), 250);
    for lesson in catalog.store.lessons() {
        let questions = catalog.store.questions_for_lesson(lesson.lesson_id).await.unwrap();
        assert_eq!(questions.len(), 5, "lesson {}", lesson.lesson_id);
    }
}

#[tokio::test]
async fn test_serialized_runs_never_race_on_insert() {
    let catalog = full_catalog();
    let store = interleaving_store(&catalog, FailurePlan::default());
    let generator = generator_for(store.clone());

    let (first, second) = tokio::join!(
        generator.generate_lessons(GenerationRequest::all(1, UserRole::Admin)),
        generator.generate_lessons(GenerationRequest::all(2, UserRole::Admin)),
    );

    let mut created = [first.lessons_created, second.lessons_created];
    created.sort_unstable();
    assert_eq!(created, [0, 50]);
    assert_eq!(store.insert_conflicts(), 0);
    assert!(!first.has_errors() && !second.has_errors());
    assert_eq!(catalog.store.question_count(), 250);
}
