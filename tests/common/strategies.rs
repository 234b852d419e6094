use curriculum_core::constants::Difficulty;
use curriculum_core::models::{Grade, Subject};
use proptest::prelude::*;

pub const KNOWN_SLUGS: [&str; 4] = ["language-arts", "mathematics", "science", "social-studies"];

pub fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::A), Just(Difficulty::B)]
}

/// Kindergarten, numeric codes (including out-of-range ones) and garbage
pub fn grade_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("K".to_string()),
        Just("k".to_string()),
        (0..=12i32).prop_map(|n| n.to_string()),
        any::<i32>().prop_map(|n| n.to_string()),
        "[a-zA-Z]{2,6}",
        Just(String::new()),
    ]
}

/// Built-in slugs plus arbitrary ones that fall back to the default strategy
pub fn slug_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(KNOWN_SLUGS.to_vec()).prop_map(str::to_string),
        "[a-z][a-z-]{0,15}",
    ]
}

pub fn subject_strategy() -> impl Strategy<Value = Subject> {
    (1..1000i64, "[A-Z][a-z]{2,10}", slug_strategy()).prop_map(|(subject_id, name, slug)| {
        Subject {
            subject_id,
            name,
            slug,
            is_active: true,
        }
    })
}

pub fn grade_strategy() -> impl Strategy<Value = Grade> {
    (1..1000i64, grade_code_strategy(), 0..20i32).prop_map(|(grade_id, code, sort_order)| Grade {
        grade_id,
        display_name: format!("Grade {code}"),
        code,
        sort_order,
        is_active: true,
    })
}
