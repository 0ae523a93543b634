use anxiety_questionnaire::error::QuizError;
use anxiety_questionnaire::quiz::catalog::get_questions;
use anxiety_questionnaire::quiz::scoring::{classify, score, Category};
use anxiety_questionnaire::quiz::session::Session;
use anxiety_questionnaire::quiz::{ResponseValue, QUESTION_COUNT};

fn session_with(name: &str, values: &[u8]) -> Session {
    let mut session = Session::new();
    session.set_name(name);
    for (i, value) in values.iter().enumerate() {
        session
            .answer(i + 1, ResponseValue::new(*value).unwrap())
            .unwrap();
    }
    session
}

#[test]
fn catalog_has_twenty_one_questions() {
    assert_eq!(get_questions().len(), QUESTION_COUNT);
}

#[test]
fn untouched_questionnaire_is_low() {
    let result = session_with("Ana", &[]).evaluate().unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.category, Category::Low);
    assert!(result.message.contains("Ana"));
}

#[test]
fn mixed_answers_are_moderate() {
    let mut values = vec![2u8; 11];
    values.extend(vec![1u8; 10]);
    let session = session_with("Luis", &values);
    assert_eq!(score(session.responses()), 32);

    let result = session.evaluate().unwrap();
    assert_eq!(result.category, Category::Moderate);
    assert!(result.message.contains("profesional de la salud mental"));
}

#[test]
fn maximum_answers_are_severe() {
    let result = session_with("Eva", &[3u8; QUESTION_COUNT]).evaluate().unwrap();
    assert_eq!(result.total, 63);
    assert_eq!(result.category, Category::Severe);
    assert_eq!(result.label, "Ansiedad severa");
}

#[test]
fn empty_name_halts_scoring() {
    let session = session_with("", &[3u8; QUESTION_COUNT]);
    assert!(matches!(session.evaluate(), Err(QuizError::EmptyName)));
}

#[test]
fn boundaries_match_the_thresholds() {
    assert_eq!(classify(21), Category::Low);
    assert_eq!(classify(22), Category::Moderate);
    assert_eq!(classify(35), Category::Moderate);
    assert_eq!(classify(36), Category::Severe);
}
