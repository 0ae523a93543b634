use crate::quiz::{self, QUESTION_COUNT};

pub const TITLE: &str = "Sistema Experto - Cuestionario";

// Síntomas de ansiedad, en el orden en que se preguntan
const QUESTIONS: [&str; QUESTION_COUNT] = [
    "Torpe o entumecido",
    "Acalorado",
    "Con temblor en las piernas",
    "Incapaz de relajarse",
    "Con temor a que ocurra lo peor",
    "Mareado, o que se le va la cabeza",
    "Con latidos del corazón fuertes y acelerados",
    "Inestable",
    "Atemorizado o asustado",
    "Nervioso",
    "Con sensación de bloqueo",
    "Con temblores en las manos",
    "Inquieto, inseguro",
    "Con miedo a perder el control",
    "Con sensación de ahogo",
    "Con temor a morir",
    "Con miedo",
    "Con problemas digestivos",
    "Con desvanecimientos",
    "Con rubor facial",
    "Con sudores, fríos o calientes",
];

pub fn get_questions() -> [&'static str; QUESTION_COUNT] {
    QUESTIONS
}

/// Catalog entries with their 1-based index.
pub fn questions() -> Vec<quiz::Question> {
    QUESTIONS
        .iter()
        .enumerate()
        .map(|(i, text)| quiz::Question::new(i + 1, text.to_string()))
        .collect()
}

pub fn question(index: usize) -> Option<quiz::Question> {
    let text = QUESTIONS.get(index.checked_sub(1)?)?;
    Some(quiz::Question::new(index, text.to_string()))
}

/// "1 es No", "2 es Leve", ... one line per option.
pub fn legend() -> String {
    quiz::ResponseValue::all()
        .iter()
        .map(|v| format!("{} es {}", v.option(), v.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
