use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::{Config, OutputFormat};
use crate::error::QuizError;
use crate::quiz::catalog;
use crate::quiz::scoring::ScoreResult;
use crate::quiz::session::Session;
use crate::quiz::{ResponseValue, QUESTION_COUNT};

pub type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Step of the conversation; decides how the next input line is read.
///
/// `then_review` marks a correction requested from the review step, which
/// returns there instead of continuing the questionnaire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    ReceiveName {
        then_review: bool,
    },
    ReceiveAge {
        then_review: bool,
    },
    Answering {
        question_number: usize,
        then_review: bool,
    },
    Review,
    ShowResult,
    Finished,
}

const NAME_PROMPT: &str = "Nombre:";
const AGE_PROMPT: &str = "Edad:";
const INVALID_ANSWER_TEXT: &str = "Por favor, responde con un número del 1 al 4.";
const UNKNOWN_COMMAND_TEXT: &str = "Opción no reconocida.";
const REVIEW_HELP_TEXT: &str = "Escribe `calcular` para ver el resultado, un número de pregunta (1-21) para cambiar su respuesta, `nombre` o `edad` para corregir tus datos, o `salir` para terminar.";
const ACCEPT_TEXT: &str = "[Aceptar] Pulsa Enter para continuar.";
const FAREWELL_TEXT: &str = "¡Hasta pronto!";

const CALCULATE_COMMAND: &str = "calcular";
const NAME_COMMAND: &str = "nombre";
const AGE_COMMAND: &str = "edad";
const QUIT_COMMAND: &str = "salir";

pub struct Dialogue<W> {
    out: W,
    config: Config,
    session: Session,
    state: State,
}

impl<W: AsyncWrite + Unpin> Dialogue<W> {
    pub fn new(out: W, config: Config) -> Self {
        Self {
            out,
            config,
            session: Session::new(),
            state: State::ReceiveName { then_review: false },
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_session(self) -> Session {
        self.session
    }

    async fn say(&mut self, text: &str) -> HandlerResult {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        Ok(())
    }

    fn update(&mut self, state: State) {
        debug!("dialogue state {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Greets the respondent; the dialogue already waits for the name.
    pub async fn start(&mut self) -> HandlerResult {
        self.say(catalog::TITLE).await?;
        self.say(NAME_PROMPT).await?;
        self.out.flush().await?;
        Ok(())
    }

    /// Routes one input line to the handler of the current state.
    pub async fn dispatch(&mut self, text: &str) -> HandlerResult {
        match self.state.clone() {
            State::ReceiveName { then_review } => self.receive_name(text, then_review).await?,
            State::ReceiveAge { then_review } => self.receive_age(text, then_review).await?,
            State::Answering {
                question_number,
                then_review,
            } => {
                self.receive_answer(text, question_number, then_review)
                    .await?
            }
            State::Review => self.review(text).await?,
            State::ShowResult => self.acknowledge_result().await?,
            State::Finished => {}
        }
        self.out.flush().await?;
        Ok(())
    }

    async fn receive_name(&mut self, text: &str, then_review: bool) -> HandlerResult {
        // Blank names are accepted here and rejected when scoring
        self.session.set_name(text);
        if then_review {
            return self.show_review().await;
        }
        self.say(AGE_PROMPT).await?;
        self.update(State::ReceiveAge { then_review: false });
        Ok(())
    }

    async fn receive_age(&mut self, text: &str, then_review: bool) -> HandlerResult {
        self.session.set_age(text.trim());
        if then_review {
            return self.show_review().await;
        }
        self.say(&catalog::legend()).await?;
        self.ask_question(1, false).await
    }

    async fn ask_question(&mut self, question_number: usize, then_review: bool) -> HandlerResult {
        let question = catalog::question(question_number)
            .ok_or(QuizError::UnknownQuestion(question_number))?;
        let current = self
            .session
            .response(question_number)
            .unwrap_or_default();
        let text = format!(
            "{}/{}. {} (1-4, Enter = {})",
            question.index,
            QUESTION_COUNT,
            question.text,
            current.option()
        );
        self.say(&text).await?;
        self.update(State::Answering {
            question_number,
            then_review,
        });
        Ok(())
    }

    async fn receive_answer(
        &mut self,
        text: &str,
        question_number: usize,
        then_review: bool,
    ) -> HandlerResult {
        if !text.trim().is_empty() {
            match ResponseValue::from_option(text) {
                Some(value) => self.session.answer(question_number, value)?,
                None => {
                    self.say(INVALID_ANSWER_TEXT).await?;
                    return self.ask_question(question_number, then_review).await;
                }
            }
        }

        if then_review || question_number >= QUESTION_COUNT {
            return self.show_review().await;
        }
        self.ask_question(question_number + 1, false).await
    }

    async fn show_review(&mut self) -> HandlerResult {
        let mut summary = vec![
            "Resumen:".to_string(),
            format!("Nombre: {}", self.session.respondent.name),
            format!("Edad: {}", self.session.respondent.age),
        ];
        for question in catalog::questions() {
            let answer = self.session.response(question.index).unwrap_or_default();
            summary.push(format!(
                "{:>2}. {}: {} ({})",
                question.index,
                question.text,
                answer.option(),
                answer.label()
            ));
        }
        self.say(&summary.join("\n")).await?;
        self.say(REVIEW_HELP_TEXT).await?;
        self.update(State::Review);
        Ok(())
    }

    async fn review(&mut self, text: &str) -> HandlerResult {
        let command = text.trim().to_lowercase();
        match command.as_str() {
            CALCULATE_COMMAND => self.calculate().await,
            NAME_COMMAND => {
                self.say(NAME_PROMPT).await?;
                self.update(State::ReceiveName { then_review: true });
                Ok(())
            }
            AGE_COMMAND => {
                self.say(AGE_PROMPT).await?;
                self.update(State::ReceiveAge { then_review: true });
                Ok(())
            }
            QUIT_COMMAND => {
                self.say(FAREWELL_TEXT).await?;
                self.update(State::Finished);
                Ok(())
            }
            _ => match command.parse::<usize>() {
                Ok(n) if (1..=QUESTION_COUNT).contains(&n) => self.ask_question(n, true).await,
                _ => {
                    self.say(UNKNOWN_COMMAND_TEXT).await?;
                    self.say(REVIEW_HELP_TEXT).await
                }
            },
        }
    }

    async fn calculate(&mut self) -> HandlerResult {
        match self.session.evaluate() {
            Ok(result) => self.show_result(&result).await,
            Err(QuizError::EmptyName) => {
                self.say(&format!("Error: {}", QuizError::EmptyName)).await?;
                self.say(NAME_PROMPT).await?;
                self.update(State::ReceiveName { then_review: true });
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn show_result(&mut self, result: &ScoreResult) -> HandlerResult {
        info!(
            "questionnaire scored: total {} ({:?})",
            result.total, result.category
        );
        self.say("=== Resultado ===").await?;
        self.say(&result.label).await?;
        self.say(&result.message).await?;
        self.say(&format!("Puntaje total: {}", result.total)).await?;
        if self.config.output == OutputFormat::Json {
            let json = serde_json::to_string(result)?;
            self.say(&json).await?;
        }
        self.say(ACCEPT_TEXT).await?;
        self.update(State::ShowResult);
        Ok(())
    }

    async fn acknowledge_result(&mut self) -> HandlerResult {
        self.say(REVIEW_HELP_TEXT).await?;
        self.update(State::Review);
        Ok(())
    }
}

/// Drives a whole conversation until `salir` or end of input and returns
/// what the respondent entered.
pub async fn run<R, W>(
    input: R,
    out: W,
    config: Config,
) -> Result<Session, Box<dyn std::error::Error + Send + Sync>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut dialogue = Dialogue::new(out, config);
    dialogue.start().await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        dialogue.dispatch(&line).await?;
        if *dialogue.state() == State::Finished {
            break;
        }
    }
    info!("dialogue finished in state {:?}", dialogue.state());
    Ok(dialogue.into_session())
}
