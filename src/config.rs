//! Loading the optional content configuration (extra subject question banks)
//! from TOML.
//!
//! Schema:
//! ```toml
//! [[subjects]]
//! name = "Rust"
//!
//! [[subjects.questions]]
//! text = "Which keyword introduces a new binding?"
//! options = ["var", "let", "def", "dim"]
//! correct = 1
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Question, SubjectBank};

/// Every subject ships exactly this many questions.
pub const QUESTIONS_PER_SUBJECT: usize = 5;
/// Every question carries exactly this many options.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ContentConfig {
  #[serde(default)]
  pub subjects: Vec<SubjectCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubjectCfg {
  pub name: String,
  #[serde(default)]
  pub questions: Vec<QuestionCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuestionCfg {
  pub text: String,
  pub options: Vec<String>,
  pub correct: usize,
}

/// Attempt to load `ContentConfig` from CONTENT_CONFIG_PATH. On any
/// parsing/IO error, returns None and the built-in banks are used alone.
pub fn load_content_config_from_env() -> Option<ContentConfig> {
  let path = std::env::var("CONTENT_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ContentConfig>(&s) {
      Ok(cfg) => {
        info!(target: "careerpath_backend", %path, "Loaded content config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "careerpath_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "careerpath_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

/// Validate one configured subject into a usable bank. Malformed entries are
/// skipped with a log line rather than aborting startup.
pub fn bank_from_cfg(cfg: &SubjectCfg) -> Option<SubjectBank> {
  let name = cfg.name.trim();
  if name.is_empty() {
    error!(target: "careerpath_backend", "Skipping config subject: empty name");
    return None;
  }
  if cfg.questions.len() != QUESTIONS_PER_SUBJECT {
    error!(
      target: "careerpath_backend",
      subject = name,
      got = cfg.questions.len(),
      expected = QUESTIONS_PER_SUBJECT,
      "Skipping config subject: wrong question count"
    );
    return None;
  }
  let mut questions = Vec::with_capacity(cfg.questions.len());
  for (i, qc) in cfg.questions.iter().enumerate() {
    if qc.options.len() != OPTIONS_PER_QUESTION || qc.correct >= qc.options.len() {
      error!(
        target: "careerpath_backend",
        subject = name,
        question = i,
        "Skipping config subject: malformed question"
      );
      return None;
    }
    questions.push(Question {
      text: qc.text.clone(),
      options: qc.options.clone(),
      correct: qc.correct,
    });
  }
  Some(SubjectBank { subject: name.to_string(), questions })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cfg_with(questions: Vec<QuestionCfg>) -> SubjectCfg {
    SubjectCfg { name: "Rust".into(), questions }
  }

  fn valid_question() -> QuestionCfg {
    QuestionCfg {
      text: "q".into(),
      options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
      correct: 1,
    }
  }

  #[test]
  fn well_formed_subject_is_accepted() {
    let cfg = cfg_with(vec![valid_question(); QUESTIONS_PER_SUBJECT]);
    let bank = bank_from_cfg(&cfg).expect("bank");
    assert_eq!(bank.subject, "Rust");
    assert_eq!(bank.questions.len(), QUESTIONS_PER_SUBJECT);
  }

  #[test]
  fn wrong_question_count_is_rejected() {
    let cfg = cfg_with(vec![valid_question(); 3]);
    assert!(bank_from_cfg(&cfg).is_none());
  }

  #[test]
  fn out_of_range_correct_index_is_rejected() {
    let mut q = valid_question();
    q.correct = 4;
    let mut qs = vec![valid_question(); QUESTIONS_PER_SUBJECT - 1];
    qs.push(q);
    assert!(bank_from_cfg(&cfg_with(qs)).is_none());
  }

  #[test]
  fn toml_round_trip_parses() {
    let raw = r#"
      [[subjects]]
      name = "Rust"
      [[subjects.questions]]
      text = "Which keyword introduces a new binding?"
      options = ["var", "let", "def", "dim"]
      correct = 1
    "#;
    let cfg: ContentConfig = toml::from_str(raw).expect("parse");
    assert_eq!(cfg.subjects.len(), 1);
    assert_eq!(cfg.subjects[0].questions[0].correct, 1);
  }
}
