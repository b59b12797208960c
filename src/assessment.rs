//! Timed multiple-choice assessment engine.
//!
//! A small, total state machine: `Idle -> Selected -> Running -> Finished`.
//! Every transition method is safe to call in any phase; out-of-state calls
//! are ignored rather than raised. The engine is synchronous and does no
//! I/O. The once-per-second countdown is driven externally via `tick()`
//! (see `AppState::start_assessment` for the timer wiring).

use tracing::{debug, info};

use crate::domain::{Question, TestResult};

/// Fixed time budget for every test run (5 minutes).
pub const TIME_BUDGET_SECS: u32 = 300;

/// Score band boundaries. Only the 80/60 cut points are contract; the
/// recommendation wording below is presentation content.
const TIER_HIGH: u8 = 80;
const TIER_MID: u8 = 60;

#[derive(Clone, Debug)]
pub enum Phase {
  Idle,
  Selected { subject: String, questions: Vec<Question> },
  Running(ActiveTest),
  Finished(TestResult),
}

/// Working state of a test in progress.
#[derive(Clone, Debug)]
pub struct ActiveTest {
  pub subject: String,
  pub questions: Vec<Question>,
  pub current: usize,
  /// One slot per question; `None` until answered. Last write wins.
  pub answers: Vec<Option<usize>>,
  pub remaining_secs: u32,
}

pub struct AssessmentEngine {
  phase: Phase,
}

impl AssessmentEngine {
  pub fn new() -> Self {
    Self { phase: Phase::Idle }
  }

  pub fn phase(&self) -> &Phase {
    &self.phase
  }

  pub fn is_running(&self) -> bool {
    matches!(self.phase, Phase::Running(_))
  }

  /// Pick a subject and load its fixed question set. Ignored while a test
  /// is running; from `Finished` it implicitly discards the old result.
  pub fn choose_subject(&mut self, subject: &str, questions: Vec<Question>) -> bool {
    if self.is_running() {
      debug!(target: "assessment", %subject, "choose_subject ignored: test running");
      return false;
    }
    info!(target: "assessment", %subject, question_count = questions.len(), "Subject selected");
    self.phase = Phase::Selected { subject: subject.to_string(), questions };
    true
  }

  /// `Selected -> Running`: index 0, empty answers, full time budget.
  /// Returns false from any other phase.
  pub fn start(&mut self) -> bool {
    let Phase::Selected { subject, questions } = &self.phase else {
      debug!(target: "assessment", "start ignored: no subject selected");
      return false;
    };
    let n = questions.len();
    info!(target: "assessment", subject = %subject, questions = n, budget_secs = TIME_BUDGET_SECS, "Test started");
    self.phase = Phase::Running(ActiveTest {
      subject: subject.clone(),
      questions: questions.clone(),
      current: 0,
      answers: vec![None; n],
      remaining_secs: TIME_BUDGET_SECS,
    });
    true
  }

  /// Record an answer for the current question (overwrites any earlier pick).
  /// Out-of-range option indices and out-of-state calls are no-ops.
  pub fn select_answer(&mut self, option: usize) -> bool {
    let Phase::Running(test) = &mut self.phase else {
      return false;
    };
    if option >= test.questions[test.current].options.len() {
      debug!(target: "assessment", option, "select_answer ignored: option out of range");
      return false;
    }
    test.answers[test.current] = Some(option);
    true
  }

  /// Move to the next question, or finish after the last one. Only enabled
  /// once the current question has an answer recorded.
  /// Returns true when this call finished the test.
  pub fn advance(&mut self) -> bool {
    let Phase::Running(test) = &mut self.phase else {
      return false;
    };
    if test.answers[test.current].is_none() {
      debug!(target: "assessment", current = test.current, "advance ignored: no answer selected");
      return false;
    }
    if test.current + 1 < test.questions.len() {
      test.current += 1;
      false
    } else {
      self.finish();
      true
    }
  }

  /// One countdown second elapsed. At zero the test finishes with whatever
  /// answers exist (unanswered questions count as incorrect).
  /// Returns true when this tick finished the test.
  pub fn tick(&mut self) -> bool {
    let Phase::Running(test) = &mut self.phase else {
      return false;
    };
    test.remaining_secs = test.remaining_secs.saturating_sub(1);
    if test.remaining_secs == 0 {
      info!(target: "assessment", subject = %test.subject, "Time expired; finishing test");
      self.finish();
      true
    } else {
      false
    }
  }

  /// Back to `Idle`, dropping any subject, run, or result.
  pub fn reset(&mut self) {
    self.phase = Phase::Idle;
  }

  fn finish(&mut self) {
    let Phase::Running(test) = &self.phase else {
      return;
    };
    let result = score(test);
    info!(
      target: "assessment",
      subject = %result.subject,
      score = result.score_percent,
      correct = result.correct_count,
      total = result.total_questions,
      seconds_spent = result.seconds_spent,
      "Test finished"
    );
    self.phase = Phase::Finished(result);
  }
}

impl Default for AssessmentEngine {
  fn default() -> Self {
    Self::new()
  }
}

/// Compute the immutable result for a run. An unanswered slot never matches.
fn score(test: &ActiveTest) -> TestResult {
  let total = test.questions.len();
  let correct = test
    .questions
    .iter()
    .zip(&test.answers)
    .filter(|(q, a)| **a == Some(q.correct))
    .count();
  let percent = if total == 0 {
    0
  } else {
    (100.0 * correct as f64 / total as f64).round() as u8
  };
  TestResult {
    subject: test.subject.clone(),
    score_percent: percent,
    correct_count: correct,
    total_questions: total,
    seconds_spent: TIME_BUDGET_SECS - test.remaining_secs,
    level: level_for(percent),
    recommendations: recommendations_for(percent),
  }
}

pub fn level_for(score: u8) -> &'static str {
  if score >= TIER_HIGH {
    "Expert"
  } else if score >= TIER_MID {
    "Advanced"
  } else {
    "Intermediate"
  }
}

/// Three recommendation tiers keyed off the 80/60 boundaries.
pub fn recommendations_for(score: u8) -> Vec<String> {
  let texts: &[&str] = if score >= TIER_HIGH {
    &[
      "Excellent performance! Consider advanced topics in this skill.",
      "Look into contributing to open source projects.",
      "Mentor others in this technology.",
    ]
  } else if score >= TIER_MID {
    &[
      "Good foundation! Focus on advanced concepts.",
      "Practice more hands-on projects.",
      "Review areas where you scored lower.",
    ]
  } else {
    &[
      "Start with fundamentals and basic concepts.",
      "Take structured online courses.",
      "Practice with guided tutorials and examples.",
    ]
  };
  texts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bank() -> Vec<Question> {
    (0..5)
      .map(|i| Question {
        text: format!("question {i}"),
        options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
        correct: i % 4,
      })
      .collect()
  }

  fn running_engine() -> AssessmentEngine {
    let mut e = AssessmentEngine::new();
    assert!(e.choose_subject("React", bank()));
    assert!(e.start());
    e
  }

  #[test]
  fn three_correct_two_unanswered_scores_sixty() {
    let mut e = running_engine();
    for i in 0..3 {
      assert!(e.select_answer(i % 4));
      e.advance();
    }
    // Skip questions 3 and 4 by letting the clock run out.
    while !e.tick() {}
    let Phase::Finished(r) = e.phase() else { panic!("expected finished") };
    assert_eq!(r.correct_count, 3);
    assert_eq!(r.total_questions, 5);
    assert_eq!(r.score_percent, 60);
    assert_eq!(r.level, "Advanced");
    assert!(r.recommendations[0].contains("Good foundation"));
  }

  #[test]
  fn timeout_with_no_answers_scores_zero() {
    let mut e = running_engine();
    let mut finished = false;
    for _ in 0..TIME_BUDGET_SECS {
      finished = e.tick();
      if finished {
        break;
      }
    }
    assert!(finished);
    let Phase::Finished(r) = e.phase() else { panic!("expected finished") };
    assert_eq!(r.score_percent, 0);
    assert_eq!(r.correct_count, 0);
    assert_eq!(r.seconds_spent, TIME_BUDGET_SECS);
    assert_eq!(r.level, "Intermediate");
  }

  #[test]
  fn perfect_run_reaches_top_tier() {
    let mut e = running_engine();
    e.tick();
    e.tick();
    for i in 0..5 {
      assert!(e.select_answer(i % 4));
      e.advance();
    }
    let Phase::Finished(r) = e.phase() else { panic!("expected finished") };
    assert_eq!(r.score_percent, 100);
    assert_eq!(r.seconds_spent, 2);
    assert_eq!(r.level, "Expert");
    assert!(r.recommendations.iter().any(|t| t.contains("Mentor")));
  }

  #[test]
  fn last_answer_wins_and_gates_advance() {
    let mut e = running_engine();
    assert!(!e.advance(), "advance must be disabled before any answer");
    assert!(e.select_answer(2));
    assert!(e.select_answer(0));
    let Phase::Running(t) = e.phase() else { panic!("expected running") };
    assert_eq!(t.answers[0], Some(0));
    assert!(!e.advance());
    let Phase::Running(t) = e.phase() else { panic!("expected running") };
    assert_eq!(t.current, 1);
  }

  #[test]
  fn out_of_range_option_is_ignored() {
    let mut e = running_engine();
    assert!(!e.select_answer(4));
    let Phase::Running(t) = e.phase() else { panic!("expected running") };
    assert_eq!(t.answers[0], None);
  }

  #[test]
  fn engine_is_total_outside_running() {
    let mut e = AssessmentEngine::new();
    assert!(!e.select_answer(0));
    assert!(!e.advance());
    assert!(!e.tick());
    assert!(!e.start());

    e.choose_subject("React", bank());
    assert!(!e.select_answer(0));
    assert!(!e.advance());
    assert!(!e.tick());

    e.start();
    e.select_answer(0);
    while !e.tick() {}
    assert!(!e.select_answer(0));
    assert!(!e.advance());
    assert!(!e.tick());
  }

  #[test]
  fn choose_subject_ignored_while_running() {
    let mut e = running_engine();
    assert!(!e.choose_subject("Python", bank()));
    assert!(e.is_running());
  }

  #[test]
  fn reset_returns_to_idle_from_any_phase() {
    let mut e = running_engine();
    e.select_answer(1);
    e.reset();
    assert!(matches!(e.phase(), Phase::Idle));

    let mut e = AssessmentEngine::new();
    e.choose_subject("React", bank());
    e.reset();
    assert!(matches!(e.phase(), Phase::Idle));
  }

  #[test]
  fn finished_shape_identical_for_timeout_and_manual_finish() {
    let mut manual = running_engine();
    for _ in 0..5 {
      manual.select_answer(0);
      manual.advance();
    }
    let mut timed = running_engine();
    while !timed.tick() {}
    let (Phase::Finished(a), Phase::Finished(b)) = (manual.phase(), timed.phase()) else {
      panic!("both must be finished");
    };
    assert_eq!(a.total_questions, b.total_questions);
    assert_eq!(a.subject, b.subject);
    assert_eq!(b.seconds_spent, TIME_BUDGET_SECS);
  }
}
