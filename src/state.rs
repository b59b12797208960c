//! Application state: the session store, the assessment engine and its
//! countdown task, and the static content tables.
//!
//! This module owns:
//!   - the `SessionStore` (profile / skills / jobs for the current run)
//!   - the assessment engine slot plus its once-per-second countdown
//!   - subject banks (built-ins merged with the optional TOML config)
//!   - the career catalog, FAQ list, and interview question pool
//!
//! The countdown is the one resource whose lifetime matters: a ticking task
//! must never outlive the run it was started for. Every transition out of
//! `Running` bumps a generation counter and aborts the task, so a stale
//! timer cannot touch a superseded session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::AbortHandle;
use tracing::{error, info, instrument, warn};

use crate::assessment::AssessmentEngine;
use crate::catalog;
use crate::config::{bank_from_cfg, load_content_config_from_env};
use crate::domain::{CareerPath, FaqEntry, SubjectBank};
use crate::protocol::{assessment_view, AssessmentView};
use crate::store::SessionStore;

struct CountdownSlot {
  generation: u64,
  handle: Option<AbortHandle>,
}

pub struct AppState {
  pub store: SessionStore,
  assessment: RwLock<AssessmentEngine>,
  timer: Mutex<CountdownSlot>,
  banks: Vec<SubjectBank>,
  pub careers: Vec<CareerPath>,
  pub faqs: Vec<FaqEntry>,
  pub interview_pool: Vec<String>,
}

impl AppState {
  /// Build state from env: built-in content tables, plus any extra subject
  /// banks from the TOML content config (config wins on name clash).
  #[instrument(level = "info", skip_all)]
  pub fn new() -> Self {
    let mut banks = catalog::subject_banks();
    if let Some(cfg) = load_content_config_from_env() {
      for sc in &cfg.subjects {
        let Some(bank) = bank_from_cfg(sc) else { continue };
        match banks.iter_mut().find(|b| b.subject == bank.subject) {
          Some(existing) => {
            warn!(target: "careerpath_backend", subject = %bank.subject, "Config bank overrides built-in subject");
            *existing = bank;
          }
          None => banks.push(bank),
        }
      }
    }

    let careers = catalog::career_paths();
    let faqs = catalog::faq_entries();
    let interview_pool = catalog::interview_questions();
    info!(
      target: "careerpath_backend",
      subjects = banks.len(),
      careers = careers.len(),
      faq = faqs.len(),
      interview_pool = interview_pool.len(),
      "Startup content inventory"
    );

    Self {
      store: SessionStore::new(),
      assessment: RwLock::new(AssessmentEngine::new()),
      timer: Mutex::new(CountdownSlot { generation: 0, handle: None }),
      banks,
      careers,
      faqs,
      interview_pool,
    }
  }

  pub fn subjects(&self) -> Vec<String> {
    self.banks.iter().map(|b| b.subject.clone()).collect()
  }

  pub fn bank(&self, subject: &str) -> Option<&SubjectBank> {
    self.banks.iter().find(|b| b.subject == subject)
  }

  /// Catalog lookup; unknown ids yield None, not a failure.
  pub fn career(&self, id: u32) -> Option<&CareerPath> {
    self.careers.iter().find(|c| c.id == id)
  }

  /// Pick a subject for the next test. Unknown subjects and calls made
  /// while a test is running are rejected.
  #[instrument(level = "info", skip(self), fields(%subject))]
  pub async fn choose_subject(&self, subject: &str) -> bool {
    let Some(bank) = self.bank(subject) else {
      error!(target: "assessment", %subject, "Unknown subject");
      return false;
    };
    let questions = bank.questions.clone();
    self.assessment.write().await.choose_subject(subject, questions)
  }

  /// Start the selected test and spawn its countdown. Returns false when no
  /// subject is selected (or a test is already running).
  #[instrument(level = "info", skip(self))]
  pub async fn start_assessment(self: &Arc<Self>) -> bool {
    if !self.assessment.write().await.start() {
      return false;
    }
    let generation = self.cancel_countdown().await;
    self.spawn_countdown(generation).await;
    true
  }

  pub async fn select_answer(&self, option: usize) -> bool {
    self.assessment.write().await.select_answer(option)
  }

  /// Advance to the next question; cancels the countdown when this call
  /// finished the test.
  pub async fn advance_assessment(&self) -> bool {
    let finished = self.assessment.write().await.advance();
    if finished {
      self.cancel_countdown().await;
    }
    finished
  }

  /// Abandon whatever is in flight and return to `Idle`.
  #[instrument(level = "info", skip(self))]
  pub async fn reset_assessment(&self) {
    self.cancel_countdown().await;
    self.assessment.write().await.reset();
  }

  pub async fn assessment_snapshot(&self) -> AssessmentView {
    assessment_view(&*self.assessment.read().await)
  }

  /// Abort the current countdown (if any) and invalidate its generation.
  /// Returns the new generation value.
  async fn cancel_countdown(&self) -> u64 {
    let mut slot = self.timer.lock().await;
    slot.generation += 1;
    if let Some(handle) = slot.handle.take() {
      handle.abort();
    }
    slot.generation
  }

  async fn spawn_countdown(self: &Arc<Self>, generation: u64) {
    let state = Arc::clone(self);
    let task = tokio::spawn(async move {
      let mut interval = tokio::time::interval(Duration::from_secs(1));
      // The first tick of a tokio interval completes immediately.
      interval.tick().await;
      loop {
        interval.tick().await;
        // A superseded timer must not touch the engine.
        if state.timer.lock().await.generation != generation {
          break;
        }
        let finished = state.assessment.write().await.tick();
        if finished {
          state.cancel_countdown().await;
          break;
        }
      }
    });
    let mut slot = self.timer.lock().await;
    // Only install if nothing newer raced us.
    if slot.generation == generation {
      slot.handle = Some(task.abort_handle());
    } else {
      task.abort();
    }
  }
}

impl Default for AppState {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn unknown_subject_is_rejected() {
    let state = Arc::new(AppState::new());
    assert!(!state.choose_subject("COBOL").await);
    assert!(matches!(state.assessment_snapshot().await, AssessmentView::Idle));
  }

  #[tokio::test]
  async fn built_in_subjects_are_available() {
    let state = AppState::new();
    let subjects = state.subjects();
    for s in ["React", "Python", "JavaScript"] {
      assert!(subjects.iter().any(|x| x == s), "missing subject {s}");
    }
    assert_eq!(state.bank("React").expect("bank").questions.len(), 5);
  }

  #[tokio::test]
  async fn career_lookup_misses_yield_none() {
    let state = AppState::new();
    assert!(state.career(1).is_some());
    assert!(state.career(999).is_none());
  }

  #[tokio::test]
  async fn start_requires_a_selected_subject() {
    let state = Arc::new(AppState::new());
    assert!(!state.start_assessment().await);
    assert!(state.choose_subject("Python").await);
    assert!(state.start_assessment().await);
    assert!(matches!(state.assessment_snapshot().await, AssessmentView::Running { .. }));
    state.reset_assessment().await;
  }

  #[tokio::test]
  async fn countdown_ticks_while_running() {
    let state = Arc::new(AppState::new());
    state.choose_subject("React").await;
    state.start_assessment().await;

    tokio::time::sleep(Duration::from_millis(2300)).await;
    let AssessmentView::Running { remaining_secs, .. } = state.assessment_snapshot().await else {
      panic!("expected running");
    };
    assert!(remaining_secs < crate::assessment::TIME_BUDGET_SECS);
    state.reset_assessment().await;
  }

  #[tokio::test]
  async fn reset_cancels_the_countdown_for_good() {
    let state = Arc::new(AppState::new());
    state.choose_subject("React").await;
    state.start_assessment().await;
    state.reset_assessment().await;

    // A stale timer would need over a second to fire; nothing may move us
    // out of Idle in the meantime.
    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert!(matches!(state.assessment_snapshot().await, AssessmentView::Idle));
  }

  #[tokio::test]
  async fn restarting_supersedes_the_previous_countdown() {
    let state = Arc::new(AppState::new());
    state.choose_subject("React").await;
    state.start_assessment().await;
    state.reset_assessment().await;
    state.choose_subject("Python").await;
    state.start_assessment().await;

    let AssessmentView::Running { subject, .. } = state.assessment_snapshot().await else {
      panic!("expected running");
    };
    assert_eq!(subject, "Python");
    state.reset_assessment().await;
  }

  #[tokio::test]
  async fn finishing_by_advance_leaves_a_result() {
    let state = Arc::new(AppState::new());
    state.choose_subject("React").await;
    state.start_assessment().await;
    for _ in 0..5 {
      assert!(state.select_answer(0).await);
      state.advance_assessment().await;
    }
    let AssessmentView::Finished { result } = state.assessment_snapshot().await else {
      panic!("expected finished");
    };
    assert_eq!(result.total_questions, 5);
    assert_eq!(result.subject, "React");
  }
}
