//! Session store: the single in-memory source of truth for the profile, the
//! tracked skills, and the job applications of the current run.
//!
//! The store is a dumb holder: reads return clones, writes replace the whole
//! value (callers copy-mutate-on-write). No validation happens here and no
//! operation can fail. Nothing survives process exit.
//!
//! Consumers that want to react to changes can subscribe to the revision
//! watch channel instead of polling.

use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::{debug, instrument};

use crate::domain::{JobApplication, Skill, UserProfile};

#[derive(Clone)]
pub struct SessionStore {
  profile: Arc<RwLock<Option<UserProfile>>>,
  skills: Arc<RwLock<Vec<Skill>>>,
  jobs: Arc<RwLock<Vec<JobApplication>>>,
  revision_tx: Arc<watch::Sender<u64>>,
}

impl SessionStore {
  pub fn new() -> Self {
    let (revision_tx, _) = watch::channel(0);
    Self {
      profile: Arc::new(RwLock::new(None)),
      skills: Arc::new(RwLock::new(Vec::new())),
      jobs: Arc::new(RwLock::new(Vec::new())),
      revision_tx: Arc::new(revision_tx),
    }
  }

  pub async fn profile(&self) -> Option<UserProfile> {
    self.profile.read().await.clone()
  }

  /// Full replace. `None` logs the user out.
  #[instrument(level = "debug", skip_all, fields(present = profile.is_some()))]
  pub async fn set_profile(&self, profile: Option<UserProfile>) {
    *self.profile.write().await = profile;
    self.bump();
  }

  pub async fn is_logged_in(&self) -> bool {
    self.profile.read().await.is_some()
  }

  pub async fn skills(&self) -> Vec<Skill> {
    self.skills.read().await.clone()
  }

  #[instrument(level = "debug", skip_all, fields(count = skills.len()))]
  pub async fn set_skills(&self, skills: Vec<Skill>) {
    *self.skills.write().await = skills;
    self.bump();
  }

  pub async fn jobs(&self) -> Vec<JobApplication> {
    self.jobs.read().await.clone()
  }

  #[instrument(level = "debug", skip_all, fields(count = jobs.len()))]
  pub async fn set_jobs(&self, jobs: Vec<JobApplication>) {
    *self.jobs.write().await = jobs;
    self.bump();
  }

  /// Subscribe to replacement events. The value is a monotonic revision;
  /// receivers only care that it changed.
  pub fn subscribe(&self) -> watch::Receiver<u64> {
    self.revision_tx.subscribe()
  }

  fn bump(&self) {
    self.revision_tx.send_modify(|rev| *rev += 1);
    debug!(target: "session", revision = *self.revision_tx.borrow(), "Store updated");
  }
}

impl Default for SessionStore {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{JobStatus, SkillCategory};

  fn profile(name: &str) -> UserProfile {
    UserProfile {
      name: name.into(),
      phone: "555-0100".into(),
      education: String::new(),
      career_goal: String::new(),
      bio: String::new(),
      skills: vec![],
      interests: vec![],
      photo: None,
      resume: None,
    }
  }

  #[tokio::test]
  async fn reads_before_any_set_return_defaults() {
    let store = SessionStore::new();
    assert!(store.profile().await.is_none());
    assert!(!store.is_logged_in().await);
    assert!(store.skills().await.is_empty());
    assert!(store.jobs().await.is_empty());
  }

  #[tokio::test]
  async fn logged_in_iff_profile_present() {
    let store = SessionStore::new();
    store.set_profile(Some(profile("Ada"))).await;
    assert!(store.is_logged_in().await);
    store.set_profile(None).await;
    assert!(!store.is_logged_in().await);
  }

  #[tokio::test]
  async fn set_replaces_instead_of_merging() {
    let store = SessionStore::new();
    store
      .set_skills(vec![
        Skill { name: "React".into(), progress: 40, category: SkillCategory::Technical },
        Skill { name: "Spanish".into(), progress: 70, category: SkillCategory::Languages },
      ])
      .await;
    store
      .set_skills(vec![Skill {
        name: "SQL".into(),
        progress: 10,
        category: SkillCategory::Technical,
      }])
      .await;
    let skills = store.skills().await;
    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].name, "SQL");

    store
      .set_jobs(vec![JobApplication {
        id: "j1".into(),
        title: "Backend Engineer".into(),
        company: "Acme".into(),
        status: JobStatus::Applied,
        applied_date: "2026-08-29".into(),
      }])
      .await;
    store.set_jobs(Vec::new()).await;
    assert!(store.jobs().await.is_empty());
  }

  #[tokio::test]
  async fn subscribers_see_every_replacement() {
    let store = SessionStore::new();
    let mut rx = store.subscribe();
    let before = *rx.borrow_and_update();
    store.set_skills(Vec::new()).await;
    store.set_profile(Some(profile("Ada"))).await;
    rx.changed().await.expect("sender alive");
    assert!(*rx.borrow_and_update() > before);
  }
}
