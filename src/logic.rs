//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Onboarding and profile merge-updates
//!   - Skills tracker mutations (validated here, not in the store)
//!   - Job application add / status updates
//!   - Stubbed "AI" features: ATS resume score, mock interview sampling,
//!     simulated report generation
//!
//! Invalid input is handled locally and silently: the attempted mutation is
//! simply not applied and the caller gets a negative/empty answer back.

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::domain::{JobApplication, JobStatus, Skill, SkillCategory, UserProfile};
use crate::protocol::{ProfileUpdateIn, ReportOut, ReportSectionOut};
use crate::state::AppState;
use crate::util::today_ymd;

/// How long the fake report "generation" takes.
const REPORT_DELAY: Duration = Duration::from_secs(2);

/// Onboarding: name and phone are both required (after trim). Creates the
/// profile with all optional fields empty. Returns None on invalid input.
#[instrument(level = "info", skip(state, phone))]
pub async fn login(state: &AppState, name: &str, phone: &str) -> Option<UserProfile> {
  let name = name.trim();
  let phone = phone.trim();
  if name.is_empty() || phone.is_empty() {
    debug!(target: "session", "Login rejected: missing name or phone");
    return None;
  }
  let profile = UserProfile {
    name: name.to_string(),
    phone: phone.to_string(),
    education: String::new(),
    career_goal: String::new(),
    bio: String::new(),
    skills: Vec::new(),
    interests: Vec::new(),
    photo: None,
    resume: None,
  };
  state.store.set_profile(Some(profile.clone())).await;
  info!(target: "session", user = %profile.name, "User logged in");
  Some(profile)
}

/// Replace-with-merge profile update: supplied fields overwrite, omitted
/// fields (including the reserved photo/resume slots) are retained.
/// No-op when nobody is logged in.
#[instrument(level = "info", skip_all)]
pub async fn update_profile(state: &AppState, update: ProfileUpdateIn) -> Option<UserProfile> {
  let mut profile = state.store.profile().await?;
  if let Some(name) = update.name {
    let name = name.trim().to_string();
    if !name.is_empty() {
      profile.name = name;
    }
  }
  if let Some(phone) = update.phone {
    let phone = phone.trim().to_string();
    if !phone.is_empty() {
      profile.phone = phone;
    }
  }
  if let Some(education) = update.education {
    profile.education = education;
  }
  if let Some(goal) = update.career_goal {
    profile.career_goal = goal;
  }
  if let Some(bio) = update.bio {
    profile.bio = bio;
  }
  if let Some(skills) = update.skills {
    profile.skills = trimmed_tags(skills);
  }
  if let Some(interests) = update.interests {
    profile.interests = trimmed_tags(interests);
  }
  state.store.set_profile(Some(profile.clone())).await;
  info!(target: "session", user = %profile.name, "Profile updated");
  Some(profile)
}

fn trimmed_tags(tags: Vec<String>) -> Vec<String> {
  tags
    .into_iter()
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty())
    .collect()
}

/// Append a tracked skill. Empty names are rejected; progress is clamped
/// into [0, 100].
#[instrument(level = "info", skip(state), fields(%name, progress))]
pub async fn add_skill(state: &AppState, name: &str, progress: i32, category: SkillCategory) -> bool {
  let name = name.trim();
  if name.is_empty() {
    debug!(target: "session", "add_skill rejected: empty name");
    return false;
  }
  let mut skills = state.store.skills().await;
  skills.push(Skill {
    name: name.to_string(),
    progress: clamp_progress(progress),
    category,
  });
  state.store.set_skills(skills).await;
  true
}

/// Edit the skill at `index` in place. Unknown indices and empty names are
/// no-ops.
#[instrument(level = "info", skip(state), fields(index, %name))]
pub async fn update_skill(
  state: &AppState,
  index: usize,
  name: &str,
  progress: i32,
  category: SkillCategory,
) -> bool {
  let name = name.trim();
  if name.is_empty() {
    return false;
  }
  let mut skills = state.store.skills().await;
  let Some(slot) = skills.get_mut(index) else {
    debug!(target: "session", index, "update_skill rejected: no such index");
    return false;
  };
  *slot = Skill { name: name.to_string(), progress: clamp_progress(progress), category };
  state.store.set_skills(skills).await;
  true
}

#[instrument(level = "info", skip(state), fields(index))]
pub async fn remove_skill(state: &AppState, index: usize) -> bool {
  let mut skills = state.store.skills().await;
  if index >= skills.len() {
    return false;
  }
  skills.remove(index);
  state.store.set_skills(skills).await;
  true
}

fn clamp_progress(progress: i32) -> u8 {
  progress.clamp(0, 100) as u8
}

/// Add a job application. Title and company are both required; status and
/// date default to "applied" / today. Ids are uuid-v4, collision-free even
/// across rapid adds.
#[instrument(level = "info", skip(state), fields(%title, %company))]
pub async fn add_job(state: &AppState, title: &str, company: &str) -> Option<JobApplication> {
  let title = title.trim();
  let company = company.trim();
  if title.is_empty() || company.is_empty() {
    debug!(target: "session", "add_job rejected: missing title or company");
    return None;
  }
  let job = JobApplication {
    id: Uuid::new_v4().to_string(),
    title: title.to_string(),
    company: company.to_string(),
    status: JobStatus::Applied,
    applied_date: today_ymd(),
  };
  let mut jobs = state.store.jobs().await;
  jobs.push(job.clone());
  state.store.set_jobs(jobs).await;
  info!(target: "session", id = %job.id, "Job application added");
  Some(job)
}

/// Update one application's status by id. Unknown ids are a no-op.
#[instrument(level = "info", skip(state), fields(%job_id, ?status))]
pub async fn set_job_status(state: &AppState, job_id: &str, status: JobStatus) -> bool {
  let mut jobs = state.store.jobs().await;
  let Some(job) = jobs.iter_mut().find(|j| j.id == job_id) else {
    debug!(target: "session", %job_id, "set_job_status rejected: unknown id");
    return false;
  };
  job.status = status;
  state.store.set_jobs(jobs).await;
  true
}

/// Placeholder ATS scorer: uniform random in [60, 100]. There is no real
/// analysis behind this number; the rng is injected so tests can seed it.
pub fn ats_score_stub<R: Rng>(rng: &mut R) -> u8 {
  rng.gen_range(60..=100)
}

/// "Analyze" a resume. Empty text is rejected (None); anything else gets a
/// stub score.
#[instrument(level = "info", skip_all, fields(text_len = text.len()))]
pub fn analyze_resume<R: Rng>(text: &str, rng: &mut R) -> Option<u8> {
  if text.trim().is_empty() {
    debug!(target: "session", "Resume analysis rejected: empty text");
    return None;
  }
  let score = ats_score_stub(rng);
  info!(target: "session", score, "Resume scored (stub)");
  Some(score)
}

/// Sample five questions for a mock interview round.
pub fn pick_interview_questions<R: Rng>(pool: &[String], rng: &mut R) -> Vec<String> {
  let mut shuffled: Vec<String> = pool.to_vec();
  shuffled.shuffle(rng);
  shuffled.truncate(5);
  shuffled
}

/// Simulated report generation: a short delay, then a static summary. No
/// file is produced. Best-effort: if the caller went away the result is
/// simply dropped.
#[instrument(level = "info", skip(state))]
pub async fn generate_report(state: &AppState) -> ReportOut {
  tokio::time::sleep(REPORT_DELAY).await;
  let report = build_report(state).await;
  info!(target: "session", sections = report.sections.len(), "Report generated (simulated)");
  report
}

pub(crate) async fn build_report(state: &AppState) -> ReportOut {
  let owner = state
    .store
    .profile()
    .await
    .map(|p| p.name)
    .unwrap_or_else(|| "Guest".to_string());
  ReportOut {
    title: format!("Career Development Report: {owner}"),
    generated_at: today_ymd(),
    sections: crate::catalog::report_sections()
      .into_iter()
      .map(|(title, description)| ReportSectionOut { title, description })
      .collect(),
    note: "Simulated report: no file is produced.".into(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn state() -> AppState {
    AppState::new()
  }

  #[tokio::test]
  async fn login_requires_name_and_phone() {
    let state = state();
    assert!(login(&state, "  ", "555-0100").await.is_none());
    assert!(login(&state, "Ada", "").await.is_none());
    assert!(!state.store.is_logged_in().await);

    let profile = login(&state, " Ada ", " 555-0100 ").await.expect("profile");
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.phone, "555-0100");
    assert!(state.store.is_logged_in().await);
  }

  #[tokio::test]
  async fn profile_update_merges_and_keeps_reserved_fields() {
    let state = state();
    login(&state, "Ada", "555-0100").await.expect("login");

    let updated = update_profile(
      &state,
      ProfileUpdateIn {
        education: Some("B.Sc.".into()),
        bio: Some("hello".into()),
        skills: Some(vec![" React ".into(), "".into(), "SQL".into()]),
        ..Default::default()
      },
    )
    .await
    .expect("updated");

    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.education, "B.Sc.");
    assert_eq!(updated.skills, vec!["React".to_string(), "SQL".to_string()]);
    assert!(updated.photo.is_none() && updated.resume.is_none());
  }

  #[tokio::test]
  async fn profile_update_is_noop_when_logged_out() {
    let state = state();
    let res = update_profile(&state, ProfileUpdateIn { bio: Some("x".into()), ..Default::default() }).await;
    assert!(res.is_none());
    assert!(state.store.profile().await.is_none());
  }

  #[tokio::test]
  async fn skill_validation_and_clamping() {
    let state = state();
    assert!(!add_skill(&state, "   ", 50, SkillCategory::Technical).await);
    assert!(add_skill(&state, "React", 150, SkillCategory::Technical).await);
    assert!(add_skill(&state, "Spanish", -3, SkillCategory::Languages).await);

    let skills = state.store.skills().await;
    assert_eq!(skills.len(), 2);
    assert_eq!(skills[0].progress, 100);
    assert_eq!(skills[1].progress, 0);

    assert!(update_skill(&state, 0, "React", 80, SkillCategory::Technical).await);
    assert!(!update_skill(&state, 9, "Ghost", 10, SkillCategory::Other).await);
    assert_eq!(state.store.skills().await[0].progress, 80);

    assert!(remove_skill(&state, 1).await);
    assert!(!remove_skill(&state, 1).await);
    assert_eq!(state.store.skills().await.len(), 1);
  }

  #[tokio::test]
  async fn job_add_defaults_and_unique_ids() {
    let state = state();
    assert!(add_job(&state, "", "Acme").await.is_none());
    assert!(add_job(&state, "Backend Engineer", " ").await.is_none());

    let a = add_job(&state, "Backend Engineer", "Acme").await.expect("job");
    let b = add_job(&state, "Backend Engineer", "Acme").await.expect("job");
    assert_ne!(a.id, b.id);
    assert_eq!(a.status, JobStatus::Applied);
    assert_eq!(a.applied_date, today_ymd());
    assert_eq!(state.store.jobs().await.len(), 2);
  }

  #[tokio::test]
  async fn job_status_updates_by_id_only() {
    let state = state();
    let job = add_job(&state, "Backend Engineer", "Acme").await.expect("job");
    assert!(set_job_status(&state, &job.id, JobStatus::Interview).await);
    assert!(!set_job_status(&state, "missing", JobStatus::Rejected).await);

    let jobs = state.store.jobs().await;
    assert_eq!(jobs[0].status, JobStatus::Interview);
  }

  #[test]
  fn ats_stub_stays_in_bounds_and_is_seedable() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
      let s = ats_score_stub(&mut rng);
      assert!((60..=100).contains(&s));
    }
    let a: Vec<u8> = {
      let mut rng = StdRng::seed_from_u64(42);
      (0..5).map(|_| ats_score_stub(&mut rng)).collect()
    };
    let b: Vec<u8> = {
      let mut rng = StdRng::seed_from_u64(42);
      (0..5).map(|_| ats_score_stub(&mut rng)).collect()
    };
    assert_eq!(a, b);
  }

  #[test]
  fn resume_analysis_rejects_empty_text() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(analyze_resume("  \n ", &mut rng).is_none());
    assert!(analyze_resume("ten years of Rust", &mut rng).is_some());
  }

  #[test]
  fn interview_sampling_takes_five_distinct_questions() {
    let pool = crate::catalog::interview_questions();
    let mut rng = StdRng::seed_from_u64(3);
    let picked = pick_interview_questions(&pool, &mut rng);
    assert_eq!(picked.len(), 5);
    for q in &picked {
      assert!(pool.contains(q));
    }
    let mut unique = picked.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 5);
  }

  #[tokio::test]
  async fn report_names_the_logged_in_user() {
    let state = state();
    let anon = build_report(&state).await;
    assert!(anon.title.contains("Guest"));

    login(&state, "Ada", "555-0100").await.expect("login");
    let named = build_report(&state).await;
    assert!(named.title.contains("Ada"));
    assert_eq!(named.sections.len(), 4);
    assert!(named.note.contains("Simulated"));
  }
}
