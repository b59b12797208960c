//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

//
// Session / profile
//

#[instrument(level = "info", skip(state, body), fields(name = %body.name))]
pub async fn http_login(
  State(state): State<Arc<AppState>>,
  Json(body): Json<LoginIn>,
) -> impl IntoResponse {
  let profile = login(&state, &body.name, &body.phone).await;
  Json(ProfileOut { logged_in: profile.is_some(), profile })
}

#[instrument(level = "info", skip(state))]
pub async fn http_logout(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  state.store.set_profile(None).await;
  info!(target: "session", "User logged out");
  Json(ProfileOut { logged_in: false, profile: None })
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_profile(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let profile = state.store.profile().await;
  Json(ProfileOut { logged_in: profile.is_some(), profile })
}

#[instrument(level = "info", skip(state, body))]
pub async fn http_put_profile(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ProfileUpdateIn>,
) -> impl IntoResponse {
  let profile = update_profile(&state, body).await;
  Json(ProfileOut { logged_in: profile.is_some(), profile })
}

//
// Skills tracker
//

#[instrument(level = "info", skip(state))]
pub async fn http_get_skills(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(to_skills_out(&state.store.skills().await))
}

#[instrument(level = "info", skip(state, body), fields(name = %body.name))]
pub async fn http_add_skill(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SkillIn>,
) -> impl IntoResponse {
  add_skill(&state, &body.name, body.progress, body.category).await;
  Json(to_skills_out(&state.store.skills().await))
}

#[instrument(level = "info", skip(state, body), fields(index, name = %body.name))]
pub async fn http_update_skill(
  State(state): State<Arc<AppState>>,
  Path(index): Path<usize>,
  Json(body): Json<SkillIn>,
) -> impl IntoResponse {
  update_skill(&state, index, &body.name, body.progress, body.category).await;
  Json(to_skills_out(&state.store.skills().await))
}

#[instrument(level = "info", skip(state), fields(index))]
pub async fn http_remove_skill(
  State(state): State<Arc<AppState>>,
  Path(index): Path<usize>,
) -> impl IntoResponse {
  remove_skill(&state, index).await;
  Json(to_skills_out(&state.store.skills().await))
}

//
// Job applications
//

#[instrument(level = "info", skip(state))]
pub async fn http_get_jobs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let jobs = state.store.jobs().await;
  let counts = count_statuses(&jobs);
  Json(JobsOut { jobs, counts })
}

#[instrument(level = "info", skip(state, body), fields(title = %body.title, company = %body.company))]
pub async fn http_add_job(
  State(state): State<Arc<AppState>>,
  Json(body): Json<JobIn>,
) -> impl IntoResponse {
  add_job(&state, &body.title, &body.company).await;
  let jobs = state.store.jobs().await;
  let counts = count_statuses(&jobs);
  Json(JobsOut { jobs, counts })
}

#[instrument(level = "info", skip(state, body), fields(%id, status = ?body.status))]
pub async fn http_set_job_status(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<JobStatusIn>,
) -> impl IntoResponse {
  set_job_status(&state, &id, body.status).await;
  let jobs = state.store.jobs().await;
  let counts = count_statuses(&jobs);
  Json(JobsOut { jobs, counts })
}

//
// Assessment
//

#[instrument(level = "info", skip(state))]
pub async fn http_get_assessment(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(state.assessment_snapshot().await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_subjects(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(SubjectsOut { subjects: state.subjects() })
}

#[instrument(level = "info", skip(state, body), fields(subject = %body.subject))]
pub async fn http_choose_subject(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ChooseSubjectIn>,
) -> impl IntoResponse {
  state.choose_subject(&body.subject).await;
  Json(state.assessment_snapshot().await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_start_test(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  state.start_assessment().await;
  Json(state.assessment_snapshot().await)
}

#[instrument(level = "info", skip(state, body), fields(option = body.option))]
pub async fn http_select_answer(
  State(state): State<Arc<AppState>>,
  Json(body): Json<AnswerIn>,
) -> impl IntoResponse {
  state.select_answer(body.option).await;
  Json(state.assessment_snapshot().await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_advance_test(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  state.advance_assessment().await;
  Json(state.assessment_snapshot().await)
}

#[instrument(level = "info", skip(state))]
pub async fn http_reset_test(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  state.reset_assessment().await;
  Json(state.assessment_snapshot().await)
}

//
// Interview / resume tooling
//

#[instrument(level = "info", skip(body), fields(text_len = body.text.len()))]
pub async fn http_analyze_resume(Json(body): Json<ResumeIn>) -> impl IntoResponse {
  info!(target: "session", text = %trunc_for_log(&body.text, 80), "Resume analysis requested");
  let score = analyze_resume(&body.text, &mut rand::thread_rng());
  Json(ResumeOut { score })
}

#[instrument(level = "info", skip(state))]
pub async fn http_start_interview(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let questions = pick_interview_questions(&state.interview_pool, &mut rand::thread_rng());
  Json(InterviewOut { questions })
}

//
// Reports and static content
//

#[instrument(level = "info", skip(state))]
pub async fn http_generate_report(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let report = generate_report(&state).await;
  Json(report)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_careers(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let careers: Vec<CareerSummaryOut> = state.careers.iter().map(to_career_summary).collect();
  Json(careers)
}

#[instrument(level = "info", skip(state), fields(id))]
pub async fn http_get_career_detail(
  State(state): State<Arc<AppState>>,
  Path(id): Path<u32>,
) -> impl IntoResponse {
  match state.career(id) {
    Some(career) => Json(career.clone()).into_response(),
    None => (
      StatusCode::NOT_FOUND,
      Json(serde_json::json!({ "message": "Career path not found" })),
    )
      .into_response(),
  }
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_faq(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(FaqOut { entries: state.faqs.clone() })
}
