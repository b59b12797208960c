//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;

use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "careerpath_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "careerpath_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target = "careerpath_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "careerpath_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "careerpath_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &Arc<AppState>) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::Login { name, phone } => {
      let profile = login(state, &name, &phone).await;
      ServerWsMessage::Profile { logged_in: profile.is_some(), profile }
    }

    ClientWsMessage::Logout => {
      state.store.set_profile(None).await;
      info!(target: "session", "User logged out");
      ServerWsMessage::Profile { logged_in: false, profile: None }
    }

    ClientWsMessage::GetProfile => {
      let profile = state.store.profile().await;
      ServerWsMessage::Profile { logged_in: profile.is_some(), profile }
    }

    ClientWsMessage::UpdateProfile { name, phone, education, career_goal, bio, skills, interests } => {
      let update = ProfileUpdateIn { name, phone, education, career_goal, bio, skills, interests };
      let profile = update_profile(state, update).await;
      ServerWsMessage::Profile { logged_in: profile.is_some(), profile }
    }

    ClientWsMessage::GetSkills => skills_reply(state).await,

    ClientWsMessage::AddSkill { name, progress, category } => {
      add_skill(state, &name, progress, category).await;
      skills_reply(state).await
    }

    ClientWsMessage::UpdateSkill { index, name, progress, category } => {
      update_skill(state, index, &name, progress, category).await;
      skills_reply(state).await
    }

    ClientWsMessage::RemoveSkill { index } => {
      remove_skill(state, index).await;
      skills_reply(state).await
    }

    ClientWsMessage::GetJobs => {
      let jobs = state.store.jobs().await;
      let counts = count_statuses(&jobs);
      ServerWsMessage::Jobs { jobs, counts }
    }

    ClientWsMessage::AddJob { title, company } => {
      add_job(state, &title, &company).await;
      let jobs = state.store.jobs().await;
      let counts = count_statuses(&jobs);
      ServerWsMessage::Jobs { jobs, counts }
    }

    ClientWsMessage::SetJobStatus { job_id, status } => {
      set_job_status(state, &job_id, status).await;
      let jobs = state.store.jobs().await;
      let counts = count_statuses(&jobs);
      ServerWsMessage::Jobs { jobs, counts }
    }

    ClientWsMessage::GetSubjects => ServerWsMessage::Subjects { subjects: state.subjects() },

    ClientWsMessage::ChooseSubject { subject } => {
      state.choose_subject(&subject).await;
      ServerWsMessage::TestState { state: state.assessment_snapshot().await }
    }

    ClientWsMessage::StartTest => {
      state.start_assessment().await;
      ServerWsMessage::TestState { state: state.assessment_snapshot().await }
    }

    ClientWsMessage::SelectAnswer { option } => {
      state.select_answer(option).await;
      ServerWsMessage::TestState { state: state.assessment_snapshot().await }
    }

    ClientWsMessage::NextQuestion => {
      state.advance_assessment().await;
      ServerWsMessage::TestState { state: state.assessment_snapshot().await }
    }

    ClientWsMessage::ResetTest => {
      state.reset_assessment().await;
      ServerWsMessage::TestState { state: state.assessment_snapshot().await }
    }

    ClientWsMessage::GetTestState =>
      ServerWsMessage::TestState { state: state.assessment_snapshot().await },

    ClientWsMessage::AnalyzeResume { text } => {
      let score = analyze_resume(&text, &mut rand::thread_rng());
      ServerWsMessage::ResumeScore { score }
    }

    ClientWsMessage::StartInterview => {
      let questions = pick_interview_questions(&state.interview_pool, &mut rand::thread_rng());
      ServerWsMessage::InterviewQuestions { questions }
    }

    ClientWsMessage::GenerateReport => {
      let report = generate_report(state).await;
      ServerWsMessage::Report { report }
    }

    ClientWsMessage::GetCareers => ServerWsMessage::Careers {
      careers: state.careers.iter().map(to_career_summary).collect(),
    },

    ClientWsMessage::GetCareerDetail { id } => match state.career(id) {
      Some(career) => ServerWsMessage::CareerDetail { career: career.clone() },
      None => ServerWsMessage::Error { message: format!("Career path not found: {}", id) },
    },

    ClientWsMessage::GetFaq => ServerWsMessage::Faq { entries: state.faqs.clone() },
  }
}

async fn skills_reply(state: &Arc<AppState>) -> ServerWsMessage {
  let out = to_skills_out(&state.store.skills().await);
  ServerWsMessage::Skills { skills: out.skills, groups: out.groups }
}
