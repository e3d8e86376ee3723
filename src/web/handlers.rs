use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::analysis::CropAssessment;
use crate::chat::{catalog, ChatMessage, Conversation, Lang};
use crate::error::AdvisorError;
use crate::io::{load_lang, load_state, save_lang, save_state, PersistedState};
use crate::models::{FarmInput, Recommendation};
use crate::platform::SilentSpeaker;

use super::state::AppState;

// ---------------------------------------------------------------------------
// Error wrapper
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

#[derive(Debug)]
pub(crate) struct WebError(AdvisorError);

impl From<AdvisorError> for WebError {
    fn from(e: AdvisorError) -> Self {
        WebError(e)
    }
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for WebError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_type) = match &self.0 {
            AdvisorError::ValidationError(_) | AdvisorError::ParseError(_) => {
                (actix_web::http::StatusCode::BAD_REQUEST, "Bad Request")
            }
            AdvisorError::NotFound(_) => (actix_web::http::StatusCode::NOT_FOUND, "Not Found"),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ),
        };
        HttpResponse::build(status).json(ErrorBody {
            error: error_type.to_string(),
            details: self.0.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Request / response bodies
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
struct RecommendResponse {
    recommendations: Vec<Recommendation>,
}

#[derive(Serialize)]
struct ExplainResponse {
    assessments: Vec<CropAssessment>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    form: FarmInput,
    message: String,
    #[serde(default)]
    lang: Option<Lang>,
    #[serde(default)]
    image_attached: bool,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
pub struct LangBody {
    lang: Lang,
}

// ---------------------------------------------------------------------------
// API handlers
// ---------------------------------------------------------------------------

pub async fn crops(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.advisor().profiles())
}

pub async fn recommend(
    state: web::Data<AppState>,
    body: web::Json<FarmInput>,
) -> Result<HttpResponse, WebError> {
    body.validate()?;
    Ok(HttpResponse::Ok().json(RecommendResponse {
        recommendations: state.advisor().recommend(&body),
    }))
}

pub async fn explain(
    state: web::Data<AppState>,
    body: web::Json<FarmInput>,
) -> Result<HttpResponse, WebError> {
    body.validate()?;
    Ok(HttpResponse::Ok().json(ExplainResponse {
        assessments: state.advisor().rank_all(&body),
    }))
}

/// Answer one chat message against the submitted form and persist the
/// updated conversation.
pub async fn chat(
    state: web::Data<AppState>,
    body: web::Json<ChatRequest>,
) -> Result<HttpResponse, WebError> {
    let ChatRequest {
        form,
        message,
        lang,
        image_attached,
    } = body.into_inner();

    form.validate()?;
    if message.trim().is_empty() {
        return Err(AdvisorError::ValidationError("Message is empty".to_string()).into());
    }

    let recs = state.advisor().recommend(&form);

    let response = state.with_store(|store| {
        let lang = match lang {
            Some(lang) => lang,
            None => load_lang(store, None)?,
        };
        let history = load_state(store)?.map(|s| s.messages).unwrap_or_default();

        let mut convo = Conversation::from_messages(history);
        convo.set_draft(message);
        convo.attach_image(image_attached);
        let reply = convo
            .send(&recs, lang, &mut SilentSpeaker)
            .map(|m| m.text.clone())
            .ok_or_else(|| AdvisorError::NotFound("No recommendation available".to_string()))?;

        let messages = convo.into_messages();
        save_state(
            store,
            &PersistedState {
                form: Some(form),
                messages: messages.clone(),
            },
        )?;
        Ok(ChatResponse { reply, messages })
    })?;

    Ok(HttpResponse::Ok().json(response))
}

pub async fn get_state(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let saved = state
        .with_store(|store| load_state(store))?
        .ok_or_else(|| AdvisorError::NotFound("No saved state".to_string()))?;
    Ok(HttpResponse::Ok().json(saved))
}

pub async fn put_state(
    state: web::Data<AppState>,
    body: web::Json<PersistedState>,
) -> Result<HttpResponse, WebError> {
    if let Some(form) = &body.form {
        form.validate()?;
    }
    state.with_store(|store| save_state(store, &body))?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_lang(state: web::Data<AppState>) -> Result<HttpResponse, WebError> {
    let lang = state.with_store(|store| load_lang(store, None))?;
    Ok(HttpResponse::Ok().json(LangBody { lang }))
}

pub async fn put_lang(
    state: web::Data<AppState>,
    body: web::Json<LangBody>,
) -> Result<HttpResponse, WebError> {
    state.with_store(|store| save_lang(store, body.lang))?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn i18n(path: web::Path<String>) -> Result<HttpResponse, WebError> {
    let lang: Lang = path.into_inner().parse()?;
    Ok(HttpResponse::Ok().json(catalog(lang)))
}

// ---------------------------------------------------------------------------
// Static file handlers
// ---------------------------------------------------------------------------

pub async fn index_html() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html"))
}

pub async fn app_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(include_str!("../../static/app.js"))
}

pub async fn style_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(include_str!("../../static/style.css"))
}
