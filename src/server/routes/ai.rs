//! AI routing endpoints
//!
//! - `GET  /api/ai/config` - routing stats
//! - `POST /api/ai/config` - switch strategy
//! - `POST /api/ai/chat`   - generate a reply through the load balancer

use crate::core::router::{ProviderStats, RouterError, RoutingStrategy};
use crate::core::types::{
    Context, GenerationRequest, GenerationResult, Message, system_message_count,
    system_prompt_well_formed,
};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configure AI routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/ai")
            .route("/config", web::get().to(get_config))
            .route("/config", web::post().to(update_config))
            .route("/chat", web::post().to(chat)),
    );
}

/// Strategy switch request
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyUpdateRequest {
    pub strategy: String,
}

/// Strategy switch response
#[derive(Debug, Clone, Serialize)]
pub struct StrategyUpdateResponse {
    pub message: &'static str,
    pub strategy: RoutingStrategy,
    pub stats: ProviderStats,
}

/// Chat request
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    #[serde(default)]
    pub context: Option<Context>,
}

/// Chat response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u64>,
    /// True when the reply came from the fallback responder
    pub fallback: bool,
}

impl From<GenerationResult> for ChatResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            content: result.content,
            provider: Some(result.provider_name),
            model: Some(result.model_name),
            tokens_used: result.tokens_used,
            fallback: false,
        }
    }
}

impl ChatResponse {
    fn from_fallback(content: String) -> Self {
        Self {
            content,
            provider: None,
            model: None,
            tokens_used: None,
            fallback: true,
        }
    }
}

async fn get_config(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.load_balancer.get_provider_stats())
}

async fn update_config(
    state: web::Data<AppState>,
    request: web::Json<StrategyUpdateRequest>,
) -> Result<HttpResponse> {
    let strategy = state.load_balancer.set_strategy(&request.strategy)?;

    Ok(HttpResponse::Ok().json(StrategyUpdateResponse {
        message: "Strategy updated",
        strategy,
        stats: state.load_balancer.get_provider_stats(),
    }))
}

async fn chat(state: web::Data<AppState>, request: web::Json<ChatRequest>) -> Result<HttpResponse> {
    let ChatRequest { messages, context } = request.into_inner();
    if messages.is_empty() {
        return Err(GatewayError::bad_request("messages must not be empty"));
    }
    if !system_prompt_well_formed(&messages) {
        // Forwarded as-is; order is the caller's
        warn!(
            system_messages = system_message_count(&messages),
            "Conversation should carry at most one system message, first"
        );
    }

    let request = GenerationRequest { messages, context };
    match state.load_balancer.generate(&request).await {
        Ok(result) => {
            info!(
                provider = %result.provider_name,
                tokens = ?result.tokens_used,
                "Chat answered"
            );
            Ok(HttpResponse::Ok().json(ChatResponse::from(result)))
        }
        Err(RouterError::AllProvidersFailed {
            strategy,
            candidates,
        }) => {
            warn!(
                strategy = %strategy,
                candidates,
                "AI unavailable, serving fallback reply"
            );
            let content = state
                .fallback
                .respond(request.messages(), request.context.as_ref());
            Ok(HttpResponse::Ok().json(ChatResponse::from_fallback(content)))
        }
        Err(e) => Err(e.into()),
    }
}
