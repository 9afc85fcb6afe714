//! Real provider adapters against mock upstreams
//!
//! Builds the gateway from YAML the way the binary does, points both
//! providers at wiremock servers and checks routing and failover end to end.

#[cfg(test)]
mod tests {
    use crate::common::{ConversationFactory, GatewayYaml};
    use legal_ai_gateway::config::Config;
    use legal_ai_gateway::core::router::{RouterError, RoutingStrategy};
    use legal_ai_gateway::server::AppState;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Upstreams {
        gemini: MockServer,
        openrouter: MockServer,
    }

    impl Upstreams {
        async fn start() -> Self {
            Self {
                gemini: MockServer::start().await,
                openrouter: MockServer::start().await,
            }
        }

        fn state(&self, strategy: &str) -> AppState {
            let yaml = GatewayYaml::with_upstreams(
                &self.gemini.uri(),
                &format!("{}/api/v1", self.openrouter.uri()),
                strategy,
            );
            let config = Config::from_yaml(&yaml).unwrap();
            config.validate().unwrap();
            AppState::from_config(config).unwrap()
        }

        async fn gemini_replies(&self, text: &str) {
            Mock::given(method("POST"))
                .and(path("/models/gemini-pro:generateContent"))
                .and(query_param("key", "test-gemini-key"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": text }] } }],
                    "usageMetadata": { "totalTokenCount": 31 }
                })))
                .mount(&self.gemini)
                .await;
        }

        async fn gemini_status(&self, status: u16) {
            Mock::given(method("POST"))
                .and(path("/models/gemini-pro:generateContent"))
                .respond_with(ResponseTemplate::new(status).set_body_string("upstream error"))
                .mount(&self.gemini)
                .await;
        }

        async fn gemini_probe(&self, status: u16) {
            Mock::given(method("GET"))
                .and(path("/models/gemini-pro"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&self.gemini)
                .await;
        }

        async fn openrouter_replies(&self, text: &str) {
            Mock::given(method("POST"))
                .and(path("/api/v1/chat/completions"))
                .and(header("authorization", "Bearer test-openrouter-key"))
                .and(header("x-title", "Legal Assistant"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "choices": [{ "message": { "role": "assistant", "content": text } }],
                    "usage": { "total_tokens": 58 }
                })))
                .mount(&self.openrouter)
                .await;
        }

        async fn openrouter_status(&self, status: u16) {
            Mock::given(method("POST"))
                .and(path("/api/v1/chat/completions"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&self.openrouter)
                .await;
        }

        async fn gemini_requests(&self) -> usize {
            self.gemini
                .received_requests()
                .await
                .map(|r| r.iter().filter(|r| r.method.as_str() == "POST").count())
                .unwrap_or(0)
        }

        async fn openrouter_requests(&self) -> usize {
            self.openrouter
                .received_requests()
                .await
                .map(|r| r.len())
                .unwrap_or(0)
        }
    }

    #[tokio::test]
    async fn test_intelligent_routes_simple_question_to_gemini() {
        let upstreams = Upstreams::start().await;
        upstreams.gemini_replies("Six years in most states.").await;
        upstreams.openrouter_replies("unused").await;
        let state = upstreams.state("intelligent");

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();

        assert_eq!(result.content, "Six years in most states.");
        assert_eq!(result.provider_name, "gemini");
        assert_eq!(result.model_name, "gemini-pro");
        assert_eq!(result.tokens_used, Some(31));
        assert_eq!(upstreams.openrouter_requests().await, 0);
    }

    #[tokio::test]
    async fn test_intelligent_routes_drafting_to_openrouter() {
        let upstreams = Upstreams::start().await;
        upstreams.gemini_replies("unused").await;
        upstreams.openrouter_replies("MUTUAL NON-DISCLOSURE AGREEMENT ...").await;
        let state = upstreams.state("intelligent");

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::drafting_request(),
            ))
            .await
            .unwrap();

        assert_eq!(result.provider_name, "openrouter");
        assert_eq!(result.tokens_used, Some(58));
        assert_eq!(upstreams.gemini_requests().await, 0);
    }

    #[tokio::test]
    async fn test_rate_limited_heavy_provider_fails_over() {
        let upstreams = Upstreams::start().await;
        upstreams.gemini_replies("Here is a short draft.").await;
        upstreams.openrouter_status(429).await;
        let state = upstreams.state("intelligent");

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::drafting_request(),
            ))
            .await
            .unwrap();

        assert_eq!(result.provider_name, "gemini");
        assert_eq!(upstreams.openrouter_requests().await, 1);
    }

    #[tokio::test]
    async fn test_fallback_skips_gemini_when_probe_fails() {
        let upstreams = Upstreams::start().await;
        upstreams.gemini_probe(503).await;
        upstreams.gemini_replies("unused").await;
        upstreams.openrouter_replies("from openrouter").await;
        let state = upstreams.state("fallback");

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();

        assert_eq!(result.content, "from openrouter");
        assert_eq!(upstreams.gemini_requests().await, 0);
    }

    #[tokio::test]
    async fn test_fallback_prefers_gemini_when_probe_passes() {
        let upstreams = Upstreams::start().await;
        upstreams.gemini_probe(200).await;
        upstreams.gemini_replies("from gemini").await;
        upstreams.openrouter_replies("unused").await;
        let state = upstreams.state("fallback");

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::drafting_request(),
            ))
            .await
            .unwrap();

        assert_eq!(result.content, "from gemini");
        assert_eq!(upstreams.openrouter_requests().await, 0);
    }

    #[tokio::test]
    async fn test_both_upstreams_down() {
        let upstreams = Upstreams::start().await;
        upstreams.gemini_status(500).await;
        upstreams.openrouter_status(502).await;
        let state = upstreams.state("round-robin");

        let err = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RouterError::AllProvidersFailed {
                strategy: RoutingStrategy::RoundRobin,
                candidates: 2,
            }
        );
        assert_eq!(upstreams.gemini_requests().await, 1);
        assert_eq!(upstreams.openrouter_requests().await, 1);
    }

    #[tokio::test]
    async fn test_custom_registration_name_is_reported() {
        let upstreams = Upstreams::start().await;
        upstreams.openrouter_replies("from the heavy entry").await;
        let yaml = format!(
            r#"
providers:
  - name: heavy
    provider_type: openrouter
    api_key: "test-openrouter-key"
    base_url: "{}/api/v1"
    site_name: "Legal Assistant"
router:
  strategy: round-robin
"#,
            upstreams.openrouter.uri()
        );
        let config = Config::from_yaml(&yaml).unwrap();
        config.validate().unwrap();
        let state = AppState::from_config(config).unwrap();

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();

        assert_eq!(result.content, "from the heavy entry");
        assert_eq!(result.provider_name, "heavy");
        assert_eq!(
            state.load_balancer.get_provider_stats().available_providers,
            vec!["heavy"]
        );
    }

    #[tokio::test]
    async fn test_empty_upstream_reply_uses_placeholder() {
        let upstreams = Upstreams::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&upstreams.gemini)
            .await;
        let state = upstreams.state("intelligent");

        let result = state
            .load_balancer
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();

        assert_eq!(result.content, "No response generated");
        assert_eq!(result.provider_name, "gemini");
    }
}
