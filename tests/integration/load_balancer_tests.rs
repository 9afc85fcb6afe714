//! Load balancer integration tests
//!
//! End-to-end routing scenarios over scripted providers.

#[cfg(test)]
mod tests {
    use crate::common::{ConversationFactory, ScriptedProvider, Step, registry_with};
    use legal_ai_gateway::core::providers::ProviderRegistry;
    use legal_ai_gateway::core::router::{
        LoadBalancer, LoadBalancerConfig, RouterError, RoutingStrategy,
    };
    use legal_ai_gateway::core::types::Message;
    use std::sync::Arc;
    use std::time::Duration;

    fn balancer(registry: ProviderRegistry, strategy: RoutingStrategy) -> LoadBalancer {
        LoadBalancer::new(
            registry,
            LoadBalancerConfig {
                strategy,
                probe_timeout: Duration::from_millis(200),
                ..LoadBalancerConfig::default()
            },
        )
    }

    /// Fallback answers from gemini while openrouter is down
    #[tokio::test]
    async fn test_fallback_scenario_gemini_answers() {
        let gemini = ScriptedProvider::with_default("gemini", Step::reply("hi from gemini"));
        let openrouter = ScriptedProvider::broken("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Fallback,
        );

        let result = lb
            .generate(&ConversationFactory::request(vec![Message::user("hello")]))
            .await
            .unwrap();

        assert_eq!(result.content, "hi from gemini");
        assert_eq!(result.provider_name, "gemini");
        assert_eq!(openrouter.calls(), 0);
    }

    /// Intelligent still tries gemini first for a short question, then openrouter
    #[tokio::test]
    async fn test_intelligent_scenario_openrouter_rescues() {
        let gemini = ScriptedProvider::broken("gemini");
        let openrouter =
            ScriptedProvider::with_default("openrouter", Step::reply("hi from openrouter"));
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );

        let result = lb
            .generate(&ConversationFactory::request(vec![Message::user("hello")]))
            .await
            .unwrap();

        assert_eq!(result.content, "hi from openrouter");
        assert_eq!(result.provider_name, "openrouter");
        assert_eq!(gemini.calls(), 1);
    }

    /// Simple question goes to gemini, which answers
    #[tokio::test]
    async fn test_simple_question_answered_by_light_provider() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );

        let result = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();

        assert_eq!(result.provider_name, "gemini");
        assert!(result.content.starts_with("gemini says: What is the statute"));
        assert_eq!(openrouter.calls(), 0);
    }

    /// Drafting request prefers openrouter; when it fails, gemini answers
    #[tokio::test]
    async fn test_drafting_request_fails_over_to_light_provider() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::with_default("openrouter", Step::rate_limited("openrouter"));
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );

        let result = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::drafting_request(),
            ))
            .await
            .unwrap();

        assert_eq!(result.provider_name, "gemini");
        assert_eq!(openrouter.calls(), 1);
        assert_eq!(gemini.calls(), 1);
    }

    /// Long messages route heavy even without keywords
    #[tokio::test]
    async fn test_long_request_routes_heavy() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );

        let result = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::long_request(),
            ))
            .await
            .unwrap();
        assert_eq!(result.provider_name, "openrouter");
    }

    /// Fallback skips an unavailable provider without calling it
    #[tokio::test]
    async fn test_fallback_skips_unavailable_gemini() {
        let gemini = ScriptedProvider::healthy("gemini");
        gemini.set_available(false);
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Fallback,
        );

        let result = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();

        assert_eq!(result.provider_name, "openrouter");
        assert_eq!(gemini.probes(), 1);
        assert_eq!(gemini.calls(), 0);
    }

    /// Fallback recovers once the preferred provider comes back
    #[tokio::test]
    async fn test_fallback_uses_gemini_again_after_recovery() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Fallback,
        );
        let request = ConversationFactory::request(ConversationFactory::simple_question());

        gemini.set_available(false);
        assert_eq!(lb.generate(&request).await.unwrap().provider_name, "openrouter");

        gemini.set_available(true);
        assert_eq!(lb.generate(&request).await.unwrap().provider_name, "gemini");
    }

    /// Available but failing provider is still called once, then the next one
    #[tokio::test]
    async fn test_fallback_tries_next_after_generation_failure() {
        let gemini = ScriptedProvider::broken("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Fallback,
        );

        let result = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();
        assert_eq!(result.provider_name, "openrouter");
        assert_eq!(gemini.calls(), 1);
    }

    /// Both providers failing surfaces only the aggregate error
    #[tokio::test]
    async fn test_all_providers_failed() {
        let gemini = ScriptedProvider::broken("gemini");
        let openrouter = ScriptedProvider::broken("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );

        let err = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RouterError::AllProvidersFailed {
                strategy: RoutingStrategy::Intelligent,
                candidates: 2,
            }
        );
        assert_eq!(gemini.calls(), 1);
        assert_eq!(openrouter.calls(), 1);
    }

    /// A provider that recovers mid-script is used on the next request
    #[tokio::test]
    async fn test_transient_failure_then_success() {
        let gemini = ScriptedProvider::scripted(
            "gemini",
            vec![Step::network_error("gemini")],
            Step::reply("recovered"),
        );
        let openrouter = ScriptedProvider::broken("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );
        let request = ConversationFactory::request(ConversationFactory::simple_question());

        assert!(lb.generate(&request).await.is_err());
        let result = lb.generate(&request).await.unwrap();
        assert_eq!(result.content, "recovered");
        assert_eq!(result.tokens_used, Some(42));
    }

    /// Round-robin spreads load and keeps rotating through failures
    #[tokio::test]
    async fn test_round_robin_distribution() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::RoundRobin,
        );
        let request = ConversationFactory::request(ConversationFactory::simple_question());

        for _ in 0..6 {
            lb.generate(&request).await.unwrap();
        }
        assert_eq!(gemini.calls(), 3);
        assert_eq!(openrouter.calls(), 3);
    }

    /// Round-robin with one failing provider still answers every request
    #[tokio::test]
    async fn test_round_robin_with_one_broken_provider() {
        let gemini = ScriptedProvider::broken("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::RoundRobin,
        );
        let request = ConversationFactory::request(ConversationFactory::simple_question());

        for _ in 0..4 {
            let result = lb.generate(&request).await.unwrap();
            assert_eq!(result.provider_name, "openrouter");
        }
        // gemini leads every other request
        assert_eq!(gemini.calls(), 2);
        assert_eq!(openrouter.calls(), 4);
    }

    /// Strategy switches apply to the next request
    #[tokio::test]
    async fn test_runtime_strategy_switch() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::Intelligent,
        );
        let request = ConversationFactory::request(ConversationFactory::drafting_request());

        assert_eq!(lb.generate(&request).await.unwrap().provider_name, "openrouter");

        lb.set_strategy("fallback").unwrap();
        assert_eq!(lb.generate(&request).await.unwrap().provider_name, "gemini");
        assert_eq!(lb.get_provider_stats().strategy, RoutingStrategy::Fallback);
    }

    /// Only the registered provider is ever tried
    #[tokio::test]
    async fn test_single_registered_provider() {
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = balancer(registry_with(&[&openrouter]), RoutingStrategy::Intelligent);

        let result = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap();
        assert_eq!(result.provider_name, "openrouter");
        assert_eq!(lb.plan(&ConversationFactory::simple_question()).candidates, vec!["openrouter"]);
    }

    /// A stalled provider is cut off by the request budget
    #[tokio::test]
    async fn test_request_budget() {
        let gemini = ScriptedProvider::with_default("gemini", Step::Stall(Duration::from_secs(30)));
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = LoadBalancer::new(
            registry_with(&[&gemini, &openrouter]),
            LoadBalancerConfig {
                request_budget: Some(Duration::from_millis(150)),
                ..LoadBalancerConfig::default()
            },
        );

        let started = std::time::Instant::now();
        let err = lb
            .generate(&ConversationFactory::request(
                ConversationFactory::simple_question(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, RouterError::AllProvidersFailed { .. }));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    /// Concurrent requests through a shared balancer
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_requests_share_cursor() {
        let gemini = ScriptedProvider::healthy("gemini");
        let openrouter = ScriptedProvider::healthy("openrouter");
        let lb = Arc::new(balancer(
            registry_with(&[&gemini, &openrouter]),
            RoutingStrategy::RoundRobin,
        ));

        let mut handles = Vec::new();
        for _ in 0..20 {
            let lb = Arc::clone(&lb);
            handles.push(tokio::spawn(async move {
                let request =
                    ConversationFactory::request(ConversationFactory::simple_question());
                lb.generate(&request).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        assert_eq!(gemini.calls() + openrouter.calls(), 20);
        assert_eq!(gemini.calls(), 10);
        assert!(lb.get_provider_stats().current_index < 2);
    }
}
