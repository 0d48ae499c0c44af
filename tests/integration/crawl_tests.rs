//! Integration tests for the harvester
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full fetch-extract-aggregate cycle end-to-end.

use mail_harvest::config::{Config, CrawlConfig, CrawlStrategy, HttpConfig};
use mail_harvest::crawler::{Coordinator, DomainCrawler, PageFetcher};
use mail_harvest::{harvest, DomainResult};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a short request timeout
fn create_test_config(strategy: CrawlStrategy) -> Config {
    Config {
        http: HttpConfig {
            timeout_secs: 1,
            connect_timeout_secs: 1,
            ..HttpConfig::default()
        },
        crawl: CrawlConfig {
            strategy,
            ..CrawlConfig::default()
        },
        ..Config::default()
    }
}

/// The report form of a mock server's base URL (scheme stripped)
fn display_of(mock_server: &MockServer) -> String {
    mock_server
        .uri()
        .trim_start_matches("http://")
        .to_string()
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

/// Mounts a page at `route` on the server
async fn mount_page(mock_server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_page(body))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_only_contact_page_reachable() {
    let mock_server = MockServer::start().await;

    // Every other candidate page falls through to wiremock's default 404
    mount_page(
        &mock_server,
        "/contact",
        r#"<a href="mailto:sales@example.com">Email us</a> or call us"#,
    )
    .await;

    let config = create_test_config(CrawlStrategy::Concurrent);
    let results = harvest(&config, &mock_server.uri())
        .await
        .expect("Harvest failed");

    assert_eq!(
        results,
        vec![DomainResult {
            domain: display_of(&mock_server),
            emails: "sales@example.com".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_emails_merged_across_pages() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/", "Questions? hello@example.com").await;
    mount_page(
        &mock_server,
        "/about",
        r#"<a href="mailto:press@example.com?subject=Press">Press</a> hello@example.com"#,
    )
    .await;
    mount_page(&mock_server, "/team", "<p>Ada: ada@example.com</p>").await;

    // Non-success responses contribute nothing, even with a body
    Mock::given(method("GET"))
        .and(path("/support"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops@example.com"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(CrawlStrategy::Concurrent);
    let results = harvest(&config, &mock_server.uri())
        .await
        .expect("Harvest failed");

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].emails,
        "ada@example.com, hello@example.com, press@example.com"
    );
}

#[tokio::test]
async fn test_fetches_all_six_candidate_pages() {
    let mock_server = MockServer::start().await;

    for route in ["/", "/contact", "/about", "/support", "/team", "/info"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(html_page("nothing here"))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(CrawlStrategy::Concurrent);
    let results = harvest(&config, &mock_server.uri())
        .await
        .expect("Harvest failed");

    assert_eq!(results[0].emails, "");
    // Wiremock verifies the `expect(1)` counts when mock_server drops
}

#[tokio::test]
async fn test_slow_page_times_out_without_losing_others() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/contact", "contact@example.com").await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(html_page("late@example.com").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let config = create_test_config(CrawlStrategy::Concurrent);
    let results = harvest(&config, &mock_server.uri())
        .await
        .expect("Harvest failed");

    assert_eq!(results[0].emails, "contact@example.com");
}

#[tokio::test]
async fn test_redirects_are_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/about-us", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/about-us", "jobs@example.com").await;

    let config = create_test_config(CrawlStrategy::Concurrent);
    let results = harvest(&config, &mock_server.uri())
        .await
        .expect("Harvest failed");

    assert_eq!(results[0].emails, "jobs@example.com");
}

#[tokio::test]
async fn test_user_agent_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .and(header("user-agent", "HarvestTest/1.0"))
        .respond_with(html_page("ua@example.com"))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(CrawlStrategy::Concurrent);
    config.http.user_agent = "HarvestTest/1.0".to_string();
    let results = harvest(&config, &mock_server.uri())
        .await
        .expect("Harvest failed");

    assert_eq!(results[0].emails, "ua@example.com");
}

#[tokio::test]
async fn test_order_preserved_with_duplicates() {
    let slow_server = MockServer::start().await;
    let fast_server = MockServer::start().await;

    // The first and last rows complete after the middle one
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("b@b.example").set_delay(Duration::from_millis(300)))
        .mount(&slow_server)
        .await;
    mount_page(&fast_server, "/", "a@a.example").await;

    let input = format!(
        "{}\n{}\n{}",
        slow_server.uri(),
        fast_server.uri(),
        slow_server.uri()
    );

    for strategy in [CrawlStrategy::Concurrent, CrawlStrategy::Sequential] {
        let config = create_test_config(strategy);
        let results = harvest(&config, &input).await.expect("Harvest failed");

        assert_eq!(
            results,
            vec![
                DomainResult {
                    domain: display_of(&slow_server),
                    emails: "b@b.example".to_string(),
                },
                DomainResult {
                    domain: display_of(&fast_server),
                    emails: "a@a.example".to_string(),
                },
                DomainResult {
                    domain: display_of(&slow_server),
                    emails: "b@b.example".to_string(),
                },
            ],
            "strategy {:?}",
            strategy
        );
    }
}

#[tokio::test]
async fn test_blank_lines_skipped() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    mount_page(&first, "/", "one@example.com").await;
    mount_page(&second, "/", "two@example.com").await;

    let input = format!("{}\n\n  \n{}", first.uri(), second.uri());
    let config = create_test_config(CrawlStrategy::Concurrent);
    let results = harvest(&config, &input).await.expect("Harvest failed");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].emails, "one@example.com");
    assert_eq!(results[1].emails, "two@example.com");
}

#[tokio::test]
async fn test_failing_domain_does_not_abort_batch() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "ok@example.com").await;

    let domains = vec![
        "not a domain".to_string(),
        mock_server.uri(),
        // Nothing listens on the discard port
        "http://127.0.0.1:9".to_string(),
    ];

    let config = create_test_config(CrawlStrategy::Concurrent);
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let results = coordinator.run(&domains).await;

    assert_eq!(
        results,
        vec![
            DomainResult::empty("not a domain"),
            DomainResult {
                domain: display_of(&mock_server),
                emails: "ok@example.com".to_string(),
            },
            DomainResult::empty("127.0.0.1:9"),
        ]
    );
}

#[tokio::test]
async fn test_single_connection_ceiling_queues_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("queued@example.com").set_delay(Duration::from_millis(50)))
        .expect(6)
        .mount(&mock_server)
        .await;

    let http = HttpConfig {
        max_connections: 1,
        max_idle_connections: 1,
        ..HttpConfig::default()
    };
    let fetcher = PageFetcher::from_config(&http).expect("Failed to build fetcher");
    let crawler = DomainCrawler::with_common_paths(fetcher);

    let result = crawler
        .crawl_domain(&mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(result.emails, "queued@example.com");
}

/// Starts a server that answers every request after `delay`
async fn slow_server(body: &str, delay: Duration) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_page(body).set_delay(delay))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_domain_pages_fetched_in_parallel() {
    let mock_server = slow_server("x@y.com", Duration::from_millis(400)).await;

    let fetcher = PageFetcher::from_config(&HttpConfig::default()).expect("Failed to build fetcher");
    let crawler = DomainCrawler::with_common_paths(fetcher);

    let started = Instant::now();
    let result = crawler
        .crawl_domain(&mock_server.uri())
        .await
        .expect("Crawl failed");
    let elapsed = started.elapsed();

    assert_eq!(result.emails, "x@y.com");
    // One after another, six pages would take at least 2400ms
    assert!(
        elapsed < Duration::from_millis(1500),
        "six pages took {:?}",
        elapsed
    );
}

/// Four domains of six 400ms pages each, with room for every request at once
async fn run_slow_batch(strategy: CrawlStrategy) -> (Vec<DomainResult>, Duration) {
    let mut servers = Vec::new();
    for _ in 0..4 {
        servers.push(slow_server("x@y.com", Duration::from_millis(400)).await);
    }
    let domains: Vec<String> = servers.iter().map(|s| s.uri()).collect();

    let config = Config {
        http: HttpConfig {
            timeout_secs: 5,
            max_connections: 30,
            ..HttpConfig::default()
        },
        crawl: CrawlConfig {
            strategy,
            ..CrawlConfig::default()
        },
        ..Config::default()
    };
    let coordinator = Coordinator::new(&config).expect("Failed to build coordinator");

    let started = Instant::now();
    let results = coordinator.run(&domains).await;
    let elapsed = started.elapsed();

    (results, elapsed)
}

#[tokio::test]
async fn test_concurrent_strategy_runs_domains_in_parallel() {
    let (results, elapsed) = run_slow_batch(CrawlStrategy::Concurrent).await;

    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.emails == "x@y.com"));
    // Domain after domain would take at least 1600ms
    assert!(
        elapsed < Duration::from_millis(1200),
        "four domains took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_sequential_strategy_runs_domains_in_turn() {
    let (results, elapsed) = run_slow_batch(CrawlStrategy::Sequential).await;

    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.emails == "x@y.com"));
    assert!(
        elapsed >= Duration::from_millis(1600),
        "four domains took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_fetch_page_sentinel_for_missing_page() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/present", "here").await;

    let fetcher = PageFetcher::from_config(&HttpConfig::default()).expect("Failed to build fetcher");

    let present = fetcher
        .fetch_page(&format!("{}/present", mock_server.uri()))
        .await;
    assert!(present.contains("here"));

    let missing = fetcher
        .fetch_page(&format!("{}/missing", mock_server.uri()))
        .await;
    assert_eq!(missing, "");
}
