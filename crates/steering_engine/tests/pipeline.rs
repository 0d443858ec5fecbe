use std::fs;
use std::path::Path;
use std::sync::Mutex;

use pretty_assertions::assert_eq;
use steering_core::{EditorKind, ProfileRegistry};
use steering_engine::{
    run_sync, ProgressSink, ReqwestFetcher, SyncConfig, SyncError, SyncEvent,
};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX: &str = "\
# Vue Docs

## Style guide
- [Naming](/vue/docs/style-guide/naming.md)
- [API services](/vue/docs/style-guide/api-services/creating-api-services.md)
- [Changelog](/vue/docs/changelog.md)
## Testing
- [Unit tests](/vue/docs/testing-guide/unit-tests.md)
";

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn config_for(server: &MockServer, root: &Path) -> SyncConfig {
    SyncConfig {
        base_url: server.uri(),
        index_url: format!("{}/vue/llms.txt", server.uri()),
        output_root: root.to_path_buf(),
    }
}

async fn serve(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/markdown"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn failed_document_does_not_abort_the_run() {
    steering_logging::initialize_for_tests();
    let server = MockServer::start().await;
    serve(&server, "/vue/llms.txt", INDEX).await;
    serve(
        &server,
        "/vue/docs/style-guide/naming.md",
        "---\ndescription: naming\n---\n# Naming\nSee [services](/vue/docs/style-guide/api-services/creating-api-services.md).\n",
    )
    .await;
    serve(&server, "/vue/docs/testing-guide/unit-tests.md", "# Unit tests\n").await;
    Mock::given(method("GET"))
        .and(path("/vue/docs/style-guide/api-services/creating-api-services.md"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let registry = ProfileRegistry::builtin();
    let profile = registry.get(EditorKind::Kiro);
    let sink = TestSink::default();

    let report = run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        profile,
        &sink,
    )
    .await
    .expect("run succeeds");

    let out = temp.path().join(".kiro/steering");
    assert_eq!(
        report.saved,
        vec![
            out.join("style-guide/naming.md"),
            out.join("testing-guide/unit-tests.md"),
        ]
    );
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].title, "API services");
    assert!(report.failed[0].message.contains("500"));

    assert_eq!(
        fs::read_to_string(out.join("style-guide/naming.md")).unwrap(),
        "---\ninclusion: always\n---\n# Naming\nSee [services](./api-services/creating-api-services.md).\n"
    );
    assert!(!out.join("style-guide/api-services").exists());
    assert!(!out.join("changelog.md").exists());

    let events = sink.take();
    assert!(events.contains(&SyncEvent::IndexFetched {
        link_count: 3,
        output_dir: ".kiro/steering".into(),
    }));
    let failures: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, SyncEvent::LinkFailed { .. }))
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(events.last(), Some(&SyncEvent::Finished));
}

#[tokio::test]
async fn links_are_processed_in_index_order() {
    let server = MockServer::start().await;
    serve(&server, "/vue/llms.txt", INDEX).await;

    let temp = TempDir::new().unwrap();
    let registry = ProfileRegistry::builtin();
    let sink = TestSink::default();

    let report = run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        registry.default_profile(),
        &sink,
    )
    .await
    .unwrap();
    assert!(report.saved.is_empty());

    let started: Vec<_> = sink
        .take()
        .into_iter()
        .filter_map(|event| match event {
            SyncEvent::LinkStarted { title, .. } => Some(title),
            _ => None,
        })
        .collect();
    assert_eq!(started, vec!["Naming", "API services", "Unit tests"]);
}

#[tokio::test]
async fn index_failure_is_fatal() {
    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let registry = ProfileRegistry::builtin();

    let err = run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        registry.default_profile(),
        &TestSink::default(),
    )
    .await
    .unwrap_err();

    let SyncError::IndexFetch(fetch) = err;
    assert_eq!(fetch.message, "Not Found");
    assert!(!temp.path().join("docs").exists());
}

#[tokio::test]
async fn empty_index_writes_nothing() {
    let server = MockServer::start().await;
    serve(&server, "/vue/llms.txt", "# Vue Docs\n\nNothing here yet.\n").await;
    let temp = TempDir::new().unwrap();
    let registry = ProfileRegistry::builtin();

    let report = run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        registry.default_profile(),
        &TestSink::default(),
    )
    .await
    .unwrap();

    assert!(report.saved.is_empty());
    assert!(report.failed.is_empty());
    assert!(!temp.path().join("docs").exists());
}

#[tokio::test]
async fn unknown_editor_writes_default_profile_output() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/vue/llms.txt",
        "- [Naming](/vue/docs/style-guide/naming.md)\n",
    )
    .await;
    serve(&server, "/vue/docs/style-guide/naming.md", "# Naming\n").await;
    let temp = TempDir::new().unwrap();
    let registry = ProfileRegistry::builtin();

    run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        registry.resolve("foo"),
        &TestSink::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("docs/style-guide/naming.md")).unwrap(),
        "---\ninclusion: always\n---\n# Naming\n"
    );
}

#[tokio::test]
async fn rerun_overwrites_previous_output() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/vue/llms.txt",
        "- [Rules](/vue/docs/style-guide/rules.md)\n",
    )
    .await;
    serve(&server, "/vue/docs/style-guide/rules.md", "# Rules v2\n").await;
    let temp = TempDir::new().unwrap();
    let target = temp.path().join(".windsurf/rules/style-guide/rules.md");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "stale").unwrap();

    let registry = ProfileRegistry::builtin();
    let report = run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        registry.get(EditorKind::Windsurf),
        &TestSink::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.saved, vec![target.clone()]);
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "---\ntrigger: always-on\n---\n# Rules v2\n"
    );
}

#[tokio::test]
async fn escaping_path_is_a_per_link_failure() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/vue/llms.txt",
        "- [Sneaky](/vue/docs/../style-guide/x.md)\n- [Fine](/vue/docs/style-guide/y.md)\n",
    )
    .await;
    serve(&server, "/vue/docs/style-guide/y.md", "ok\n").await;
    serve(&server, "/vue/style-guide/x.md", "nope\n").await;
    let temp = TempDir::new().unwrap();
    let registry = ProfileRegistry::builtin();

    let report = run_sync(
        &ReqwestFetcher::default(),
        &config_for(&server, temp.path()),
        registry.default_profile(),
        &TestSink::default(),
    )
    .await
    .unwrap();

    assert_eq!(report.saved, vec![temp.path().join("docs/style-guide/y.md")]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].title, "Sneaky");
}
