//! Integration tests for the ordered scenario run
//!
//! These drive [`Runner`] end to end against the fake backend and check the
//! report it produces, including the cases where login or an early scenario
//! fails.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use story_spoiler::errors::Error;
use story_spoiler::requests::StoryInput;
use story_spoiler::scenarios::create::{CreateStory, CreateWithoutRequiredFields};
use story_spoiler::scenarios::{Scenario, ScenarioContext};
use story_spoiler::testing::setup;
use story_spoiler::{Runner, StoryClient};

// =============================================================================
// SUCCESS PATH
// =============================================================================

/// Create -> edit -> list -> delete followed by the three negative cases all
/// pass, in order, and leave no story behind
#[actix_web::test]
async fn test_full_suite_passes() {
    let backend = setup::backend();
    let runner = Runner::new(setup::config(&backend));

    let report = runner.run().await.unwrap();

    assert!(report.is_success(), "Every scenario should pass:\n{}", report);
    assert_eq!(report.passed(), 7);

    let order: Vec<_> = report
        .outcomes()
        .iter()
        .map(|outcome| (outcome.order, outcome.name))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, "create_story"),
            (2, "edit_story"),
            (3, "list_stories"),
            (4, "delete_story"),
            (5, "create_story_without_required_fields"),
            (6, "edit_nonexistent_story"),
            (7, "delete_nonexistent_story"),
        ]
    );

    assert!(
        backend.stories().await.is_empty(),
        "Created story should be deleted"
    );

    backend.stop().await;
}

/// Running the suite twice against the same backend still passes
#[actix_web::test]
async fn test_suite_is_repeatable() {
    let backend = setup::backend();
    let runner = Runner::new(setup::config(&backend));

    let first = runner.run().await.unwrap();
    let second = runner.run().await.unwrap();

    assert!(first.is_success(), "{}", first);
    assert!(second.is_success(), "{}", second);

    backend.stop().await;
}

// =============================================================================
// SETUP FAILURES
// =============================================================================

/// Wrong credentials abort the whole run before any scenario executes
#[actix_web::test]
async fn test_rejected_login_aborts_run() {
    let backend = setup::backend();
    let mut config = setup::config(&backend);
    config.credentials.password = "wrong-password".to_string();

    let result = Runner::new(config).run().await;

    match result {
        Err(Error::Login(message)) => assert!(message.contains("401"), "{}", message),
        other => panic!(
            "Expected login failure, got {:?}",
            other.map(|report| report.to_string())
        ),
    }
    assert!(backend.stories().await.is_empty());

    backend.stop().await;
}

/// An unreachable backend aborts the run as a login failure
#[actix_web::test]
async fn test_unreachable_backend_aborts_run() {
    let backend = setup::backend();
    let config = setup::config(&backend);
    backend.stop().await;

    let result = Runner::new(config).run().await;

    assert!(matches!(result, Err(Error::Login(_))));
}

// =============================================================================
// PARTIAL FAILURES
// =============================================================================

/// When create fails, edit and delete fail for lack of an id while the
/// scenarios that do not depend on it still run and pass
#[actix_web::test]
async fn test_failed_create_only_breaks_dependent_scenarios() {
    let backend = setup::backend();
    let config = setup::config(&backend);

    // Seed one story so the list scenario has something to find
    let session = story_spoiler::login(&config.backend, &config.credentials)
        .await
        .unwrap();
    let seeded = StoryClient::new(session)
        .create(&StoryInput::new("Seeded", "Seeded story"))
        .await
        .unwrap();
    assert_eq!(seeded.status.as_u16(), 201);

    backend.refuse_creates(true).await;

    let report = Runner::new(config).run().await.unwrap();

    assert_eq!(report.outcomes().len(), 7, "Every scenario should still run");
    assert_eq!(report.failed(), 3, "{}", report);

    let create = report.outcome("create_story").unwrap();
    assert!(
        matches!(
            &create.result,
            Err(Error::UnexpectedStatus { actual, .. }) if actual.as_u16() == 500
        ),
        "{}",
        create
    );

    for name in ["edit_story", "delete_story"] {
        let outcome = report.outcome(name).unwrap();
        assert!(
            matches!(&outcome.result, Err(Error::MissingStoryId(requester)) if *requester == name),
            "{}",
            outcome
        );
    }

    for name in [
        "list_stories",
        "create_story_without_required_fields",
        "edit_nonexistent_story",
        "delete_nonexistent_story",
    ] {
        assert!(report.outcome(name).unwrap().passed(), "{} should pass", name);
    }

    assert_eq!(backend.stories().await.len(), 1, "Seeded story is untouched");

    backend.stop().await;
}

/// With nothing on the backend, listing fails with an empty list error
#[actix_web::test]
async fn test_empty_backend_fails_listing() {
    let backend = setup::backend();
    backend.refuse_creates(true).await;

    let report = Runner::new(setup::config(&backend)).run().await.unwrap();
    let list = report.outcome("list_stories").unwrap();

    assert!(matches!(&list.result, Err(Error::EmptyList)), "{}", list);

    backend.stop().await;
}

// =============================================================================
// NON-JSON ERROR BODIES
// =============================================================================

async fn context(backend: &story_spoiler::testing::FakeBackend) -> ScenarioContext {
    let config = setup::config(backend);
    let session = story_spoiler::login(&config.backend, &config.credentials)
        .await
        .unwrap();

    ScenarioContext::new(StoryClient::new(session), config.scenarios.nonexistent_id)
}

/// A 400 with a text/plain body still satisfies the status-only create check
#[actix_web::test]
async fn test_plain_text_bad_request_passes_create_without_required_fields() {
    let backend = setup::backend();
    backend.plain_text_errors(true).await;
    let mut context = context(&backend).await;

    let result = CreateWithoutRequiredFields.run(&mut context).await;

    assert!(result.is_ok(), "{:?}", result);

    backend.stop().await;
}

/// An HTML error page surfaces as a status mismatch carrying the raw page
#[actix_web::test]
async fn test_html_server_error_reports_status_not_decode_failure() {
    let backend = setup::backend();
    backend.plain_text_errors(true).await;
    backend.refuse_creates(true).await;
    let mut context = context(&backend).await;

    let result = CreateStory.run(&mut context).await;

    match result {
        Err(Error::UnexpectedStatus { actual, body, .. }) => {
            assert_eq!(actual.as_u16(), 500);
            assert_eq!(body, "<h1>Internal Server Error</h1>");
        }
        other => panic!("Expected status mismatch, got {:?}", other),
    }
    assert!(context.story_id("create_story").is_err());

    backend.stop().await;
}

// =============================================================================
// CUSTOM SCENARIO LISTS
// =============================================================================

struct Record {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
    stores: Option<&'static str>,
}

#[async_trait(?Send)]
impl Scenario for Record {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, context: &mut ScenarioContext) -> Result<(), Error> {
        self.log.borrow_mut().push(self.name);

        match self.stores {
            Some(id) => context.store_story_id(id),
            None => {
                context.story_id(self.name)?;
            }
        }

        Ok(())
    }
}

/// Scenarios run in list order and see state stored by earlier ones
#[actix_web::test]
async fn test_scenarios_run_in_list_order_and_share_context() {
    let backend = setup::backend();
    let log = Rc::new(RefCell::new(Vec::new()));

    let scenarios: Vec<Box<dyn Scenario>> = vec![
        Box::new(Record {
            name: "reader_before",
            log: log.clone(),
            stores: None,
        }),
        Box::new(Record {
            name: "writer",
            log: log.clone(),
            stores: Some("abc"),
        }),
        Box::new(Record {
            name: "reader_after",
            log: log.clone(),
            stores: None,
        }),
    ];

    let report = Runner::with_scenarios(setup::config(&backend), scenarios)
        .run()
        .await
        .unwrap();

    assert_eq!(*log.borrow(), vec!["reader_before", "writer", "reader_after"]);
    assert!(!report.outcome("reader_before").unwrap().passed());
    assert!(report.outcome("writer").unwrap().passed());
    assert!(report.outcome("reader_after").unwrap().passed());

    backend.stop().await;
}
