/// Integration tests for the complete session flow:
/// studio → AI-edit collaborator → store/history → preview
use std::sync::Mutex;

use tokio::sync::mpsc;

use pageforge_preview::testing::MockSurface;
use pageforge_preview::RenderMode;
use pageforge_workspace::{
    EditEvent, EditRequest, EditService, EditSession, Page, ProjectPayload, ProjectStore,
    PublishOutcome, SelectedElement, Studio, WorkspaceError,
};

/// Plays back a fixed event script, recording the request it was given.
struct ScriptedEdits {
    events: Vec<EditEvent>,
    requests: Mutex<Vec<EditRequest>>,
}

impl ScriptedEdits {
    fn new(events: Vec<EditEvent>) -> Self {
        Self {
            events,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn last_request(&self) -> EditRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl EditService for ScriptedEdits {
    fn request_edit(&self, request: EditRequest) -> mpsc::Receiver<EditEvent> {
        self.requests.lock().unwrap().push(request);
        let (tx, rx) = mpsc::channel(16);
        let events = self.events.clone();
        tokio::spawn(async move {
            for event in events {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });
        rx
    }
}

/// Records payloads and answers with a canned outcome.
struct RecordingStore {
    outcome: PublishOutcome,
    payloads: Mutex<Vec<ProjectPayload>>,
}

impl RecordingStore {
    fn new(outcome: PublishOutcome) -> Self {
        Self {
            outcome,
            payloads: Mutex::new(Vec::new()),
        }
    }
}

impl ProjectStore for RecordingStore {
    async fn publish(&self, payload: ProjectPayload) -> PublishOutcome {
        self.payloads.lock().unwrap().push(payload);
        self.outcome.clone()
    }
}

fn studio() -> Studio<MockSurface> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut studio = Studio::new(EditSession::new());
    studio.attach_surface(MockSurface::new());
    studio
}

#[tokio::test]
async fn test_successful_edit_batch_updates_everything() {
    let mut studio = studio();
    studio
        .session
        .set_selected_element(Some(SelectedElement::new("h1", "body > h1")));

    let service = ScriptedEdits::new(vec![
        EditEvent::Progress {
            path: "index.html".to_string(),
            html: "<h1>Home".to_string(),
        },
        EditEvent::Progress {
            path: "index.html".to_string(),
            html: "<h1>Home</h1>".to_string(),
        },
        EditEvent::Completed {
            pages: vec![
                Page::new("index.html", "<h1>Home</h1>"),
                Page::new("about.html", "<h1>About</h1>"),
            ],
        },
    ]);

    studio
        .run_edit(&service, "add an about page", Vec::new())
        .await
        .unwrap();

    // the selection travelled with the request
    let request = service.last_request();
    assert_eq!(request.prompt, "add an about page");
    assert_eq!(
        request.selected_element,
        Some(SelectedElement::new("h1", "body > h1"))
    );
    assert!(request.previous_prompts.is_empty());

    // store spliced, history recorded, prompt logged, selection cleared
    assert_eq!(studio.session.store.len(), 2);
    assert_eq!(studio.session.history().len(), 1);
    assert_eq!(studio.session.prompts(), ["add an about page"]);
    assert!(studio.session.selected_element().is_none());
    assert!(!studio.session.is_ai_working());

    // preview is back to idle and showing the store's active page
    assert_eq!(studio.preview().mode(), RenderMode::Idle);
    assert!(!studio.preview().is_blocked());
    let surface = studio.preview().bridge().surface().unwrap();
    assert_eq!(surface.contents.last().unwrap(), "<h1>Home</h1>");
}

#[tokio::test]
async fn test_failed_edit_batch_leaves_store_unchanged() {
    let mut studio = studio();
    let before = studio.session.store.snapshot();

    let service = ScriptedEdits::new(vec![
        EditEvent::Progress {
            path: "index.html".to_string(),
            html: "<h1>half-finished".to_string(),
        },
        EditEvent::Failed {
            message: Some("model overloaded".to_string()),
        },
    ]);

    let err = studio
        .run_edit(&service, "try something", Vec::new())
        .await
        .unwrap_err();
    match err {
        WorkspaceError::External(message) => assert_eq!(message, "model overloaded"),
        other => panic!("expected external failure, got {other:?}"),
    }

    assert_eq!(studio.session.store.snapshot(), before);
    assert!(studio.session.history().is_empty());
    assert!(studio.session.prompts().is_empty());
    assert!(!studio.session.is_ai_working());

    // the preview dropped the streamed projection and shows the store again
    let surface = studio.preview().bridge().surface().unwrap();
    assert_eq!(
        surface.contents.last().unwrap(),
        &studio.session.store.active_page().html
    );
}

#[tokio::test]
async fn test_dropped_stream_counts_as_failure() {
    let mut studio = studio();
    let service = ScriptedEdits::new(vec![EditEvent::Progress {
        path: "index.html".to_string(),
        html: "<h1>cut off".to_string(),
    }]);

    let err = studio
        .run_edit(&service, "never finishes", Vec::new())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::External(_)));
    assert!(studio.session.history().is_empty());
}

#[tokio::test]
async fn test_publish_requires_title() {
    let studio = studio();
    let store = RecordingStore::new(PublishOutcome {
        ok: true,
        path: Some("spaces/demo".to_string()),
        error: None,
    });

    let err = studio.publish(&store, "   ").await.unwrap_err();
    assert!(matches!(err, WorkspaceError::Validation(_)));
    // rejected before the collaborator was consulted
    assert!(store.payloads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_publish_hands_over_pages_and_prompts() {
    let mut studio = studio();
    let service = ScriptedEdits::new(vec![EditEvent::Completed {
        pages: vec![Page::new("index.html", "<h1>v1</h1>")],
    }]);
    studio.run_edit(&service, "first draft", Vec::new()).await.unwrap();

    let store = RecordingStore::new(PublishOutcome {
        ok: true,
        path: Some("spaces/demo".to_string()),
        error: None,
    });
    let path = studio.publish(&store, "My Site").await.unwrap();
    assert_eq!(path, "spaces/demo");

    let payloads = store.payloads.lock().unwrap();
    assert_eq!(payloads[0].title, "My Site");
    assert_eq!(payloads[0].pages, studio.session.store.snapshot());
    assert_eq!(payloads[0].prompts, vec!["first draft".to_string()]);
}

#[tokio::test]
async fn test_publish_surfaces_collaborator_error() {
    let studio = studio();
    let store = RecordingStore::new(PublishOutcome {
        ok: false,
        path: None,
        error: Some("storage quota exceeded".to_string()),
    });

    let err = studio.publish(&store, "My Site").await.unwrap_err();
    match err {
        WorkspaceError::External(message) => assert_eq!(message, "storage quota exceeded"),
        other => panic!("expected external failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_page_link_click_switches_active_page() {
    let mut studio = studio();
    let service = ScriptedEdits::new(vec![EditEvent::Completed {
        pages: vec![
            Page::new("index.html", "<a href=\"about.html\">about</a>"),
            Page::new("about.html", "<h1>About</h1>"),
        ],
    }]);
    studio.run_edit(&service, "link the pages", Vec::new()).await.unwrap();
    studio.handle_preview_load();

    // host reports the re-parsed anchor node
    let anchor = {
        let surface = studio
            .preview_mut()
            .bridge_mut()
            .surface_mut()
            .unwrap();
        surface.add_element(
            "a",
            Some(pageforge_preview::NodeId(0)),
            &[("href", "about.html")],
        )
    };

    studio.handle_preview_click(anchor);
    assert_eq!(studio.session.store.active_path(), "about.html");
    let surface = studio.preview().bridge().surface().unwrap();
    assert_eq!(surface.contents.last().unwrap(), "<h1>About</h1>");
}
