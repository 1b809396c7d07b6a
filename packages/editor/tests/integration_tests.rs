/// Integration tests for the document lifecycle:
/// store operations → history recording → restore
use pageforge_editor::{DocumentStore, EditSession, HistoryLedger, Page, INDEX_PAGE};

#[test]
fn test_create_then_delete_flow() {
    // Start with only index.html (default content)
    let mut store = DocumentStore::new();
    assert_eq!(store.len(), 1);
    assert_eq!(store.active_path(), INDEX_PAGE);

    // createPage → {index.html, page-2.html}, page-2.html active
    store.create_page("page");
    let paths: Vec<_> = store.pages().map(|p| p.path.clone()).collect();
    assert_eq!(paths, vec!["index.html", "page-2.html"]);
    assert_eq!(store.active_path(), "page-2.html");

    // deletePage("index.html") → active stays page-2.html, one page left
    store.delete_page(INDEX_PAGE).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.active_path(), "page-2.html");
    assert_eq!(store.active_page().path, "page-2.html");
}

#[test]
fn test_history_orders_and_freezes_snapshots() {
    let mut ledger = HistoryLedger::new();

    let pages_a = vec![Page::new(INDEX_PAGE, "<header>blue</header>")];
    ledger.record(pages_a.clone(), "make header blue");

    let mut pages_b = pages_a.clone();
    pages_b[0].html.push_str("<footer>new</footer>");
    ledger.record(pages_b.clone(), "add footer");

    // Ledger is [{pagesB,...}, {pagesA,...}], each with its own frozen copy
    assert_eq!(ledger.entries()[0].pages, pages_b);
    assert_eq!(ledger.entries()[1].pages, pages_a);

    // Mutating the live pages afterwards cannot reach into the ledger
    pages_b[0].html.clear();
    assert!(ledger.entries()[0].pages[0].html.contains("footer"));
}

#[test]
fn test_session_edit_batches_end_to_end() -> anyhow::Result<()> {
    let mut session = EditSession::start(None, Vec::new(), None);

    session.begin_ai();
    session.complete_ai(
        vec![
            Page::new(INDEX_PAGE, "<h1>Home</h1>"),
            Page::new("about.html", "<h1>About</h1>"),
        ],
        "add an about page",
    );

    assert_eq!(session.store.len(), 2);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.prompts(), ["add an about page"]);

    // Manual edits between batches do not disturb recorded history
    session.store.replace_html("about.html", "<h1>About us</h1>");
    assert_eq!(session.history()[0].pages[1].html, "<h1>About</h1>");

    // Rolling back reinstates the recorded snapshot
    assert!(session.restore_history(0));
    assert_eq!(
        session.store.get("about.html").map(|p| p.html.as_str()),
        Some("<h1>About</h1>")
    );
    Ok(())
}
