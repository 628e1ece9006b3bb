//! Command-line demo for the checklist.
//!
//! Runs the four end-to-end scenarios against the live store through a
//! `TodoPage`, logging each step and the derived view.

use checklist::{
    ChecklistConfig, Tab, TodoId, TodoItem, TodoPage, TodoReducer, TodoRuntime, TodoState,
    TodoStore, todo_store,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn sample_store(config: &ChecklistConfig) -> TodoRuntime {
    let mut checked = TodoItem::new(TodoId::new(1), "B");
    checked.toggle();

    TodoRuntime::with_config(
        TodoState::from_items(vec![
            TodoItem::new(TodoId::new(0), "A"),
            checked,
            TodoItem::new(TodoId::new(2), "C"),
        ]),
        TodoReducer::new(),
        config.environment(),
        config.store,
    )
}

fn log_page<S: TodoStore>(scenario: u8, page: &TodoPage<S>) {
    let view = page.view();
    for item in &view.visible {
        tracing::info!(scenario, id = %item.id, name = %item.name, checked = item.checked, "Item");
    }
    tracing::info!(scenario, tab = %view.tab, items_left = %view.items_left, "View");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ChecklistConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_filter)?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    checklist_runtime::metrics::describe_metrics();

    // Scenario 1: add to an empty list
    let store = todo_store(&config);
    let updates = store.subscribe();
    let mut page = TodoPage::new(&store);
    tracing::info!(scenario = 1, "Adding \"Buy milk\" to an empty list");
    page.set_input("Buy milk");
    page.submit();
    tracing::info!(scenario = 1, notified = updates.has_changed()?, "Subscriber checked");
    log_page(1, &page);

    // Scenario 2: active count label
    let store = sample_store(&config);
    let page = TodoPage::new(&store);
    tracing::info!(scenario = 2, "Counting active todos");
    log_page(2, &page);

    // Scenario 3: clear completed
    let store = sample_store(&config);
    let page = TodoPage::new(&store);
    tracing::info!(scenario = 3, "Clearing completed todos");
    page.clear_completed();
    log_page(3, &page);

    // Scenario 4: toggle the first todo
    let store = sample_store(&config);
    let mut page = TodoPage::new(&store);
    tracing::info!(scenario = 4, id = 0, "Toggling todo");
    page.toggle(TodoId::new(0));
    for tab in Tab::ALL {
        page.select_tab(tab);
        log_page(4, &page);
    }

    tracing::info!("Demo complete");
    Ok(())
}
