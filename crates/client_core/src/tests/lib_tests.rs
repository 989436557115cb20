use super::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct ResourceState {
    created: Arc<Mutex<Vec<TaskPayload>>>,
    replaced: Arc<Mutex<Vec<(i64, TaskPayload)>>>,
    deleted: Arc<Mutex<Vec<i64>>>,
}

fn fixture_tasks() -> Vec<Task> {
    vec![
        Task {
            id: TaskId(1),
            task: "Buy milk".to_string(),
            completed: false,
        },
        Task {
            id: TaskId(2),
            task: "Water plants".to_string(),
            completed: true,
        },
    ]
}

async fn handle_list_tasks() -> Json<Vec<Task>> {
    Json(fixture_tasks())
}

async fn handle_create_task(
    State(state): State<ResourceState>,
    Json(payload): Json<TaskPayload>,
) -> StatusCode {
    state.created.lock().await.push(payload);
    StatusCode::CREATED
}

async fn handle_replace_task(
    State(state): State<ResourceState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> StatusCode {
    state.replaced.lock().await.push((task_id, payload));
    StatusCode::OK
}

async fn handle_delete_task(
    State(state): State<ResourceState>,
    Path(task_id): Path<i64>,
) -> StatusCode {
    state.deleted.lock().await.push(task_id);
    StatusCode::NO_CONTENT
}

fn resource_router(state: ResourceState) -> Router {
    Router::new()
        .route("/tasks", get(handle_list_tasks).post(handle_create_task))
        .route(
            "/tasks/:task_id",
            put(handle_replace_task).delete(handle_delete_task),
        )
        .with_state(state)
}

async fn spawn_resource_server(router: Router) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn list_tasks_parses_the_full_collection() {
    let server_url = spawn_resource_server(resource_router(ResourceState::default()))
        .await
        .unwrap();

    let tasks = TaskClient::new(server_url).list_tasks().await.unwrap();

    assert_eq!(tasks, fixture_tasks());
}

#[tokio::test]
async fn create_task_posts_payload_to_the_collection() {
    let state = ResourceState::default();
    let server_url = spawn_resource_server(resource_router(state.clone()))
        .await
        .unwrap();

    TaskClient::new(server_url)
        .create_task(&TaskPayload::draft("Buy milk"))
        .await
        .unwrap();

    let created = state.created.lock().await;
    assert_eq!(created.as_slice(), &[TaskPayload::draft("Buy milk")]);
}

#[tokio::test]
async fn replace_task_puts_full_replacement_to_the_item_url() {
    let state = ResourceState::default();
    let server_url = spawn_resource_server(resource_router(state.clone()))
        .await
        .unwrap();
    let payload = TaskPayload {
        task: "Water plants".to_string(),
        completed: true,
    };

    TaskClient::new(server_url)
        .replace_task(TaskId(7), &payload)
        .await
        .unwrap();

    let replaced = state.replaced.lock().await;
    assert_eq!(replaced.as_slice(), &[(7, payload)]);
}

#[tokio::test]
async fn delete_task_targets_the_item_by_id() {
    let state = ResourceState::default();
    let server_url = spawn_resource_server(resource_router(state.clone()))
        .await
        .unwrap();

    TaskClient::new(server_url)
        .delete_task(TaskId(4))
        .await
        .unwrap();

    let deleted = state.deleted.lock().await;
    assert_eq!(deleted.as_slice(), &[4]);
}

#[tokio::test]
async fn non_success_status_surfaces_as_an_error() {
    let router = Router::new().route(
        "/tasks",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let server_url = spawn_resource_server(router).await.unwrap();

    let err = TaskClient::new(server_url).list_tasks().await.unwrap_err();

    assert!(err.to_string().contains("500"), "unexpected error: {err:#}");
}

#[tokio::test]
async fn trailing_slash_in_server_url_is_tolerated() {
    let server_url = spawn_resource_server(resource_router(ResourceState::default()))
        .await
        .unwrap();

    let tasks = TaskClient::new(format!("{server_url}/"))
        .list_tasks()
        .await
        .unwrap();

    assert_eq!(tasks.len(), 2);
}

#[test]
fn validated_task_text_trims_and_rejects_empty_input() {
    assert_eq!(validated_task_text(" Buy milk "), Ok("Buy milk"));
    assert_eq!(validated_task_text(""), Err(InvalidTaskText));
    assert_eq!(validated_task_text("   "), Err(InvalidTaskText));
}
