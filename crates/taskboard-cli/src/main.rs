use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

use taskboard_core::bus::EventBus;
use taskboard_core::domain::{ProjectId, Task, TaskDraft, TaskEvent, TaskId, TaskStatus};
use taskboard_core::ports::SystemClock;
use taskboard_core::query::{
    SortOrder, critical_tasks, project_summary, remaining_days, sort_by_limit_date,
};
use taskboard_core::remote::{SimulatedRemote, fetch_project_detail, update_task_status};
use taskboard_core::store::ProjectStore;

fn render_tasks(tasks: &[Task]) {
    for task in tasks {
        println!(
            "  [{}] {} ({}) due {}",
            task.id(),
            task.description(),
            task.status(),
            task.limit_date().format("%Y-%m-%d %H:%M")
        );
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // (A) Store と EventBus を用意（subscriber は publish より先に登録する）
    let store = Arc::new(ProjectStore::new());
    let mut bus = EventBus::new();
    bus.subscribe_task_updated(Arc::new(|event: &TaskEvent| {
        if let TaskEvent::Updated { task_id, new_status } = event {
            println!("updated task {task_id} with status {new_status}");
        }
    }));
    bus.subscribe_task_completed(Arc::new(|event: &TaskEvent| {
        if let TaskEvent::Completed { task_id } = event {
            println!("task {task_id} completed");
        }
    }));
    let bus = Arc::new(bus);

    // (B) seed data
    let project1 = store.create_project(ProjectId::new(1), "Project Alpha", vec![]);
    let project2 = store.create_project(ProjectId::new(2), "Project Beta", vec![]);

    let now = Utc::now();
    let dates = [
        now - Duration::days(30),
        now + Duration::days(30),
        now + Duration::days(2),
        now + Duration::days(3),
        now - Duration::days(2),
        now + Duration::days(15),
        now - Duration::days(15),
        now + Duration::days(2),
        now + Duration::days(1),
        now - Duration::days(1),
    ];

    let seed1 = [
        ("Task A", TaskStatus::Pending, dates[0]),
        ("Task B", TaskStatus::InProgress, dates[1]),
        ("Task C", TaskStatus::Completed, dates[2]),
        ("Task D", TaskStatus::Pending, dates[3]),
        ("Task E", TaskStatus::InProgress, dates[4]),
        ("Task F", TaskStatus::Completed, dates[5]),
        ("Task G", TaskStatus::Pending, dates[6]),
        ("Task EG", TaskStatus::InProgress, dates[7]),
        ("Task Fh", TaskStatus::InProgress, dates[8]),
        ("Task GJ", TaskStatus::Pending, dates[9]),
    ];
    let seed2 = [
        ("Task H", TaskStatus::InProgress, dates[6]),
        ("Task I", TaskStatus::InProgress, dates[1]),
        ("Task J", TaskStatus::Pending, dates[4]),
        ("Task K", TaskStatus::InProgress, dates[0]),
        ("Task L", TaskStatus::InProgress, dates[3]),
        ("Task M", TaskStatus::Completed, dates[5]),
        ("Task N", TaskStatus::Completed, dates[2]),
    ];
    for (description, status, limit_date) in seed1 {
        store
            .add_task(project1.id(), TaskDraft {
                description: description.to_string(),
                status,
                limit_date,
            })
            .expect("project 1 exists");
    }
    for (description, status, limit_date) in seed2 {
        store
            .add_task(project2.id(), TaskDraft {
                description: description.to_string(),
                status,
                limit_date,
            })
            .expect("project 2 exists");
    }

    // (C) derived views
    println!("List of projects:");
    for project in store.snapshot() {
        println!("  {} ({} tasks)", project.name(), project.tasks().len());
    }

    let project1 = store.find_project(project1.id()).expect("project 1 exists");
    println!("{}", project_summary(&project1));
    println!(
        "{}",
        project_summary(&store.find_project(project2.id()).expect("project 2 exists"))
    );

    println!("Project Alpha sorted by date asc:");
    render_tasks(&sort_by_limit_date(&project1, SortOrder::Asc));

    let clock = SystemClock;
    println!(
        "Remaining time for not completed tasks: {} days",
        remaining_days(&project1, &clock)
    );
    println!("Critical tasks:");
    render_tasks(&critical_tasks(&project1, &clock));

    // (D) simulated remote calls
    let remote = SimulatedRemote::new(Arc::clone(&store), bus);

    for project_id in [ProjectId::new(1), ProjectId::new(4)] {
        match fetch_project_detail(&remote, project_id).await {
            Ok(project) => println!(
                "Project details id {project_id}: {}",
                serde_json::to_string_pretty(&project).expect("project serializes")
            ),
            Err(err) => println!("{err}"),
        }
    }

    // Mixed batch: a valid completion, an unknown task, two valid updates.
    let updates = [
        (TaskId::new(1), TaskStatus::Completed),
        (TaskId::new(21), TaskStatus::Completed),
        (TaskId::new(8), TaskStatus::InProgress),
        (TaskId::new(10), TaskStatus::InProgress),
    ];
    for (task_id, new_status) in updates {
        if let Err(err) = update_task_status(&remote, project1.id(), task_id, new_status).await {
            println!("{err}");
        }
    }

    println!(
        "{}",
        project_summary(&store.find_project(project1.id()).expect("project 1 exists"))
    );
}
