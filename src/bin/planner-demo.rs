//! A small demo of this crate: it fills a store, toggles a few tasks and prints the resulting views.
//! You can set the RUST_LOG environment variable to display more info.

use std::error::Error;
use std::sync::Arc;

use chrono::{Local, NaiveDate};

use pocket_planner::board::{NoLatency, TaskDraft};
use pocket_planner::calendar::navigation::{CalendarView, MonthNavigator};
use pocket_planner::config::Settings;
use pocket_planner::identity::{IdentityProvider, LocalIdentity};
use pocket_planner::{FilterMode, TaskBoard, TaskStore};


#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        log::error!("Demo failed: {}", err);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let identity = LocalIdentity::signed_in_as("demo-user".to_string());
    if identity.is_signed_in().await == false {
        return Err("nobody is signed in".into());
    }

    let settings = Settings::default();
    let today = Local::now().date_naive();

    let store = TaskStore::new_shared();
    let board = TaskBoard::new_with_latency(store.clone(), &settings, Arc::new(NoLatency));
    let navigator = MonthNavigator::new(today);
    let mut calendar = CalendarView::new(store.lock().map_err(|err| err.to_string())?.subscribe(), navigator.subscribe(), &settings);

    let mut ids = Vec::new();
    for (title, start, end) in sample_drafts(today) {
        let mut draft = TaskDraft::new(title.to_string(), start);
        draft.schedule.set_end_date(end);
        ids.push(board.add_task(draft).await?);
    }
    board.add_task(TaskDraft::undated("Read a book".to_string())).await?;
    board.toggle_completion(&ids[0])?;

    for mode in FilterMode::all().iter() {
        board.set_filter(*mode);
        pocket_planner::utils::print_task_list(&format!("{:?}", mode), &board.filtered_tasks()?);
    }
    let counts = board.counts()?;
    println!("all: {}, active: {}, completed: {}", counts.all, counts.active, counts.completed);

    pocket_planner::utils::print_month_grid(&calendar.grid(today), settings.max_bars_per_day);
    navigator.next_month();
    pocket_planner::utils::print_month_grid(&calendar.grid(today), settings.max_bars_per_day);

    identity.sign_out().await?;
    Ok(())
}

fn sample_drafts(today: NaiveDate) -> Vec<(&'static str, NaiveDate, NaiveDate)> {
    let in_days = |n: i64| today.checked_add_signed(chrono::Duration::days(n)).unwrap_or(today);
    vec![
        ("Morning workout", today, today),
        ("Team offsite", in_days(1), in_days(4)),
        ("Review project documentation", in_days(1), in_days(1)),
        ("Dentist", in_days(1), in_days(1)),
        ("Conference", in_days(20), in_days(24)),
    ]
}
