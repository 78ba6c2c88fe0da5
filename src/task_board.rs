use crate::task::{Status, Task};
use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::Path;

pub const PENDING_FILE: &str = "pending_tasks.csv";
pub const HISTORY_FILE: &str = "completed_history.csv";

const COLUMNS: [&str; 4] = ["Subject", "Description", "DueDate", "Status"];

#[derive(Debug, Default)]
pub struct TaskBoard {
    pub pending: Vec<Task>,
    pub history: VecDeque<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            history: VecDeque::new(),
        }
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let pending = read_tasks(&dir.join(PENDING_FILE))?;
        let history = read_tasks(&dir.join(HISTORY_FILE))?.into();
        Ok(Self { pending, history })
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        write_tasks(&dir.join(PENDING_FILE), &self.pending)?;
        let history: Vec<Task> = self.history.iter().cloned().collect();
        write_tasks(&dir.join(HISTORY_FILE), &history)?;
        Ok(())
    }

    pub fn add_task(&mut self, subject: String, description: String, due_date: String) {
        let task = Task {
            subject,
            description,
            due_date,
            status: Status::Pending,
        };
        self.pending.push(task);
    }

    /// Pending tasks ordered by due date, then subject. Ties keep
    /// insertion order.
    pub fn sorted_pending(&self) -> Vec<&Task> {
        self.sorted_order()
            .into_iter()
            .map(|i| &self.pending[i])
            .collect()
    }

    /// Marks the task at `position` (1-based, into the sorted view) as
    /// completed and moves it to the front of the history. Returns the
    /// completed task, or `None` if `position` is out of range.
    pub fn complete_task(&mut self, position: usize) -> Option<&Task> {
        let order = self.sorted_order();
        if position == 0 || position > order.len() {
            return None;
        }
        let mut task = self.pending.remove(order[position - 1]);
        task.status = Status::Completed;
        self.history.push_front(task);
        self.history.front()
    }

    fn sorted_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.pending.len()).collect();
        order.sort_by(|&a, &b| {
            let (a, b) = (&self.pending[a], &self.pending[b]);
            (&a.due_date, &a.subject).cmp(&(&b.due_date, &b.subject))
        });
        order
    }
}

fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut tasks = Vec::new();
    for record in reader.deserialize() {
        let task: Task =
            record.with_context(|| format!("malformed record in {}", path.display()))?;
        tasks.push(task);
    }
    Ok(tasks)
}

fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer.write_record(COLUMNS)?;
    for task in tasks {
        writer.serialize(task)?;
    }
    writer.flush()?;
    Ok(())
}
