mod task;
mod task_board;
mod ui;

use anyhow::Result;
use std::path::Path;
use task_board::TaskBoard;

fn main() -> Result<()> {
    let data_dir = Path::new(".");
    let mut board = TaskBoard::load_from(data_dir)?;

    ui::run_app(&mut board)?;

    board.save_to(data_dir)?;
    println!("\nData saved successfully!");
    Ok(())
}
