//! Given steps for drag reordering BDD scenarios.

use super::world::{DragReorderWorld, list_items};
use rstest_bdd_macros::given;

#[given(r#"a column "{column}" with tasks "{tasks}""#)]
fn column_with_tasks(
    world: &mut DragReorderWorld,
    column: String,
    tasks: String,
) -> Result<(), eyre::Report> {
    world.add_column(&column, list_items(&tasks))
}

#[given(r#"an empty column "{column}""#)]
fn empty_column(world: &mut DragReorderWorld, column: String) -> Result<(), eyre::Report> {
    world.add_column(&column, [])
}

#[given(r#"empty columns "{columns}""#)]
fn empty_columns(world: &mut DragReorderWorld, columns: String) -> Result<(), eyre::Report> {
    for column in list_items(&columns) {
        world.add_column(column, [])?;
    }
    Ok(())
}
