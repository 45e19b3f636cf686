//! Row height computation.

use crate::cell::CellMeasure;
use crate::config::GridConfig;
use crate::grid_index::{row_count, to_index, ColumnCount};
use crate::list::GridList;

/// Height of every row for the list's current contents.
///
/// Each row is as tall as its tallest element plus vertical cell padding,
/// and never shorter than `config.min_height`. Cells past the end of the
/// list contribute nothing.
pub fn measure_rows<L, M>(list: &L, measure: &M, columns: ColumnCount, config: &GridConfig) -> Vec<f32>
where
    L: GridList + ?Sized,
    M: CellMeasure<L::Item> + ?Sized,
{
    let padding = config.cell_padding.vertical();
    (0..row_count(list.len(), columns))
        .map(|row| {
            (0..columns.get())
                .filter_map(|column| list.element_at(to_index(column, row, columns)))
                .map(|element| measure.natural_height(element) + padding)
                .fold(config.min_height, f32::max)
        })
        .collect()
}
