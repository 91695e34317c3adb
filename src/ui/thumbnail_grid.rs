// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid.
//!
//! Shows every image of the carousel as a selectable cell. The grid keeps
//! its own selected index and reports clicks through the callback
//! registered with [`ThumbnailGrid::on_select`]; it never touches
//! navigation state itself.

use crate::config::{DEFAULT_THUMBNAIL_COLUMNS, THUMBNAIL_SIZE, THUMBNAIL_SPACING};
use crate::domain::ImageAsset;
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, container, image, Column, Id, Row, Scrollable, Text};
use iced::{ContentFit, Element, Length};
use std::fmt;
use std::sync::Arc;

/// Identifier of the grid's scrollable, for scroll operations.
pub const SCROLLABLE_ID: &str = "thumbnail-grid";

/// Messages emitted by the grid's widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Clicked(usize),
}

/// One cell of the grid.
#[derive(Debug, Clone)]
pub struct ThumbnailCell {
    pub name: String,
    pub handle: Handle,
    pub selected: bool,
}

pub struct ThumbnailGrid<M> {
    cells: Vec<ThumbnailCell>,
    selected: Option<usize>,
    columns: usize,
    viewport_height: f32,
    /// Vertical scroll position in pixels.
    scroll_offset: f32,
    on_select: Option<Box<dyn Fn(usize) -> M>>,
}

impl<M> fmt::Debug for ThumbnailGrid<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThumbnailGrid")
            .field("cells", &self.cells.len())
            .field("selected", &self.selected)
            .field("columns", &self.columns)
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}

impl<M> Default for ThumbnailGrid<M> {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            selected: None,
            columns: DEFAULT_THUMBNAIL_COLUMNS,
            viewport_height: 3.0 * row_pitch(),
            scroll_offset: 0.0,
            on_select: None,
        }
    }
}

/// Height of one row including the gap below it.
fn row_pitch() -> f32 {
    THUMBNAIL_SIZE + THUMBNAIL_SPACING
}

impl<M> ThumbnailGrid<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the callback invoked with the index of a clicked cell.
    pub fn on_select(&mut self, callback: impl Fn(usize) -> M + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Rebuilds all cells and highlights `current`.
    pub fn set_images(&mut self, images: &[Arc<ImageAsset>], current: Option<usize>) {
        let current = current.filter(|index| *index < images.len());
        self.cells = images
            .iter()
            .enumerate()
            .map(|(index, asset)| ThumbnailCell {
                name: asset.name().to_string(),
                handle: Handle::from_path(asset.locator()),
                selected: Some(index) == current,
            })
            .collect();
        self.selected = current;
        self.scroll_offset = 0.0;
        if let Some(index) = current {
            self.reveal(index);
        }
    }

    /// Moves the highlight to `index`.
    ///
    /// Only the previously and newly selected cells are restyled; their
    /// indices are returned. Out-of-range indices are ignored.
    pub fn update_selection(&mut self, index: usize) -> Vec<usize> {
        if index >= self.cells.len() {
            return Vec::new();
        }
        let mut restyled = Vec::with_capacity(2);
        if let Some(previous) = self.selected.filter(|previous| *previous != index) {
            if let Some(cell) = self.cells.get_mut(previous) {
                cell.selected = false;
                restyled.push(previous);
            }
        }
        if let Some(cell) = self.cells.get_mut(index) {
            if !cell.selected {
                cell.selected = true;
                restyled.push(index);
            }
        }
        self.selected = Some(index);
        self.reveal(index);
        restyled
    }

    /// Handles a widget message, returning the registered callback's output.
    pub fn update(&mut self, message: Message) -> Option<M> {
        match message {
            Message::Clicked(index) => {
                if index >= self.cells.len() {
                    return None;
                }
                self.update_selection(index);
                self.on_select.as_ref().map(|callback| callback(index))
            }
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn cells(&self) -> &[ThumbnailCell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sets the visible height of the grid, in pixels.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        if let Some(index) = self.selected {
            self.reveal(index);
        }
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll position as a fraction of the scrollable range.
    #[must_use]
    pub fn relative_offset(&self) -> RelativeOffset {
        let range = (self.content_height() - self.viewport_height).max(0.0);
        let y = if range > 0.0 {
            (self.scroll_offset / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        RelativeOffset { x: 0.0, y }
    }

    fn rows(&self) -> usize {
        self.cells.len().div_ceil(self.columns)
    }

    fn content_height(&self) -> f32 {
        THUMBNAIL_SPACING + self.rows() as f32 * row_pitch()
    }

    /// Adjusts the scroll offset so the row holding `index` is visible.
    fn reveal(&mut self, index: usize) {
        let row = index / self.columns;
        let top = row as f32 * row_pitch();
        let bottom = top + row_pitch() + THUMBNAIL_SPACING;
        if top < self.scroll_offset {
            self.scroll_offset = top;
        } else if bottom > self.scroll_offset + self.viewport_height {
            self.scroll_offset = (bottom - self.viewport_height).max(0.0);
        }
    }

    /// Renders the grid.
    pub fn view(&self) -> Element<'_, Message> {
        let mut grid = Column::new()
            .spacing(THUMBNAIL_SPACING)
            .padding(THUMBNAIL_SPACING);

        for (row_index, row_cells) in self.cells.chunks(self.columns).enumerate() {
            let mut row = Row::new().spacing(THUMBNAIL_SPACING);
            for (column, cell) in row_cells.iter().enumerate() {
                let index = row_index * self.columns + column;
                row = row.push(cell_view(cell, index));
            }
            grid = grid.push(row);
        }

        Scrollable::new(grid)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn cell_view(cell: &ThumbnailCell, index: usize) -> Element<'_, Message> {
    let picture = image(cell.handle.clone())
        .width(Length::Fixed(THUMBNAIL_SIZE))
        .height(Length::Fixed(THUMBNAIL_SIZE - typography::CAPTION * 1.5))
        .content_fit(ContentFit::Contain);

    let label = Text::new(cell.name.as_str())
        .size(typography::CAPTION)
        .width(Length::Fill);

    let content = container(Column::new().push(picture).push(label))
        .width(Length::Fixed(THUMBNAIL_SIZE))
        .height(Length::Fixed(THUMBNAIL_SIZE));

    let style = if cell.selected {
        styles::button::thumbnail_selected
    } else {
        styles::button::thumbnail
    };

    button(content)
        .padding(0.0)
        .style(style)
        .on_press(Message::Clicked(index))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn images(count: usize) -> Vec<Arc<ImageAsset>> {
        (0..count)
            .map(|i| Arc::new(ImageAsset::new(format!("/pics/{i}.png"), 64, 64)))
            .collect()
    }

    fn highlighted(grid: &ThumbnailGrid<usize>) -> Vec<usize> {
        grid.cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.selected)
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn set_images_highlights_current() {
        let mut grid = ThumbnailGrid::<usize>::new();
        grid.set_images(&images(4), Some(2));

        assert_eq!(grid.len(), 4);
        assert_eq!(grid.selected_index(), Some(2));
        assert_eq!(highlighted(&grid), vec![2]);
        assert_eq!(grid.cells()[1].name, "1.png");
    }

    #[test]
    fn update_selection_restyles_only_two_cells() {
        let mut grid = ThumbnailGrid::<usize>::new();
        grid.set_images(&images(6), Some(0));

        assert_eq!(grid.update_selection(4), vec![0, 4]);
        assert_eq!(highlighted(&grid), vec![4]);
        assert_eq!(grid.update_selection(4), Vec::<usize>::new());
        assert_eq!(grid.update_selection(9), Vec::<usize>::new());
        assert_eq!(grid.selected_index(), Some(4));
    }

    #[test]
    fn click_reports_through_callback() {
        let mut grid = ThumbnailGrid::new();
        grid.on_select(|index| index * 10);
        grid.set_images(&images(3), Some(0));

        assert_eq!(grid.update(Message::Clicked(2)), Some(20));
        assert_eq!(grid.selected_index(), Some(2));
        assert_eq!(grid.update(Message::Clicked(7)), None);
    }

    #[test]
    fn click_without_callback_still_selects() {
        let mut grid = ThumbnailGrid::<()>::new();
        grid.set_images(&images(3), None);

        assert_eq!(grid.update(Message::Clicked(1)), None);
        assert_eq!(grid.selected_index(), Some(1));
    }

    #[test]
    fn selection_scrolls_into_view() {
        let mut grid = ThumbnailGrid::<usize>::new();
        grid.set_viewport_height(row_pitch() * 2.0);
        grid.set_images(&images(50), Some(0));
        assert_abs_diff_eq!(grid.scroll_offset(), 0.0);

        // Row 6 of 10.
        grid.update_selection(32);
        let top = 6.0 * row_pitch();
        assert!(grid.scroll_offset() <= top);
        assert!(grid.scroll_offset() + row_pitch() * 2.0 >= top + row_pitch());

        grid.update_selection(0);
        assert_abs_diff_eq!(grid.scroll_offset(), 0.0);
        assert_abs_diff_eq!(grid.relative_offset().y, 0.0);
    }

    #[test]
    fn empty_grid_has_no_selection() {
        let mut grid = ThumbnailGrid::<usize>::new();
        grid.set_images(&[], Some(0));
        assert!(grid.is_empty());
        assert_eq!(grid.selected_index(), None);
    }
}
