use crate::{FieldRow, MapRegion, Size};

/// A rendering surface that a computed section is applied to.
///
/// The layout engine decides what goes where; implementors only copy the
/// results onto their widgets. Most surfaces only need [`header`] and
/// [`fields`].
///
/// [`header`]: SectionRenderer::header
/// [`fields`]: SectionRenderer::fields
pub trait SectionRenderer {
    /// Sets the pinned header label.
    fn header(&mut self, title: &str);

    /// Sets the cell size. Default ignores it.
    fn size(&mut self, size: Size) {
        let _ = size;
    }

    /// Replaces all rows of a key/value cell.
    fn fields(&mut self, rows: &[FieldRow]);

    /// Shows the map for the location section. Default ignores it.
    fn map(&mut self, region: &MapRegion) {
        let _ = region;
    }
}
