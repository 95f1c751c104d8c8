//! Column definitions

/// A column of the list, as known to the sort controls.
///
/// Only sortable columns react to sort toggles. `desc_first` makes the first
/// toggle sort descending instead of ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Field name used as the sort key on the server.
    pub id: String,
    /// Header label for the rendering layer.
    pub header: String,
    /// Whether toggling this column changes the sort.
    pub sortable: bool,
    /// Whether the first toggle sorts descending.
    pub desc_first: bool,
}

impl Column {
    /// Creates a sortable column that sorts ascending first.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            desc_first: false,
        }
    }

    /// Disables sorting on this column.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Makes the first toggle sort descending.
    pub fn desc_first(mut self) -> Self {
        self.desc_first = true;
        self
    }
}

/// The `id` and `title` columns of a json-server posts resource.
pub fn default_columns() -> Vec<Column> {
    vec![Column::new("id", "ID"), Column::new("title", "Title")]
}

/// Finds a column by id.
pub fn find_column<'a>(columns: &'a [Column], id: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.id == id)
}
