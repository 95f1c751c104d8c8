//! Sort specification types.

use crate::model::Column;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the `_order` token for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Returns `true` for descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Self::Desc)
    }

    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// One entry of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Column id, sent as-is in `_sort`.
    pub column_id: String,
    /// Direction, sent in `_order`.
    pub direction: Direction,
}

impl SortKey {
    /// Creates a new sort key.
    pub fn new(column_id: impl Into<String>, direction: Direction) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }
}

/// Ordered list of sort keys.
///
/// The order is significant: the server sorts by the first key, then the
/// second, and so on. Column ids are expected to be unique; duplicates are
/// forwarded unchanged.
///
/// # Example
///
/// ```
/// use listview_lib::query::SortSpec;
///
/// let sort = SortSpec::desc("id").then_asc("title");
/// assert_eq!(sort.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Creates an empty sort specification (server default order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            keys: vec![SortKey::new(column_id, Direction::Asc)],
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            keys: vec![SortKey::new(column_id, Direction::Desc)],
        }
    }

    /// Adds a secondary ascending key.
    pub fn then_asc(mut self, column_id: impl Into<String>) -> Self {
        self.keys.push(SortKey::new(column_id, Direction::Asc));
        self
    }

    /// Adds a secondary descending key.
    pub fn then_desc(mut self, column_id: impl Into<String>) -> Self {
        self.keys.push(SortKey::new(column_id, Direction::Desc));
        self
    }

    /// Returns the sort keys in order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns `true` if no sort is applied.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of sort keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the direction a column is currently sorted in.
    pub fn direction_of(&self, column_id: &str) -> Option<Direction> {
        self.keys
            .iter()
            .find(|k| k.column_id == column_id)
            .map(|k| k.direction)
    }

    /// Computes the sort that results from toggling a column header.
    ///
    /// A column cycles through its first direction, the opposite direction,
    /// and unsorted. Without `multi` the toggled column replaces every other
    /// key; with `multi` it is updated in place or appended.
    pub fn toggled(&self, column: &Column, multi: bool) -> Self {
        let first = if column.desc_first {
            Direction::Desc
        } else {
            Direction::Asc
        };
        let next = match self.direction_of(&column.id) {
            None => Some(first),
            Some(current) if current == first => Some(current.reverse()),
            Some(_) => None,
        };

        if !multi {
            return Self {
                keys: next
                    .map(|direction| SortKey::new(column.id.clone(), direction))
                    .into_iter()
                    .collect(),
            };
        }

        let mut keys = self.keys.clone();
        match (keys.iter().position(|k| k.column_id == column.id), next) {
            (Some(index), Some(direction)) => keys[index].direction = direction,
            (Some(index), None) => {
                keys.remove(index);
            }
            (None, Some(direction)) => keys.push(SortKey::new(column.id.clone(), direction)),
            (None, None) => {}
        }
        Self { keys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> Column {
        Column::new("title", "Title")
    }

    #[test]
    fn test_toggle_cycles_asc_desc_none() {
        let column = title();
        let sort = SortSpec::new().toggled(&column, false);
        assert_eq!(sort, SortSpec::asc("title"));

        let sort = sort.toggled(&column, false);
        assert_eq!(sort, SortSpec::desc("title"));

        let sort = sort.toggled(&column, false);
        assert!(sort.is_empty());
    }

    #[test]
    fn test_toggle_desc_first_column() {
        let column = Column::new("id", "ID").desc_first();
        let sort = SortSpec::new().toggled(&column, false);
        assert_eq!(sort, SortSpec::desc("id"));

        let sort = sort.toggled(&column, false);
        assert_eq!(sort, SortSpec::asc("id"));

        assert!(sort.toggled(&column, false).is_empty());
    }

    #[test]
    fn test_single_toggle_replaces_other_columns() {
        let sort = SortSpec::desc("id").then_asc("userId");
        let sort = sort.toggled(&title(), false);
        assert_eq!(sort, SortSpec::asc("title"));
    }

    #[test]
    fn test_multi_toggle_appends_and_updates_in_place() {
        let sort = SortSpec::desc("id");
        let sort = sort.toggled(&title(), true);
        assert_eq!(sort, SortSpec::desc("id").then_asc("title"));

        let sort = sort.toggled(&title(), true);
        assert_eq!(sort, SortSpec::desc("id").then_desc("title"));

        let sort = sort.toggled(&title(), true);
        assert_eq!(sort, SortSpec::desc("id"));
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::Asc.as_str(), "asc");
        assert_eq!(Direction::Desc.as_str(), "desc");
        assert!(Direction::Asc.reverse().is_desc());
    }
}
