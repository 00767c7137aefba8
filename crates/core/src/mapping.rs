/// Maps each required input variable to a column of a raw table.
///
/// Entry `j` holds the raw-table column index supplying input variable `j`,
/// or `None` if no column carries that name.
/// Column 0 is the time axis and never matches an input variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    indices: Vec<Option<usize>>,
}

impl ColumnMapping {
    /// Matches `required` names against table `columns`.
    ///
    /// Matching is exact and case-sensitive.
    /// When a name appears in several columns, the first one wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use extin_core::ColumnMapping;
    ///
    /// let mapping = ColumnMapping::new(&["u2", "u1", "u3"], &["time", "u1", "u2"]);
    ///
    /// assert_eq!(mapping.get(0), Some(2));
    /// assert_eq!(mapping.get(1), Some(1));
    /// assert_eq!(mapping.get(2), None);
    /// ```
    #[must_use]
    pub fn new<R, C>(required: &[R], columns: &[C]) -> Self
    where
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let indices = required
            .iter()
            .map(|name| {
                columns
                    .iter()
                    .skip(1)
                    .position(|column| column.as_ref() == name.as_ref())
                    .map(|position| position + 1)
            })
            .collect();

        Self { indices }
    }

    /// Returns the number of required input variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the column for input variable `input`, if one was matched.
    #[must_use]
    pub fn get(&self, input: usize) -> Option<usize> {
        self.indices.get(input).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.indices.iter().copied()
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.indices.iter().filter(|index| index.is_some()).count()
    }

    /// Returns the input variables that have no matching column.
    pub fn absent(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices
            .iter()
            .enumerate()
            .filter_map(|(input, index)| index.is_none().then_some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_column_is_never_matched() {
        let mapping = ColumnMapping::new(&["time", "u"], &["time", "u"]);
        assert_eq!(mapping.get(0), None);
        assert_eq!(mapping.get(1), Some(1));
    }

    #[test]
    fn first_duplicate_wins() {
        let mapping = ColumnMapping::new(&["u"], &["t", "v", "u", "u"]);
        assert_eq!(mapping.get(0), Some(2));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let mapping = ColumnMapping::new(&["U", "u"], &["t", "u"]);
        assert_eq!(mapping.get(0), None);
        assert_eq!(mapping.get(1), Some(1));
    }

    #[test]
    fn absent_lists_unmatched_inputs() {
        let mapping = ColumnMapping::new(&["a", "b", "c", "d"], &["t", "c", "a"]);

        assert_eq!(mapping.len(), 4);
        assert_eq!(mapping.matched_count(), 2);
        assert_eq!(mapping.absent().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(
            mapping.iter().collect::<Vec<_>>(),
            vec![Some(2), None, Some(1), None]
        );
    }

    #[test]
    fn no_required_inputs() {
        let mapping = ColumnMapping::new::<&str, _>(&[], &["t", "a"]);
        assert!(mapping.is_empty());
        assert_eq!(mapping.get(0), None);
    }
}
