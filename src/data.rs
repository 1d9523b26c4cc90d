//! Data
//!
//! Containers for categorical training data. A [`Table`] owns the validated
//! rows and attribute names; a [`Dataset`] is a cheap view over a subset of
//! the rows of a table, narrowed with [`Dataset::filter`] while a tree is grown.
use crate::errors::Id3Error;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Rectangular table of categorical tokens with a designated label column.
///
/// Every row holds one value per attribute plus the label. The label may sit
/// at any column, attribute `i` lives in column `i` when `i < label_index`
/// and in column `i + 1` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Vec<String>>,
    attributes: Vec<String>,
    label_index: usize,
}

impl Table {
    /// Create a new table, validating its layout.
    ///
    /// * `rows` - The rows of the table, each with `attributes.len() + 1` values.
    /// * `attributes` - The names of the non-label columns, in order.
    /// * `label_index` - The column holding the label of each row.
    pub fn new<R, V, A>(rows: R, attributes: A, label_index: usize) -> Result<Self, Id3Error>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = V>,
        V: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();
        let width = attributes.len() + 1;
        if label_index >= width {
            return Err(Id3Error::LabelIndexOutOfRange(label_index, width));
        }

        let mut seen = HashSet::with_capacity(attributes.len());
        for name in &attributes {
            if !seen.insert(name.as_str()) {
                return Err(Id3Error::DuplicateAttribute(name.clone()));
            }
        }

        let mut table_rows = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            let row: Vec<String> = row.into_iter().map(Into::into).collect();
            if row.len() != width {
                return Err(Id3Error::RaggedRow(i, row.len(), width));
            }
            table_rows.push(row);
        }

        Ok(Table {
            rows: table_rows,
            attributes,
            label_index,
        })
    }

    /// Number of rows in the table.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of attributes, excluding the label.
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// The attribute names, indexed by attribute index.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// The column holding the label.
    pub fn label_index(&self) -> usize {
        self.label_index
    }

    /// Value of attribute `attr` in row `row`.
    pub fn value(&self, row: usize, attr: usize) -> &str {
        &self.rows[row][self.column(attr)]
    }

    /// Label of row `row`.
    pub fn label(&self, row: usize) -> &str {
        &self.rows[row][self.label_index]
    }

    /// All labels, in row order.
    pub fn labels(&self) -> Vec<&str> {
        (0..self.n_rows()).map(|i| self.label(i)).collect()
    }

    /// The attribute values of a row with the label removed, suitable
    /// for classification.
    pub fn instance(&self, row: usize) -> Vec<&str> {
        (0..self.n_attributes()).map(|attr| self.value(row, attr)).collect()
    }

    fn column(&self, attr: usize) -> usize {
        if attr < self.label_index {
            attr
        } else {
            attr + 1
        }
    }
}

/// Read-only view over a subset of the rows of a [`Table`].
///
/// Views share the attribute names of their table and only own the
/// indices of the rows they contain.
#[derive(Debug, Clone)]
pub struct Dataset<'a> {
    table: &'a Table,
    /// Indices of the table rows in this view, in table order.
    pub index: Vec<usize>,
}

impl<'a> Dataset<'a> {
    /// Create a view over every row of the table.
    pub fn new(table: &'a Table) -> Self {
        Dataset {
            table,
            index: (0..table.n_rows()).collect(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn n_attributes(&self) -> usize {
        self.table.n_attributes()
    }

    pub fn attributes(&self) -> &'a [String] {
        self.table.attributes()
    }

    /// Value of attribute `attr` in the `row`-th row of the view.
    pub fn value(&self, row: usize, attr: usize) -> &'a str {
        self.table.value(self.index[row], attr)
    }

    /// Label of the `row`-th row of the view.
    pub fn label(&self, row: usize) -> &'a str {
        self.table.label(self.index[row])
    }

    /// Iterate over the labels of the view, in row order.
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.index.iter().map(|&i| self.table.label(i))
    }

    /// Distinct values of attribute `attr`, in lexicographic order.
    pub fn unique_values(&self, attr: usize) -> BTreeSet<&'a str> {
        self.index.iter().map(|&i| self.table.value(i, attr)).collect()
    }

    /// Number of rows carrying each label, keyed in lexicographic order.
    pub fn class_counts(&self) -> BTreeMap<&'a str, usize> {
        self.labels().fold(BTreeMap::new(), |mut counts, label| {
            *counts.entry(label).or_insert(0) += 1;
            counts
        })
    }

    /// Narrow the view to the rows where attribute `attr` equals `value`.
    /// Row order is preserved, and the result is empty if nothing matches.
    pub fn filter(&self, attr: usize, value: &str) -> Dataset<'a> {
        let index = self
            .index
            .iter()
            .copied()
            .filter(|&i| self.table.value(i, attr) == value)
            .collect();
        Dataset {
            table: self.table,
            index,
        }
    }
}
