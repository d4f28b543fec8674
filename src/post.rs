//! Functional completeness by Post's criterion.
//!
//! A set of Boolean functions is functionally complete iff for each of the
//! five Post classes some function of the set lies outside that class.

use std::fmt;

use log::debug;

use crate::classify::{PostClass, PostClasses};
use crate::truth_vector::TruthVector;

/// `true` iff no Post class contains every function in `functions`.
///
/// An empty set is never complete.
pub fn is_complete(functions: &[PostClasses]) -> bool {
    PostClass::ALL
        .iter()
        .all(|&class| functions.iter().any(|f| !f.contains(class)))
}

/// Classes that contain every function in `functions`, i.e. the reasons the
/// set is not complete.
pub fn missing_classes(functions: &[PostClasses]) -> Vec<PostClass> {
    PostClass::ALL
        .into_iter()
        .filter(|&class| functions.iter().all(|f| f.contains(class)))
        .collect()
}

/// The Post table: one row per function, one column per class.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PostTable {
    names: Vec<String>,
    rows: Vec<PostClasses>,
}

impl PostTable {
    pub fn new(rows: Vec<PostClasses>) -> Self {
        let names = (1..=rows.len()).map(|i| format!("f{}", i)).collect();
        Self { names, rows }
    }

    /// Classifies each function, naming rows by their truth vectors.
    pub fn from_functions<'a>(functions: impl IntoIterator<Item = &'a TruthVector>) -> Self {
        let (names, rows) = functions.into_iter().map(|f| (f.value(), f.classify())).unzip();
        Self { names, rows }
    }

    pub fn rows(&self) -> &[PostClasses] {
        &self.rows
    }

    /// The table as a boolean matrix, columns in [`PostClass::ALL`] order.
    pub fn matrix(&self) -> Vec<[bool; 5]> {
        self.rows.iter().map(PostClasses::as_row).collect()
    }

    pub fn is_complete(&self) -> bool {
        let complete = is_complete(&self.rows);
        debug!("is_complete({} functions) = {}", self.rows.len(), complete);
        complete
    }

    pub fn missing_classes(&self) -> Vec<PostClass> {
        missing_classes(&self.rows)
    }
}

/// Renders one line per function with `+` for membership:
///
/// ```text
///       T0 T1 Ts Tm Tl
/// 0001  +  +  -  +  -
/// ```
impl fmt::Display for PostTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.names.iter().map(String::len).max().unwrap_or(0);
        write!(f, "{:width$}", "", width = width)?;
        for class in PostClass::ALL {
            write!(f, " {:<2}", class)?;
        }
        for (name, row) in self.names.iter().zip(&self.rows) {
            writeln!(f)?;
            write!(f, "{:width$}", name, width = width)?;
            for member in row.as_row() {
                write!(f, " {:<2}", if member { "+" } else { "-" })?;
            }
        }
        Ok(())
    }
}
