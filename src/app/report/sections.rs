//! Grouping of test rows into coverage tables

use std::collections::HashMap;

use super::types::{ImplementationData, ImplementationTable};

/// Group rows by coverage category
///
/// Rows keep their relative order inside a table. Tables are sorted by header
/// so the order is deterministic even when no external ordering is applied.
pub fn create_implementation_tables(
    implementation_data: Vec<ImplementationData>,
) -> Vec<ImplementationTable> {
    let mut tables: Vec<ImplementationTable> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for data in implementation_data {
        let header = data.metadata.coverage.clone();
        match index.get(&header).copied() {
            Some(position) => tables[position].implementations.push(data),
            None => {
                index.insert(header.clone(), tables.len());
                tables.push(ImplementationTable {
                    header,
                    implementations: vec![data],
                });
            }
        }
    }

    tables.sort_by(|a, b| a.header.cmp(&b.header));
    tables
}
