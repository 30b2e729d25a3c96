use crate::model::ProductRecord;
use std::collections::HashMap;

/// Running totals for one product name.
struct Group {
    record: ProductRecord,
    price_sum: f64,
    lines: usize,
}

/// Merge records that share a name and rank them by value.
///
/// Quantities and values are summed, the unit price becomes the mean of the
/// merged lines. Output is sorted by value, highest first; ties keep the
/// order in which each name first appeared. An empty input gives an empty
/// output.
pub fn aggregate(records: Vec<ProductRecord>) -> Vec<ProductRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for record in records {
        match index.get(&record.name) {
            Some(&i) => {
                let group = &mut groups[i];
                group.record.quantity += record.quantity;
                group.record.value += record.value;
                group.price_sum += record.unit_price;
                group.lines += 1;
            }
            None => {
                index.insert(record.name.clone(), groups.len());
                groups.push(Group {
                    price_sum: record.unit_price,
                    lines: 1,
                    record,
                });
            }
        }
    }

    let mut merged: Vec<ProductRecord> = groups
        .into_iter()
        .map(|g| {
            let mut record = g.record;
            record.unit_price = g.price_sum / g.lines as f64;
            record
        })
        .collect();

    merged.sort_by(|a, b| b.value.total_cmp(&a.value));
    merged
}
