use fof_model::FlatRecord;

/// Contents of a CSV file: its header row and one flat record per data row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTable {
    pub headers: Vec<String>,
    pub records: Vec<FlatRecord>,
}

impl FlatTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
