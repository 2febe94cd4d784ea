use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, key: &str, value: Option<&str>) {
        self.rows.push(TableRow {
            key: key.to_string(),
            value: value.unwrap_or("NULL").to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn entries_table(entries: &[(String, Option<String>)]) -> String {
    let mut builder = TableBuilder::new();
    for (key, value) in entries {
        builder.add_row(key, value.as_deref());
    }
    builder.build()
}
