
use crate::record::{format_marks, Record};
use crate::record_store::RecordStore;

const ROLL_WIDTH: usize = 8;
const NAME_WIDTH: usize = 24;
const MARKS_WIDTH: usize = 10;

/// Filtered, rendered view over a store. Rebuilt from the full store each time.
#[derive(Debug, Default, Clone)]
pub struct TableView {
    filter: String,
}

impl TableView {
    pub fn new() -> Self {
        Self {
            filter: String::new(),
        }
    }

    pub fn filter(mut self, text: impl AsRef<str>) -> Self {
        self.set_filter(text);
        self
    }

    pub fn set_filter(&mut self, text: impl AsRef<str>) {
        self.filter = text.as_ref().to_lowercase();
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.roll_no.to_string().to_lowercase().contains(&self.filter)
            || record.name.to_lowercase().contains(&self.filter)
            || format_marks(record.marks).to_lowercase().contains(&self.filter)
    }

    pub fn rows<'a>(&self, store: &'a RecordStore) -> Vec<&'a Record> {
        store.iter().filter(|record| self.matches(record)).collect()
    }

    pub fn render(&self, store: &RecordStore) -> String {
        let mut out = format!(
            "{:^rw$} {:<nw$} {:>mw$}\n",
            "Roll No",
            "Name",
            "Marks",
            rw = ROLL_WIDTH,
            nw = NAME_WIDTH,
            mw = MARKS_WIDTH
        );
        out.push_str(&"-".repeat(ROLL_WIDTH + NAME_WIDTH + MARKS_WIDTH + 2));
        out.push('\n');

        for record in self.rows(store) {
            out.push_str(&format!(
                "{:^rw$} {:<nw$} {:>mw$}\n",
                record.roll_no,
                record.name,
                format_marks(record.marks),
                rw = ROLL_WIDTH,
                nw = NAME_WIDTH,
                mw = MARKS_WIDTH
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::TableView;
    use crate::record_store::RecordStore;

    fn store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add(1, "Alice", 90.0);
        store.add(2, "Bob", 90.5);
        store.add(13, "Malice", 41.0);
        store
    }

    fn rolls(view: &TableView, store: &RecordStore) -> Vec<i64> {
        view.rows(store).iter().map(|r| r.roll_no).collect()
    }

    #[test]
    fn empty_filter_shows_everything() {
        let store = store();
        assert_eq!(rolls(&TableView::new(), &store), vec![1, 2, 13]);
    }

    #[test]
    fn filter_is_case_insensitive_on_name() {
        let store = store();
        assert_eq!(rolls(&TableView::new().filter("ALI"), &store), vec![1, 13]);
    }

    #[test]
    fn filter_matches_roll_and_marks_text() {
        let store = store();
        assert_eq!(rolls(&TableView::new().filter("90.5"), &store), vec![2]);
        assert_eq!(rolls(&TableView::new().filter("1"), &store), vec![1, 13]);
        assert_eq!(rolls(&TableView::new().filter(".0"), &store), vec![1, 13]);
        assert!(rolls(&TableView::new().filter("zzz"), &store).is_empty());
    }

    #[test]
    fn render_lists_filtered_rows() {
        let store = store();
        let rendered = TableView::new().filter("bob").render(&store);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Roll No"));
        assert!(lines[2].contains("Bob"));
        assert!(lines[2].trim_end().ends_with("90.5"));
    }
}
