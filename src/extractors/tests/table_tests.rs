use crate::dom::NoiseFilter;
use crate::extractors::tables;
use crate::results::TableRecord;
use scraper::Html;

#[cfg(test)]
mod table_extraction_tests {
    use super::*;

    fn extract(html: &str) -> Vec<TableRecord> {
        let doc = Html::parse_document(html);
        let filter = NoiseFilter::default();
        tables::extract(filter.strip(doc.root_element()))
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn test_rows_and_empty_rows() {
        let tables = extract("<table><tr><th>A</th><td> B </td><td>C</td></tr><tr></tr></table>");
        assert_eq!(
            tables,
            vec![TableRecord {
                rows: vec![row(&["A", "B", "C"]), Vec::new()],
            }]
        );
    }

    #[test]
    fn test_sections_keep_document_order() {
        let html = r#"
            <table>
                <thead><tr><th>Name</th><th>Qty</th></tr></thead>
                <tbody><tr><td>Apple</td><td>3</td></tr></tbody>
                <tfoot><tr><td>Total</td><td>3</td></tr></tfoot>
            </table>
            <table><tr><td>Second</td></tr></table>
        "#;
        let tables = extract(html);

        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables[0].rows,
            vec![
                row(&["Name", "Qty"]),
                row(&["Apple", "3"]),
                row(&["Total", "3"]),
            ]
        );
        assert_eq!(tables[1].rows, vec![row(&["Second"])]);
    }

    #[test]
    fn test_nested_tables() {
        let html = "<table><tr><td>Outer<table><tr><td>Inner</td></tr></table></td></tr></table>";
        let tables = extract(html);

        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables[0].rows,
            vec![row(&["OuterInner", "Inner"]), row(&["Inner"])]
        );
        assert_eq!(tables[1].rows, vec![row(&["Inner"])]);
    }

    #[test]
    fn test_table_without_rows() {
        let tables = extract("<table></table>");
        assert_eq!(tables, vec![TableRecord { rows: Vec::new() }]);
    }
}
