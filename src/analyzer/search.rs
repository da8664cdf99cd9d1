use crate::model::Record;
use crate::storage::Dataset;

/// Case-insensitive substring search over product names.
///
/// Results are ordered by ascending price per weight; equal values keep
/// ingestion order. An empty `text` matches every record.
pub fn search<'a>(dataset: &'a Dataset, text: &str) -> Vec<&'a Record> {
    let needle = text.to_lowercase();
    let mut results: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|r| r.product_name.to_lowercase().contains(&needle))
        .collect();
    results.sort_by(|a, b| a.price_per_weight.total_cmp(&b.price_per_weight));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        vec![
            Record::new("Milk 3.2%".into(), 100.0, 10.0, "a_price.csv".into()),
            Record::new("Молоко".into(), 70.0, 1.0, "a_price.csv".into()),
            Record::new("Buttermilk".into(), 40.0, 5.0, "a_price.csv".into()),
            Record::new("milk".into(), 80.0, 10.0, "b_price.csv".into()),
            Record::new("Bread".into(), 30.0, 0.5, "b_price.csv".into()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let data = dataset();
        let found: Vec<_> = search(&data, "MILK")
            .iter()
            .map(|r| (r.product_name.as_str(), r.price_per_weight))
            .collect();
        assert_eq!(
            found,
            vec![("Buttermilk", 8.0), ("milk", 8.0), ("Milk 3.2%", 10.0)]
        );
    }

    #[test]
    fn test_search_same_name_from_two_files() {
        let data: Dataset = vec![
            Record::new("Milk".into(), 100.0, 10.0, "a_price.csv".into()),
            Record::new("Milk".into(), 80.0, 10.0, "b_price.csv".into()),
        ]
        .into_iter()
        .collect();

        let results = search(&data, "milk");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].price_per_weight, 8.0);
        assert_eq!(results[0].source_file, "b_price.csv");
        assert_eq!(results[1].price_per_weight, 10.0);
    }

    #[test]
    fn test_search_cyrillic() {
        let data = dataset();
        let results = search(&data, "молоко");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].product_name, "Молоко");
    }

    #[test]
    fn test_search_empty_text_returns_everything() {
        let data = dataset();
        let results = search(&data, "");
        assert_eq!(results.len(), data.len());
        let keys: Vec<f64> = results.iter().map(|r| r.price_per_weight).collect();
        assert_eq!(keys, vec![8.0, 8.0, 10.0, 60.0, 70.0]);
        assert_eq!(results[0].product_name, "Buttermilk");
    }

    #[test]
    fn test_search_no_match() {
        let data = dataset();
        assert!(search(&data, "cheese").is_empty());
        assert!(search(&Dataset::new(), "").is_empty());
    }

    #[test]
    fn test_search_does_not_reorder_dataset() {
        let data = dataset();
        let _ = search(&data, "");
        assert_eq!(data.records()[0].product_name, "Milk 3.2%");
    }
}
