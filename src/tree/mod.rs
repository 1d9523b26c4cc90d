pub mod predict;
pub mod tree;

// Unit-testing
#[cfg(test)]
mod tests {
    use crate::data::{Dataset, Table};
    use crate::errors::Id3Error;
    use crate::io::read_csv;
    use crate::node::Node;
    use crate::splitter::{InformationGainSplitter, Splitter};
    use crate::tree::predict::Prediction;
    use crate::tree::tree::Tree;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;
    use std::collections::{BTreeSet, HashSet};

    fn weather() -> Table {
        read_csv("resources/weather.csv", "Play").expect("Something went wrong reading the file")
    }

    fn all_attributes(table: &Table) -> BTreeSet<usize> {
        (0..table.n_attributes()).collect()
    }

    fn leaf_labels<'a>(node: &'a Node, labels: &mut Vec<&'a str>) {
        match node {
            Node::Leaf { label } => labels.push(label),
            Node::Internal { children, .. } => children.values().for_each(|c| leaf_labels(c, labels)),
        }
    }

    #[test]
    fn test_tree_fit_weather() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, all_attributes(&table)).unwrap();

        let expected = "\
Attribute: Outlook
  Value: overcast
    Label: yes
  Value: rain
    Attribute: Wind
      Value: strong
        Label: no
      Value: weak
        Label: yes
  Value: sunny
    Label: no
";
        assert_eq!(tree.render(), expected);
        assert_eq!(tree.depth, 2);
        assert_eq!(tree.n_leaves, 4);
        assert_eq!(tree.n_nodes(), 6);
    }

    #[test]
    fn test_tree_classify_weather() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, all_attributes(&table)).unwrap();
        let attributes = table.attributes();

        let prediction = tree.classify(&["sunny", "cool", "high", "strong"], attributes).unwrap();
        assert_eq!(prediction, Prediction::Label("no"));
        assert_eq!(prediction.to_string(), "no");

        let prediction = tree.classify(&["rain", "hot", "normal", "weak"], attributes).unwrap();
        assert_eq!(prediction.label(), Some("yes"));

        for row in 0..table.n_rows() {
            let prediction = tree.classify(&table.instance(row), attributes).unwrap();
            assert_eq!(prediction.label(), Some(table.label(row)));
        }
    }

    #[test]
    fn test_tree_classify_unknown() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, all_attributes(&table)).unwrap();
        let attributes = table.attributes();

        let prediction = tree.classify(&["foggy", "cool", "high", "strong"], attributes).unwrap();
        assert!(prediction.is_unknown());
        assert_eq!(prediction.to_string(), "Unknown");

        // Only the values on the traversed path matter.
        let prediction = tree.classify(&["rain", "freezing", "dry", "calm"], attributes).unwrap();
        assert_eq!(prediction, Prediction::Unknown);
        let prediction = tree.classify(&["overcast", "freezing", "dry", "calm"], attributes).unwrap();
        assert_eq!(prediction, Prediction::Label("yes"));
    }

    #[test]
    fn test_tree_classify_contract_violations() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, all_attributes(&table)).unwrap();

        let err = tree.classify(&["sunny", "cool"], table.attributes()).unwrap_err();
        assert_eq!(err, Id3Error::InstanceLength(2, 4));

        let renamed = ["Sky", "Temperature", "Humidity", "Wind"];
        let err = tree.classify(&["sunny", "cool", "high", "strong"], &renamed).unwrap_err();
        assert_eq!(err, Id3Error::UnknownAttribute("Outlook".to_string()));
    }

    #[test]
    fn test_tree_render_idempotent() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, all_attributes(&table)).unwrap();
        let first = tree.render();
        tree.classify(&["sunny", "cool", "high", "strong"], table.attributes()).unwrap();
        assert_eq!(first, tree.render());
        assert_eq!(first, format!("{}", tree));
    }

    #[test]
    fn test_tree_fit_restricted_candidates() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, BTreeSet::from([1])).unwrap();
        match &tree.root {
            Node::Internal { attribute, children } => {
                assert_eq!(attribute, "Temperature");
                assert_eq!(children.keys().collect::<Vec<_>>(), ["cool", "hot", "mild"]);
                // cool: yes, no, yes; hot: no, no, yes; mild: yes, no.
                assert_eq!(children["cool"], Node::leaf("yes"));
                assert_eq!(children["hot"], Node::leaf("no"));
                assert_eq!(children["mild"], Node::leaf("no"));
            }
            Node::Leaf { .. } => panic!("Expected a split on Temperature"),
        }
        assert_eq!(tree.depth, 1);
    }

    #[test]
    fn test_tree_fit_no_candidates_majority() {
        let table = weather();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, BTreeSet::new()).unwrap();
        // Four "no" and four "yes", the tie goes to the lexicographically first label.
        assert_eq!(tree.root, Node::leaf("no"));
        assert_eq!(tree.render(), "Label: no\n");
        assert_eq!(tree.depth, 0);
    }

    #[test]
    fn test_tree_fit_pure_root() {
        let table = Table::new([["a", "yes"], ["b", "yes"]], ["A"], 1).unwrap();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, BTreeSet::from([0])).unwrap();
        assert_eq!(tree.root, Node::leaf("yes"));
    }

    #[test]
    fn test_tree_fit_conflicting_rows() {
        let table = Table::new([["a", "x"], ["a", "y"], ["a", "y"], ["b", "x"]], ["A"], 1).unwrap();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&InformationGainSplitter, &data, BTreeSet::from([0])).unwrap();
        let expected = "\
Attribute: A
  Value: a
    Label: y
  Value: b
    Label: x
";
        assert_eq!(tree.render(), expected);
    }

    #[test]
    fn test_tree_fit_degenerate_gain() {
        struct NanSplitter;
        impl Splitter for NanSplitter {
            fn split_gain(&self, _data: &Dataset, _attr: usize) -> f64 {
                f64::NAN
            }
        }
        let table = Table::new([["a", "x"], ["b", "y"], ["b", "y"]], ["A"], 1).unwrap();
        let data = Dataset::new(&table);
        let tree = Tree::fit(&NanSplitter, &data, BTreeSet::from([0])).unwrap();
        assert_eq!(tree.root, Node::leaf("y"));
    }

    #[test]
    fn test_tree_fit_invalid_input() {
        let table = weather();
        let data = Dataset::new(&table);
        let err = Tree::fit(&InformationGainSplitter, &data, BTreeSet::from([0, 4])).unwrap_err();
        assert_eq!(err, Id3Error::AttributeIndexOutOfRange(4, 4));

        let empty = data.filter(0, "foggy");
        let err = Tree::fit(&InformationGainSplitter, &empty, all_attributes(&table)).unwrap_err();
        assert_eq!(err, Id3Error::EmptyDataset);
    }

    #[test]
    fn test_tree_random_datasets() {
        let mut rng = StdRng::seed_from_u64(42);
        let tokens = ["a", "b", "c"];
        for _ in 0..50 {
            let n_attributes = rng.gen_range(1..6);
            let n_rows = rng.gen_range(1..60);
            let rows: Vec<Vec<&str>> = (0..n_rows)
                .map(|_| {
                    let mut row: Vec<&str> = (0..n_attributes).map(|_| tokens[rng.gen_range(0..3)]).collect();
                    // The label is a function of the attributes, so the data is consistent.
                    let label = if row[0] == row[n_attributes - 1] { "yes" } else { "no" };
                    row.push(label);
                    row
                })
                .collect();
            let attributes: Vec<String> = (0..n_attributes).map(|i| format!("A{}", i)).collect();
            let table = Table::new(rows, attributes, n_attributes).unwrap();
            let data = Dataset::new(&table);
            let candidates = all_attributes(&table);
            let tree = Tree::fit(&InformationGainSplitter, &data, candidates.clone()).unwrap();

            assert!(tree.depth <= candidates.len());

            let training_labels: HashSet<&str> = table.labels().into_iter().collect();
            let mut labels = Vec::new();
            leaf_labels(&tree.root, &mut labels);
            assert_eq!(labels.len(), tree.n_leaves);
            assert!(labels.iter().all(|l| training_labels.contains(l)));

            for row in 0..table.n_rows() {
                let prediction = tree.classify(&table.instance(row), table.attributes()).unwrap();
                assert_eq!(prediction, Prediction::Label(table.label(row)));
            }
        }
    }
}
