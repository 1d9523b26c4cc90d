//! Weather Classification
//! ======================
//! The classic "play tennis" dataset: decide whether to play given the
//! outlook, temperature, humidity and wind. The tree is grown once from an
//! in-memory table and once through the classifier from `resources/weather.csv`.
//!
//! ```bash
//! cargo run --release --example weather
//! ```

use id3_tree::io::read_csv;
use id3_tree::splitter::InformationGainSplitter;
use id3_tree::{Dataset, Id3Classifier, Table, Tree};
use std::collections::BTreeSet;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Sample data: {Outlook, Temperature, Humidity, Wind, Label}
    let table = Table::new(
        [
            ["sunny", "hot", "high", "weak", "no"],
            ["sunny", "hot", "high", "strong", "no"],
            ["overcast", "hot", "high", "weak", "yes"],
            ["rain", "mild", "high", "weak", "yes"],
            ["rain", "cool", "normal", "weak", "yes"],
            ["rain", "cool", "normal", "strong", "no"],
            ["overcast", "cool", "normal", "strong", "yes"],
            ["sunny", "mild", "high", "weak", "no"],
        ],
        ["Outlook", "Temperature", "Humidity", "Wind"],
        4,
    )?;

    let data = Dataset::new(&table);
    let candidates: BTreeSet<usize> = (0..table.n_attributes()).collect();
    let tree = Tree::fit(&InformationGainSplitter, &data, candidates)?;
    print!("{}", tree);

    let instance = ["sunny", "cool", "high", "strong"];
    println!("Classification: {}", tree.classify(&instance, table.attributes())?);

    let table = read_csv("resources/weather.csv", "Play")?;
    let mut classifier = Id3Classifier::default();
    classifier.fit(&table)?;
    println!("Training accuracy: {:.3}", classifier.score(&table)?);
    let unseen = ["foggy", "cool", "high", "strong"];
    println!("Classification of {:?}: {}", unseen, classifier.predict(&unseen)?);

    Ok(())
}
