use anyhow::{Context, Result};
use poset_pairs::{Item, PosetDataset, TaskConfig};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Summary<'a> {
    task: &'a str,
    items: &'a [Item],
    pairs: usize,
    train_indices: &'a [usize],
    test_indices: &'a [usize],
    labels: Vec<u8>,
}

fn summarize<'a>(task: &'a str, ds: &'a PosetDataset) -> Result<Summary<'a>> {
    let labels = (0..ds.len())
        .map(|idx| ds.get(idx).map(|example| example.label))
        .collect::<poset_pairs::Result<Vec<u8>>>()?;
    Ok(Summary {
        task,
        items: ds.itemset(),
        pairs: ds.len(),
        train_indices: ds.train_indices(),
        test_indices: ds.test_indices(),
        labels,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // One JSON task description on stdin
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    let task = TaskConfig::from_json(buf.trim())?.into_task()?;
    let itemset = task
        .initialize_itemset()
        .with_context(|| format!("initializing itemset for task {:?}", task.name()))?;
    let ds = task.master_dataset(itemset)?;

    println!("{}", serde_json::to_string_pretty(&summarize(task.name(), &ds)?)?);
    Ok(())
}
