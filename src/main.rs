use anyhow::{bail, Context, Result};
use clap::Parser;
use landmark_matching::{Label, LabelSet, MatchPipeline, RegistryConfig};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

/// Resolve a set of weighted classifier labels against the landmark registry.
#[derive(Debug, Parser)]
#[command(name = "landmark_match")]
struct Args {
    /// JSON file holding the label set: [{"name": "...", "confidence": 96.0}, ...]
    #[arg(long, conflicts_with = "labels")]
    labels_file: Option<PathBuf>,

    /// Inline labels as NAME=CONFIDENCE pairs
    #[arg(value_name = "NAME=CONFIDENCE")]
    labels: Vec<String>,

    /// Landmark registry JSON file (overrides LANDMARK_REGISTRY_PATH)
    #[arg(long)]
    registry: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let args = Args::parse();

    let mut config = RegistryConfig::from_env();
    if args.registry.is_some() {
        config.path = args.registry.clone();
    }
    config.log_config();

    let registry = config.load().context("Failed to load landmark registry")?;
    info!("Loaded {} landmark definitions", registry.len());

    let label_set = read_labels(&args)?;
    info!("Matching {} labels", label_set.len());

    let pipeline = MatchPipeline::new(Arc::new(registry));
    let result = pipeline.match_labels(&label_set);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn read_labels(args: &Args) -> Result<LabelSet> {
    let labels = if let Some(path) = &args.labels_file {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read label file {}", path.display()))?;
        serde_json::from_str::<Vec<Label>>(&json)
            .with_context(|| format!("Invalid label file {}", path.display()))?
    } else {
        args.labels
            .iter()
            .map(|pair| parse_label(pair))
            .collect::<Result<Vec<_>>>()?
    };
    LabelSet::new(labels)
}

fn parse_label(pair: &str) -> Result<Label> {
    let Some((name, confidence)) = pair.rsplit_once('=') else {
        bail!("label '{}' is not in NAME=CONFIDENCE form", pair);
    };
    let confidence: f64 = confidence
        .trim()
        .parse()
        .with_context(|| format!("label '{}' has a non-numeric confidence", pair))?;
    Ok(Label::new(name.trim(), confidence))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        let label = parse_label("Eiffel Tower=96.5").unwrap();
        assert_eq!(label.name, "Eiffel Tower");
        assert_eq!(label.confidence, 96.5);
    }

    #[test]
    fn test_parse_label_rejects_bad_input() {
        assert!(parse_label("Eiffel Tower").is_err());
        assert!(parse_label("Eiffel Tower=high").is_err());
    }
}
