use std::{env, process};

use resource_descriptor::{Manifest, Template};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: cargo run --example render -- <describe|template> <manifest.json|manifest.toml>";

enum Op {
    Describe,
    Template,
}

impl std::str::FromStr for Op {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "describe" => Ok(Self::Describe),
            "template" => Ok(Self::Template),
            _ => Err(()),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = try_main() {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let [op, path]: [_; 2] = env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| USAGE)?;
    let op = op.parse().map_err(|()| USAGE)?;

    let manifest = Manifest::load(path)?;

    match op {
        Op::Describe => {
            let descriptions = manifest.build()?;
            for (logical_id, description) in &descriptions {
                println!("# {}", logical_id);
                println!("{}", serde_json::to_string_pretty(description)?);
            }
        }
        Op::Template => {
            let template = Template::from_manifest(&manifest)?;
            println!("{}", template.body_pretty()?);
        }
    }

    Ok(())
}
