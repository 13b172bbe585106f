use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Write a sample product catalog for local runs.
#[derive(Parser)]
#[command(name = "generate_catalog")]
struct Args {
    #[arg(long, default_value = "products.csv")]
    output: PathBuf,

    /// Products per gender.
    #[arg(long, default_value_t = 24)]
    per_gender: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const COLORS: [&str; 10] = [
    "Emerald", "Sapphire", "Ruby", "Terracotta", "Mustard", "Olive", "Teal", "Coral", "Cream",
    "Charcoal",
];

const FEMALE_ITEMS: [(&str, &str); 8] = [
    ("Wrap Dress", "dresses"),
    ("Peplum Top", "tops"),
    ("A-Line Skirt", "skirts"),
    ("Belted Trench", "outerwear"),
    ("Wide-Leg Trousers", "bottoms"),
    ("Empire Waist Dress", "dresses"),
    ("Boat Neck Blouse", "tops"),
    ("Cropped Blazer", "outerwear"),
];

const MALE_ITEMS: [(&str, &str); 8] = [
    ("Slim Oxford Shirt", "tops"),
    ("Unstructured Blazer", "outerwear"),
    ("Straight Chinos", "bottoms"),
    ("Merino Crewneck", "knitwear"),
    ("Bomber Jacket", "outerwear"),
    ("Henley Tee", "tops"),
    ("Tapered Trousers", "bottoms"),
    ("Overshirt", "outerwear"),
];

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writer.write_record(["id", "name", "category", "gender", "color", "price", "image_url"])?;

    let mut row_id = 0usize;
    for (gender, items) in [("female", &FEMALE_ITEMS), ("male", &MALE_ITEMS)] {
        for _ in 0..args.per_gender {
            let (item, category) = items.choose(&mut rng).copied().unwrap_or(("Basic Tee", "tops"));
            let color = COLORS.choose(&mut rng).copied().unwrap_or("Black");
            let price = rng.gen_range(19.0..180.0_f64);
            row_id += 1;

            writer.write_record([
                row_id.to_string(),
                format!("{color} {item}"),
                category.to_string(),
                gender.to_string(),
                color.to_string(),
                format!("{price:.2}"),
                format!("https://images.example.com/products/{row_id}.jpg"),
            ])?;
        }
    }
    writer.flush()?;

    println!("Wrote {row_id} products to {}", args.output.display());
    Ok(())
}
