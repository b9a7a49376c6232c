use clap::Parser;
use geojson::GeoJson;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use venn_overlap::export::layout_feature_collection;
use venn_overlap::{DiseaseTest, Region, SeparationSolver, VennConfig, VennLayout};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Size of the screened population
    #[arg(short, long, default_value_t = 100_000.0)]
    population: f64,

    /// Percent of the population with the disease
    #[arg(short = 'd', long, default_value_t = 1.0)]
    pct_diseased: f64,

    /// Percent of tests that are correct
    #[arg(short, long, default_value_t = 90.0)]
    accuracy: f64,

    /// Radius of the tested-positive circle
    #[arg(long, default_value_t = 250.0)]
    radius: f64,

    /// Absolute area tolerance for the separation search
    #[arg(long, default_value_t = 0.05)]
    tolerance: f64,

    /// Write the region polygons to this GeoJSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let test = DiseaseTest::from_percentages(args.population, args.pct_diseased, args.accuracy)?;
    let breakdown = test.breakdown();

    println!("Population:            {}", breakdown.total);
    println!("Diseased:              {:.2}", breakdown.diseased);
    println!("Tested positive:       {:.2}", breakdown.test_positive());
    println!("  of which diseased:   {:.2}", breakdown.test_positive_diseased);
    println!("  of which healthy:    {:.2}", breakdown.test_positive_healthy);
    println!("Missed (false neg.):   {:.2}", breakdown.test_negative_diseased);
    println!(
        "P(diseased | positive) = {:.4}",
        breakdown.probability_diseased_given_positive()
    );

    let config = VennConfig::new()
        .with_positive_radius(args.radius)
        .with_solver(SeparationSolver::new().with_tolerance(args.tolerance));
    let layout = VennLayout::compute(&breakdown, &config)?;

    println!();
    println!("Positive circle radius:   {:.3}", layout.positive.radius);
    println!("Diseased circle radius:   {:.3}", layout.diseased.radius);
    println!("Population circle radius: {:.3}", layout.population_radius);
    println!("Overlap area:             {:.3}", layout.overlap);
    println!("Center separation:        {:.3}", layout.separation);

    for region in Region::ALL {
        println!("{}: {}", region.id(), layout.outline(region)?.path_data());
    }

    if let Some(path) = args.output {
        let fc = layout_feature_collection(&layout, &breakdown)?;
        let writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, &GeoJson::FeatureCollection(fc))?;
        println!("Wrote regions to {:?}", path);
    }

    Ok(())
}
