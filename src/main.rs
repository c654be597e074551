use box_blur::cli::Args;
use box_blur::error::Result;
use box_blur::partition::WorkPartition;
use box_blur::{io, render};
use clap::Parser;
use env_logger::Env;
use log::info;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("=== Box Blur ===");

    // Validate arguments before touching the filesystem
    let radius = args.radius_px()?;
    let requested_span = args.span_px()?;

    // Set thread pool size if specified
    if let Some(n_threads) = args.thread_count()? {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build_global()?;
        info!("Using {} threads", n_threads);
    } else {
        info!("Using all available threads ({})", rayon::current_num_threads());
    }

    // Read input image
    info!("Reading input image: {}", args.input);
    let source = io::read_image(&args.input)?;
    info!("Image size: {}x{}", source.width(), source.height());

    let span = requested_span.unwrap_or_else(|| WorkPartition::default_span(source.width()));

    info!(
        "Blurring with radius {} px ({:?} edges, {} pixels per task)",
        radius, args.edge_policy, span
    );
    info!("Processing...");
    let blurred = render::render_with(&source, radius, args.edge_policy, span)?;

    // Write output
    info!("Writing output: {}", args.output);
    io::write_image(&blurred, &args.output)?;

    println!("New image written to: {}", args.output);
    info!("=== Done! ===");
    Ok(())
}
