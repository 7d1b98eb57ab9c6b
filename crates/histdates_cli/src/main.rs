//! CLI probe for the timeline core.
//!
//! # Responsibility
//! - Verify `histdates_core` wiring without a UI shell.
//! - Mount a timeline, select a page and play animations at a fixed frame
//!   rate, printing the resulting frames deterministically.

use clap::Parser;
use histdates_core::{
    default_log_level, init_logging, PageCatalog, TimelineConfig, TimelineService, TimelineView,
    CONFIG_PATH_ENV, PAGES_PATH_ENV,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "histdates")]
#[command(about = "Simulate the historical dates timeline and print its frames")]
#[command(version)]
struct Cli {
    /// Page to select after mounting
    #[arg(short, long, default_value = "3")]
    page: u32,

    /// Simulated frames per second (1-1000)
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=1000))]
    fps: u32,

    /// Viewport width in px (drives the carousel layout)
    #[arg(long, default_value = "1440")]
    viewport_width: u32,

    /// Page catalog JSON file (built-in catalog when omitted)
    #[arg(long, env = PAGES_PATH_ENV)]
    pages: Option<PathBuf>,

    /// Timeline config JSON file (defaults when omitted)
    #[arg(long, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Print every intermediate frame, not just the final one
    #[arg(short, long)]
    frames: bool,

    /// Absolute directory for rolling log files (logging off when omitted)
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level used with --log-dir
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("histdates: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    println!(
        "histdates_core ping={} version={}",
        histdates_core::ping(),
        histdates_core::core_version()
    );

    let catalog = match cli.pages.as_ref() {
        Some(path) => PageCatalog::load(path),
        None => PageCatalog::builtin(),
    }
    .map_err(|err| err.to_string())?;
    let config = match cli.config.as_ref() {
        Some(path) => TimelineConfig::load(path),
        None => Ok(TimelineConfig::default()),
    }
    .map_err(|err| err.to_string())?;

    let mut service =
        TimelineService::new(catalog, config, cli.viewport_width).map_err(|err| err.to_string())?;
    let frame = Duration::from_secs(1) / cli.fps;

    let mut frame_no = 0_u32;
    while service.tick(frame) {
        frame_no += 1;
    }
    println!("mounted frames={frame_no}");
    print_view(&service.view());

    match service.select(cli.page) {
        Some(change) => println!("select from={} to={}", change.from, change.to),
        None => println!("select page={} ignored", cli.page),
    }

    frame_no = 0;
    loop {
        let animating = service.tick(frame);
        frame_no += 1;
        if cli.frames {
            print_frame_line(frame_no, &service.view());
        }
        if !animating {
            break;
        }
    }
    println!("settled frames={frame_no}");
    print_view(&service.view());
    Ok(())
}

fn print_frame_line(frame_no: u32, view: &TimelineView) {
    let positions = view
        .points
        .iter()
        .map(|point| format!("{}:({:.1},{:.1})", point.id, point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "frame={frame_no} years={}-{} opacity={:.2} {positions}",
        view.year_from, view.year_to, view.articles_opacity
    );
}

fn print_view(view: &TimelineView) {
    println!("title={}", view.title);
    println!(
        "page={} years={}-{} prev={} next={}",
        view.pagination_label, view.year_from, view.year_to, view.prev_enabled, view.next_enabled
    );
    for point in &view.points {
        println!(
            "  point={} active={} x={:.2} y={:.2} translate=({:.2},{:.2}) size={:.1}",
            point.id,
            point.active,
            point.x,
            point.y,
            point.translate_x,
            point.translate_y,
            point.visual.size
        );
    }
    println!(
        "  carousel slides_per_view={} index={} show_prev={} show_next={}",
        view.carousel.slides_per_view,
        view.carousel.index,
        view.carousel.show_prev,
        view.carousel.show_next
    );
    for article in &view.carousel.articles {
        println!("    [{}] {}", article.year, article.text);
    }
}
