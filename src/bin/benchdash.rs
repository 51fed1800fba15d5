use std::{env, process};

use benchdash::{
    ChartRenderer, DashboardConfig, DashboardError, NullChartRenderer, ResultsStore, charts,
    report,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", DashboardConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match DashboardConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    match run(&config) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(config: &DashboardConfig) -> Result<i32, DashboardError> {
    println!("Benchmark Performance Dashboard");
    println!("===============================");
    println!("Parsing benchmark results...");
    let store = ResultsStore::load(&config.results_dir);
    if store.is_empty() {
        eprintln!(
            "warning: no valid benchmark results found in '{}'",
            config.results_dir.display()
        );
    } else {
        println!("Found {} benchmark runs", store.len());
    }

    let renderer: Box<dyn ChartRenderer> = if config.charts {
        charts::default_renderer()
    } else {
        Box::new(NullChartRenderer)
    };
    if !store.is_empty() {
        charts::generate_charts(&store, &config.output_dir, renderer.as_ref());
    }

    println!("Generating HTML dashboard...");
    let dashboard = report::render_dashboard(&store, config)?;
    if let Err(err) = report::export_summary(&store, config) {
        eprintln!("warning: failed to write summary JSON: {err}");
    }

    // An empty store still yields a valid placeholder dashboard, but the
    // exit status tells the operator nothing usable was found.
    if store.is_empty() || !dashboard.exists() {
        return Ok(1);
    }
    println!("Dashboard generated successfully: {}", dashboard.display());
    Ok(0)
}
