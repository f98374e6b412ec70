use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use products_api::PriceAnalysis;
use tracker::api::{HttpProductApi, ProductApi};
use tracker::cli::{Cli, Commands, FormPrompt};
use tracker::config::Config;
use tracker::domain::ProductForm;
use tracker::errors::{TrackerError, TrackerResult};
use tracker::services::{InsightService, ProductCreator, SubmitOutcome};
use tracker::view::{TerminalView, View};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> TrackerResult<()> {
    let cli = Cli::parse();

    // Load configuration, command line wins over the environment
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url)?;
    }
    if cli.animate {
        config.animate = true;
    }

    let api = HttpProductApi::new(&config)?;
    let mut view = TerminalView::stdio(&config);

    match cli.command {
        Commands::List => cmd_list(&api, &mut view),
        Commands::Add { name, url, price } => {
            cmd_add(&api, &mut view, ProductForm::new(name, url, price))
        }
        Commands::Interactive => cmd_interactive(&api, &mut view),
        Commands::Show { id } => cmd_show(&api, &config, id),
        Commands::Analyze { id } => cmd_analyze(&api, &config, id),
        Commands::Predict { url } => cmd_predict(&api, &config, &url),
    }
}

fn cmd_list<A: ProductApi, V: View>(api: &A, view: &mut V) -> TrackerResult<()> {
    ProductCreator::new(api).loader().load(view);
    Ok(())
}

fn cmd_add<A: ProductApi, V: View>(api: &A, view: &mut V, mut form: ProductForm) -> TrackerResult<()> {
    let mut creator = ProductCreator::new(api);

    match creator.submit(&mut form, view) {
        SubmitOutcome::Created { product, .. } => {
            match product.and_then(|p| p.id.map(|id| (id, p.name))) {
                Some((id, name)) => println!("Product added: {} (id {})", name, id),
                None => println!("Product added."),
            }
            Ok(())
        }
        SubmitOutcome::Rejected | SubmitOutcome::Failed => Err(TrackerError::NotAdded),
    }
}

fn cmd_interactive<A: ProductApi, V: View>(api: &A, view: &mut V) -> TrackerResult<()> {
    let mut creator = ProductCreator::new(api);
    creator.loader().load(view);

    let stdin = io::stdin();
    let mut prompt = FormPrompt::new(stdin.lock(), io::stdout());
    let mut form = ProductForm::default();

    loop {
        println!("\nAdd a product (enter 'q' to quit):");
        if !prompt.fill(&mut form)? {
            break;
        }

        if let SubmitOutcome::Failed = creator.submit(&mut form, view) {
            println!("Your input was kept, press Enter on each field to resubmit.");
        }
    }

    Ok(())
}

fn cmd_show<A: ProductApi>(api: &A, config: &Config, id: i64) -> TrackerResult<()> {
    let product = InsightService::new(api).product(id)?;
    let price = |p: f64| format!("{}{}", config.currency, p);

    println!("{}", product.name);
    if let Some(id) = product.id {
        println!("  ID: {}", id);
    }
    println!("  URL: {}", product.url);
    println!("  Current Price: {}", price(product.current_price));
    if let Some(previous) = product.previous_price {
        println!("  Previous Price: {}", price(previous));
    }
    if let Some(lowest) = product.lowest_price {
        println!("  Lowest Price: {}", price(lowest));
    }
    if let Some(highest) = product.highest_price {
        println!("  Highest Price: {}", price(highest));
    }
    if let Some(updated) = product.last_updated {
        println!("  Last Updated: {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn cmd_analyze<A: ProductApi>(api: &A, config: &Config, id: i64) -> TrackerResult<()> {
    match InsightService::new(api).analysis(id)? {
        PriceAnalysis::Pending { message } => println!("{}", message),
        PriceAnalysis::Report(report) => {
            println!("{} (deal score {})", report.name, report.deal_score);
            println!("  Current Price: {}{}", config.currency, report.current_price);
            if let (Some(low), Some(high)) = (report.lowest_price, report.highest_price) {
                println!("  Range: {0}{1} - {0}{2}", config.currency, low, high);
            }
            for remark in &report.remarks {
                println!("  - {}", remark);
            }
            if report.is_price_alert() {
                println!("\nPrice alert: this looks like a great deal!");
            }
        }
    }

    Ok(())
}

fn cmd_predict<A: ProductApi>(api: &A, config: &Config, url: &str) -> TrackerResult<()> {
    let prediction = InsightService::new(api).predict(url)?;

    println!("Current Price: {}{:.2}", config.currency, prediction.current_price);
    println!(
        "Drop Probability: {:.1}%",
        prediction.predicted_drop_probability
    );
    println!("{}", prediction.prediction_comment);

    Ok(())
}
