use anyhow::{Context, Result, bail};
use catalog::Product;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::{
    CatalogQuery, FilterForm, FilterPipeline, SortOrder, category_counts, unique_categories,
};
use rand::Rng;
use rayon::prelude::*;
use server::ServerConfig;
use sources::{DEFAULT_API_URL, FileSource, ProductSource, RemoteSource};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Catalog - browse and serve a product catalog
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Product catalog page with category and price filters", long_about = None)]
struct Cli {
    /// Product REST endpoint [default: https://fakestoreapi.com/products]
    #[arg(long, global = true, env = "CATALOG_API_URL")]
    api_url: Option<String>,

    /// Read products from a local JSON file instead of the API
    #[arg(long, global = true, env = "CATALOG_PRODUCTS_FILE")]
    file: Option<PathBuf>,

    /// Timeout for the upstream request, in seconds
    #[arg(
        long,
        global = true,
        env = "CATALOG_REQUEST_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the catalog web page
    Serve {
        /// Address to listen on (e.g. 0.0.0.0:8080)
        #[arg(long, env = "CATALOG_BIND_ADDR")]
        bind: Option<SocketAddr>,

        /// Configuration file (JSON or TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Currency label printed after prices
        #[arg(long)]
        currency: Option<String>,
    },

    /// Print the products matching the given filters
    List {
        /// Exact category name
        #[arg(long)]
        category: Option<String>,

        /// Minimum price (inclusive)
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<String>,

        /// Sort by price: asc or desc
        #[arg(long)]
        sort: Option<String>,

        /// Show at most this many products
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List categories with their product counts
    Categories,

    /// Run random queries through the pipeline and report latencies
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        queries: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match &cli.command {
        Commands::Serve {
            bind,
            config,
            currency,
        } => handle_serve(&cli, *bind, config.clone(), currency.clone()).await?,
        Commands::List {
            category,
            min_price,
            max_price,
            sort,
            limit,
        } => {
            let form = FilterForm {
                category: category.clone(),
                min_price: min_price.clone(),
                max_price: max_price.clone(),
                sort: sort.clone(),
            };
            handle_list(&cli, form, *limit).await?
        }
        Commands::Categories => handle_categories(&cli).await?,
        Commands::Benchmark { queries } => handle_benchmark(&cli, *queries).await?,
    }

    Ok(())
}

/// Build the product source selected by the global flags
fn product_source(cli: &Cli) -> ProductSource {
    match &cli.file {
        Some(path) => ProductSource::File(FileSource::new(path.clone())),
        None => {
            let url = cli.api_url.clone().unwrap_or_else(|| DEFAULT_API_URL.to_string());
            let timeout = cli
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(sources::DEFAULT_TIMEOUT);
            ProductSource::Remote(RemoteSource::new(url).with_timeout(timeout))
        }
    }
}

/// Fetch products, with a friendly error naming the source
async fn load_products(cli: &Cli) -> Result<Vec<Product>> {
    let source = product_source(cli);
    let start = Instant::now();
    let catalog = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load products from {}", source.describe()))?;
    info!("Loaded {} products from {}", catalog.len(), source.describe());
    println!(
        "{} Loaded {} products from {} in {:?}",
        "✓".green(),
        catalog.len(),
        source.describe(),
        start.elapsed()
    );
    Ok(catalog.into_products())
}

/// Handle the 'serve' command
async fn handle_serve(
    cli: &Cli,
    bind: Option<SocketAddr>,
    config_path: Option<PathBuf>,
    currency: Option<String>,
) -> Result<()> {
    let mut config = ServerConfig::load(config_path.as_deref()).context("Invalid configuration")?;

    // Command-line flags win over file and environment
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }
    if let Some(file) = &cli.file {
        config.products_file = Some(file.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config.request_timeout_secs = secs;
    }
    if let Some(currency) = currency {
        config.currency_label = currency;
    }

    println!(
        "{} Serving catalog on {}",
        "→".cyan(),
        format!("http://{}", config.bind_addr).bold()
    );
    server::run(config).await
}

/// Handle the 'list' command
async fn handle_list(cli: &Cli, form: FilterForm, limit: Option<usize>) -> Result<()> {
    let products = load_products(cli).await?;
    let total = products.len();

    let query = form.into_query();
    let visible = FilterPipeline::standard().apply(products, &query)?;

    println!("{}", describe_query(&query).bold().blue());
    print_products(&visible, limit);
    println!(
        "\n{} of {} products match",
        visible.len().to_string().green(),
        total
    );
    Ok(())
}

/// Handle the 'categories' command
async fn handle_categories(cli: &Cli) -> Result<()> {
    let products = load_products(cli).await?;

    println!("{}", "Categories:".bold().blue());
    for (category, count) in category_counts(&products) {
        println!("  {} {:<24} {:>4} products", "•".green(), category, count);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(cli: &Cli, queries: usize) -> Result<()> {
    if queries == 0 {
        bail!("--queries must be at least 1");
    }

    let products = load_products(cli).await?;
    let categories = unique_categories(&products);
    let max_price = products.iter().map(|p| p.price).fold(0.0_f64, f64::max);

    // Generate the random queries up front so the timed section is pure pipeline work
    let mut rng = rand::rng();
    let random_queries: Vec<CatalogQuery> = (0..queries)
        .map(|_| random_query(&mut rng, &categories, max_price))
        .collect();

    let pipeline = FilterPipeline::standard();
    let start = Instant::now();
    let mut timings: Vec<Duration> = random_queries
        .par_iter()
        .map(|query| -> Result<Duration> {
            let started = Instant::now();
            let visible = pipeline.apply(products.clone(), query)?;
            std::hint::black_box(visible);
            Ok(started.elapsed())
        })
        .collect::<Result<Vec<_>>>()?;
    let wall_time = start.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = percentile(&timings, 0.50);
    let p95 = percentile(&timings, 0.95);
    let p99 = percentile(&timings, 0.99);
    let throughput = queries as f64 / wall_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {} over {} products", queries, products.len());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} queries/second", throughput);

    Ok(())
}

/// A query with each filter independently present or absent
fn random_query(rng: &mut impl Rng, categories: &[String], max_price: f64) -> CatalogQuery {
    let mut query = CatalogQuery::new();

    if !categories.is_empty() && rng.random_bool(0.5) {
        query = query.with_category(categories[rng.random_range(0..categories.len())].clone());
    }
    if rng.random_bool(0.5) {
        query = query.with_min_price(rng.random::<f64>() * max_price / 2.0);
    }
    if rng.random_bool(0.5) {
        query = query.with_max_price(max_price / 2.0 + rng.random::<f64>() * max_price / 2.0);
    }
    match rng.random_range(0..3) {
        0 => query.with_sort(SortOrder::Ascending),
        1 => query.with_sort(SortOrder::Descending),
        _ => query,
    }
}

/// Nearest-rank percentile over sorted timings
fn percentile(sorted: &[Duration], p: f64) -> Duration {
    let rank = ((sorted.len() as f64 * p).ceil() as usize).clamp(1, sorted.len());
    sorted[rank - 1]
}

fn describe_query(query: &CatalogQuery) -> String {
    if query.is_unfiltered() {
        return "All products:".to_string();
    }

    let mut parts = Vec::new();
    if let Some(category) = &query.category {
        parts.push(format!("category = {}", category));
    }
    match (query.min_price, query.max_price) {
        (Some(min), Some(max)) => parts.push(format!("{} ≤ price ≤ {}", min, max)),
        (Some(min), None) => parts.push(format!("price ≥ {}", min)),
        (None, Some(max)) => parts.push(format!("price ≤ {}", max)),
        (None, None) => {}
    }
    match query.sort {
        Some(SortOrder::Ascending) => parts.push("cheapest first".to_string()),
        Some(SortOrder::Descending) => parts.push("most expensive first".to_string()),
        None => {}
    }
    format!("Products ({}):", parts.join(", "))
}

/// Helper function to format and print products
fn print_products(products: &[Product], limit: Option<usize>) {
    let shown = limit.unwrap_or(products.len());
    for (i, product) in products.iter().take(shown).enumerate() {
        println!(
            "{}. {} [{}] - {}",
            (i + 1).to_string().green(),
            product.title,
            product.category.cyan(),
            format!("{:.2}", product.price).bold()
        );
    }
    if products.len() > shown {
        println!("   ... and {} more", products.len() - shown);
    }
}
