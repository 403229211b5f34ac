//! Storefront CLI
//!
//! Mounts the products page against a live backend for one identity and
//! prints what the page would show.

mod render;

use anyhow::Context;
use clap::Parser;
use shared::UserProfile;
use storefront_client::logger::init_logger;
use storefront_client::{ClientConfig, ProductsPage};
use tokio::sync::watch;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Print the storefront product listing")]
struct Args {
    /// Backend base URL
    #[arg(long, env = "STOREFRONT_BASE_URL")]
    base_url: Option<String>,

    /// Dietary preference of the signed-in user (veg, vegan)
    #[arg(long)]
    preference: Option<String>,

    /// Browse as a signed-in user without a preference
    #[arg(long)]
    signed_in: bool,

    /// Items already in the cart
    #[arg(long, default_value_t = 0)]
    cart_items: usize,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl Args {
    fn user(&self) -> Option<UserProfile> {
        match &self.preference {
            Some(preference) => Some(UserProfile::with_preference(preference.clone())),
            None if self.signed_in => Some(UserProfile::default()),
            None => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let mut config = ClientConfig::from_env().context("failed to load configuration")?;
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }

    let _log_guard = init_logger(config.log_level.as_deref(), config.log_dir.as_deref());
    tracing::info!(base_url = %config.base_url, "storefront starting");

    let source = config
        .build_product_source()
        .context("failed to build HTTP client")?;
    let (_identity, identity_rx) = watch::channel(args.user());
    let (_cart, cart_rx) = watch::channel(args.cart_items);

    let mut page = ProductsPage::mount(source, identity_rx, cart_rx);
    page.settled().await.context("view closed before products loaded")?;

    let cart_open = page.snapshot().cart_panel_open;
    print!("{}", render::render(&page.listing(), cart_open));
    page.unmount();
    Ok(())
}
