//! Bramble CLI - Storefront shell over the client library.
//!
//! # Usage
//!
//! ```bash
//! # Log in and store the bearer token
//! bramble login -e shopper@example.com -p 'correct horse'
//!
//! # Browse the catalog
//! bramble products list
//!
//! # Cart and wishlist actions
//! bramble cart add 6741f2a9c1 --quantity 2
//! bramble cart show
//! bramble wishlist add 6741f2a9c1
//! bramble wishlist remove 6741f2a9c1
//! ```
//!
//! # Commands
//!
//! - `login` / `signup` / `profile` / `logout` - account management
//! - `products` - catalog browsing and seller product management
//! - `cart` / `wishlist` - per-item membership actions
//!
//! Configuration comes from the environment; see `bramble_client::config`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};

use bramble_client::ClientConfig;
use bramble_core::{ProductDraft, Role, Slot};

mod commands;

use commands::basket::BasketAction;

#[derive(Parser)]
#[command(name = "bramble")]
#[command(author, version, about = "Bramble storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the bearer token
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account
    Signup {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,

        /// Contact phone number
        #[arg(long)]
        phone: String,

        /// Account role (`Buyer` or `Seller`)
        #[arg(long, default_value = "Buyer")]
        role: Role,
    },
    /// Show the logged-in account profile
    Profile,
    /// Forget the stored token
    Logout,
    /// Browse and manage catalog products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the product catalog
    List,
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
    /// Create a product (sellers only)
    Create(ProductArgs),
    /// Update a product (sellers only)
    Update {
        /// Product ID
        id: String,

        #[command(flatten)]
        draft: ProductArgs,
    },
}

/// Product fields for create/update. The image must already be hosted.
#[derive(Args)]
struct ProductArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Short description
    #[arg(long)]
    description: String,

    /// URL of the hosted product image
    #[arg(long)]
    image_url: String,

    /// Category name
    #[arg(long)]
    category: String,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    stock: i64,

    /// Price in minor currency units (cents)
    #[arg(long)]
    price: i64,

    /// Whether the product is purchasable
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    available: bool,
}

impl From<ProductArgs> for ProductDraft {
    fn from(args: ProductArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            image_url: args.image_url,
            category: args.category,
            stock: args.stock,
            price_minor_units: args.price,
            available: args.available,
        }
    }
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,

        /// Purchase quantity
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Show confirmed cart membership
    Show,
    /// Reconcile against the remote store per the configured policy
    Reconcile,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add a product to the wishlist
    Add {
        /// Product ID
        id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product ID
        id: String,
    },
    /// Show confirmed wishlist membership
    Show,
    /// Reconcile against the remote store per the configured policy
    Reconcile,
}

impl From<CartAction> for BasketAction {
    fn from(action: CartAction) -> Self {
        match action {
            CartAction::Add { id, quantity } => Self::Add { id, quantity },
            CartAction::Remove { id } => Self::Remove { id },
            CartAction::Show => Self::Show,
            CartAction::Reconcile => Self::Reconcile,
        }
    }
}

impl From<WishlistAction> for BasketAction {
    fn from(action: WishlistAction) -> Self {
        match action {
            WishlistAction::Add { id } => Self::Add { id, quantity: 1 },
            WishlistAction::Remove { id } => Self::Remove { id },
            WishlistAction::Show => Self::Show,
            WishlistAction::Reconcile => Self::Reconcile,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, &password).await?;
        }
        Commands::Signup {
            email,
            password,
            phone,
            role,
        } => commands::auth::signup(&config, email, password, phone, role).await?,
        Commands::Profile => commands::auth::profile(&config).await?,
        Commands::Logout => commands::auth::logout(&config)?,
        Commands::Products { action } => match action {
            ProductsAction::List => commands::catalog::list(&config).await?,
            ProductsAction::Show { id } => commands::catalog::show(&config, &id).await?,
            ProductsAction::Create(args) => {
                commands::catalog::create(&config, args.into()).await?;
            }
            ProductsAction::Update { id, draft } => {
                commands::catalog::update(&config, &id, draft.into()).await?;
            }
        },
        Commands::Cart { action } => {
            commands::basket::run(&config, Slot::Cart, action.into()).await?;
        }
        Commands::Wishlist { action } => {
            commands::basket::run(&config, Slot::Wishlist, action.into()).await?;
        }
    }

    Ok(())
}
