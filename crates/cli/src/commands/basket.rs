//! Cart and wishlist commands.
//!
//! Both slots share one action shape; `main` maps the slot-specific clap
//! subcommands onto it.

use bramble_client::remote::HttpMutationClient;
use bramble_client::{ClientConfig, MutationOutcome, SlotStore, Synchronizer};
use bramble_core::{ProductId, Quantity, Slot};

use super::auth;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Slot-independent membership action.
pub enum BasketAction {
    /// Add a product. Quantity is meaningful for the cart only.
    Add { id: String, quantity: u32 },
    /// Remove a product.
    Remove { id: String },
    /// Print confirmed membership.
    Show,
    /// Reconcile against the remote store per the configured policy.
    Reconcile,
}

/// Build a synchronizer for the stored session.
pub fn build_synchronizer(
    config: &ClientConfig,
) -> Result<Synchronizer<HttpMutationClient>, Box<dyn std::error::Error>> {
    let session = auth::load_session(config);
    let store = SlotStore::open(&config.state_dir)?;
    let remote = HttpMutationClient::new(&config.user_service_url);
    Ok(Synchronizer::new(
        session,
        store,
        remote,
        config.reconcile_policy,
    ))
}

/// Run one membership action against `slot`.
#[allow(clippy::print_stdout)]
pub async fn run(config: &ClientConfig, slot: Slot, action: BasketAction) -> CommandResult {
    let sync = build_synchronizer(config)?;

    match action {
        BasketAction::Add { id, quantity } => {
            let id = ProductId::new(id);
            match sync.request_add(slot, &id, Quantity::new(quantity)).await? {
                MutationOutcome::Applied => println!("Added {id} to {slot}"),
                MutationOutcome::AlreadyPending => {
                    println!("{id} already has a {slot} update in flight");
                }
            }
        }
        BasketAction::Remove { id } => {
            let id = ProductId::new(id);
            match sync.request_remove(slot, &id).await? {
                MutationOutcome::Applied => println!("Removed {id} from {slot}"),
                MutationOutcome::AlreadyPending => {
                    println!("{id} already has a {slot} update in flight");
                }
            }
        }
        BasketAction::Show => {
            let mut members: Vec<ProductId> = sync.members(slot).into_iter().collect();
            members.sort();
            if members.is_empty() {
                println!("({slot} is empty)");
            }
            for id in members {
                println!("{id}");
            }
        }
        BasketAction::Reconcile => {
            sync.reconcile(slot).await?;
            println!(
                "Reconciled {slot} ({:?} policy)",
                config.reconcile_policy
            );
        }
    }

    Ok(())
}
