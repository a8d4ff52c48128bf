//! The contract gateway: one operation per contract method.
//!
//! # Responsibilities
//! - Hold the contract handle over the wallet-filled provider
//! - Read-only calls (all listings, listing index)
//! - Mutation pipeline: gas ceiling check → estimate → pad → submit →
//!   await inclusion → return the transaction hash
//!
//! The gateway is a stateless pass-through: it never caches contract
//! state, and every read reflects the remote ledger at call time. Any
//! failure at any stage aborts the operation; there is no retry and no
//! partial state.

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::DynProvider;
use tokio::time::timeout;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::marketplace::abi::AntiqueMarketplace;
use crate::marketplace::types::{AddReviewRequest, CreateListingRequest, Listing};
use crate::observability::metrics;

/// Gateway over the AntiqueMarketplace contract.
#[derive(Clone)]
pub struct MarketplaceGateway {
    contract: AntiqueMarketplace::AntiqueMarketplaceInstance<DynProvider>,
    client: BlockchainClient,
    /// The single signing identity shared by all mutations.
    from: Address,
}

impl MarketplaceGateway {
    /// Bind the gateway to a deployed contract.
    pub fn new(
        client: BlockchainClient,
        from: Address,
        contract_address: &str,
    ) -> BlockchainResult<Self> {
        let address: Address = contract_address.parse().map_err(|e| {
            BlockchainError::InvalidInput(format!(
                "Invalid contract address '{}': {}",
                contract_address, e
            ))
        })?;

        let contract = AntiqueMarketplace::new(address, client.provider().clone());

        tracing::info!(
            contract = %address,
            from = %from,
            "Marketplace gateway initialized"
        );

        Ok(Self {
            contract,
            client,
            from,
        })
    }

    /// The contract address this gateway is bound to.
    pub fn contract_address(&self) -> Address {
        *self.contract.address()
    }

    /// Fetch every listing, including soft-deleted ones.
    pub async fn list_all(&self) -> BlockchainResult<Vec<Listing>> {
        let start = std::time::Instant::now();
        let result = timeout(self.client.rpc_timeout(), self.contract.getAllAntiques().call())
            .await
            .map_err(|_| BlockchainError::Timeout(self.client.config().rpc_timeout_secs))?
            .map_err(|e| BlockchainError::Contract(format!("getAllAntiques failed: {}", e)));

        metrics::record_contract_call("getAllAntiques", result.is_ok(), start);
        let antiques = result?;
        Ok(antiques.into_iter().map(Listing::from).collect())
    }

    /// Read the current listing-index value.
    pub async fn index(&self) -> BlockchainResult<U256> {
        let start = std::time::Instant::now();
        let result = timeout(self.client.rpc_timeout(), self.contract.antiqueIndex().call())
            .await
            .map_err(|_| BlockchainError::Timeout(self.client.config().rpc_timeout_secs))?
            .map_err(|e| BlockchainError::Contract(format!("antiqueIndex failed: {}", e)));

        metrics::record_contract_call("antiqueIndex", result.is_ok(), start);
        result
    }

    /// List a new antique for sale. Returns the transaction hash.
    pub async fn create_listing(&self, req: CreateListingRequest) -> BlockchainResult<TxHash> {
        let owner: Address = req.owner.parse().map_err(|e| {
            BlockchainError::InvalidInput(format!("Invalid owner address '{}': {}", req.owner, e))
        })?;

        let start = std::time::Instant::now();
        self.ensure_gas_price().await?;

        let call = self
            .contract
            .listAntique(
                owner,
                req.price,
                req.item_title,
                req.category,
                req.description,
                req.year_of_origin,
                req.condition,
                req.origin,
                req.is_authenticated,
            )
            .from(self.from);

        let gas = call.estimate_gas().await.map_err(|e| {
            metrics::record_contract_call("listAntique", false, start);
            BlockchainError::Contract(format!("listAntique estimation failed: {}", e))
        })?;

        let result = self.broadcast("listAntique", call.gas(self.pad_gas(gas))).await;
        metrics::record_contract_call("listAntique", result.is_ok(), start);

        if let Ok(tx_hash) = &result {
            tracing::info!(tx_hash = %tx_hash, owner = %owner, "Antique listed for sale");
        }
        result
    }

    /// Buy a listed antique. Ownership transfer and payment logic are
    /// entirely inside the contract.
    pub async fn buy(&self, item_id: U256) -> BlockchainResult<TxHash> {
        let start = std::time::Instant::now();
        self.ensure_gas_price().await?;

        let call = self.contract.buyAntique(item_id).from(self.from);
        let gas = call.estimate_gas().await.map_err(|e| {
            metrics::record_contract_call("buyAntique", false, start);
            BlockchainError::Contract(format!("buyAntique estimation failed: {}", e))
        })?;

        let result = self.broadcast("buyAntique", call.gas(self.pad_gas(gas))).await;
        metrics::record_contract_call("buyAntique", result.is_ok(), start);

        if let Ok(tx_hash) = &result {
            tracing::info!(tx_hash = %tx_hash, item_id = %item_id, "Antique purchased");
        }
        result
    }

    /// Soft-delete a listing. Authorization is enforced contract-side only.
    pub async fn delete(&self, item_id: U256) -> BlockchainResult<TxHash> {
        let start = std::time::Instant::now();
        self.ensure_gas_price().await?;

        let call = self.contract.deleteAntique(item_id).from(self.from);
        let gas = call.estimate_gas().await.map_err(|e| {
            metrics::record_contract_call("deleteAntique", false, start);
            BlockchainError::Contract(format!("deleteAntique estimation failed: {}", e))
        })?;

        let result = self.broadcast("deleteAntique", call.gas(self.pad_gas(gas))).await;
        metrics::record_contract_call("deleteAntique", result.is_ok(), start);

        if let Ok(tx_hash) = &result {
            tracing::info!(tx_hash = %tx_hash, item_id = %item_id, "Antique deleted");
        }
        result
    }

    /// Attach a review to a listing.
    pub async fn add_review(&self, item_id: U256, req: AddReviewRequest) -> BlockchainResult<TxHash> {
        let start = std::time::Instant::now();
        self.ensure_gas_price().await?;

        let call = self
            .contract
            .addReview(item_id, req.rating, req.comment)
            .from(self.from);
        let gas = call.estimate_gas().await.map_err(|e| {
            metrics::record_contract_call("addReview", false, start);
            BlockchainError::Contract(format!("addReview estimation failed: {}", e))
        })?;

        let result = self.broadcast("addReview", call.gas(self.pad_gas(gas))).await;
        metrics::record_contract_call("addReview", result.is_ok(), start);

        if let Ok(tx_hash) = &result {
            tracing::info!(tx_hash = %tx_hash, item_id = %item_id, "Review added");
        }
        result
    }

    /// Send a prepared call and wait for on-chain inclusion.
    async fn broadcast<D>(
        &self,
        method: &'static str,
        call: alloy::contract::CallBuilder<&DynProvider, D>,
    ) -> BlockchainResult<TxHash>
    where
        D: alloy::contract::CallDecoder + Send + Sync,
    {
        let pending = call
            .send()
            .await
            .map_err(|e| BlockchainError::Contract(format!("{} submission failed: {}", method, e)))?;

        pending
            .watch()
            .await
            .map_err(|e| BlockchainError::Contract(format!("{} confirmation failed: {}", method, e)))
    }

    /// Refuse to submit while the network gas price is above the ceiling.
    async fn ensure_gas_price(&self) -> BlockchainResult<()> {
        let gas_price = self.client.get_gas_price().await?;
        let max_gwei = self.client.config().max_gas_price_gwei;
        if gas_price_exceeds(gas_price, max_gwei) {
            return Err(BlockchainError::GasPriceTooHigh {
                current_gwei: u64::try_from(gas_price / 1_000_000_000).unwrap_or(u64::MAX),
                max_gwei,
            });
        }
        Ok(())
    }

    /// Pad a gas estimate by the configured safety margin.
    fn pad_gas(&self, estimate: u64) -> u64 {
        (estimate as f64 * self.client.config().gas_limit_multiplier) as u64
    }
}

/// Compare the network price against the ceiling in wei, so fractional-gwei
/// excesses are not lost to integer division.
fn gas_price_exceeds(gas_price_wei: u128, max_gwei: u64) -> bool {
    gas_price_wei > max_gwei as u128 * 1_000_000_000
}

impl std::fmt::Debug for MarketplaceGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketplaceGateway")
            .field("contract", self.contract.address())
            .field("from", &self.from)
            .finish()
    }
}
