use alloy::{
    network::EthereumWallet,
    node_bindings::Anvil,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder},
};
use clap::{Parser, Subcommand};
use eyre::{eyre, WrapErr};
use nftmarket_constants::KnownNetworks;
use nftmarket_deploy::{
    export_contract_artifacts, first_account, load_artifact, DeploymentLayout, ExportRequest,
    NftMarketplaceModule, DEFAULT_ARTIFACT_PATH, DEFAULT_DEPLOYMENTS_DIR,
};
use nftmarket_types::{ContractArtifact, EnvConfig, NetworkConfig};
use serde_json::Value;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Deploy the NFT marketplace and export its deployment.
#[derive(Debug, Parser)]
#[command(name = "nftmarket", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deploy the marketplace and record the deployment.
    Deploy {
        /// Network to deploy to.
        #[arg(long, default_value_t = KnownNetworks::Hardhat)]
        network: KnownNetworks,
        /// Compiled marketplace artifact.
        #[arg(long, default_value = DEFAULT_ARTIFACT_PATH)]
        artifact: PathBuf,
        /// Root of the per-chain deployment directories.
        #[arg(long, default_value = DEFAULT_DEPLOYMENTS_DIR)]
        deployments: PathBuf,
        /// Wei attached to the deployment. Defaults to 1 gwei.
        #[arg(long)]
        value: Option<String>,
    },
    /// Export a chain's deployment as JavaScript modules.
    Export {
        /// Chain ID of the deployment.
        #[arg(long)]
        chain_id: Option<String>,
        /// Directory of the consuming project.
        #[arg(long)]
        dir: Option<PathBuf>,
        /// Root of the per-chain deployment directories.
        #[arg(long, default_value = DEFAULT_DEPLOYMENTS_DIR)]
        deployments: PathBuf,
    },
    /// Print the resolved network configuration.
    Config,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let env = EnvConfig::from_env();

    match cli.command {
        Command::Deploy { network, artifact, deployments, value } => {
            let mut module = NftMarketplaceModule::mainnet();
            if let Some(value) = value {
                let value =
                    value.parse::<U256>().map_err(|err| eyre!("invalid --value {value}: {err}"))?;
                module = module.with_value(value);
            }
            let layout = DeploymentLayout::new(deployments);
            deploy(&env.network(network), &module, &layout, artifact).await
        }
        Command::Export { chain_id, dir, deployments } => {
            export(&DeploymentLayout::new(deployments), &ExportRequest { chain_id, dir });
            Ok(())
        }
        Command::Config => {
            print_config(&env);
            Ok(())
        }
    }
}

async fn deploy(
    network: &NetworkConfig,
    module: &NftMarketplaceModule,
    layout: &DeploymentLayout,
    artifact_path: PathBuf,
) -> eyre::Result<()> {
    let (raw, artifact) = load_artifact(&artifact_path)?;
    info!(network = %network.network(), artifact = %artifact_path.display(), "deploying");

    match network.network() {
        KnownNetworks::Hardhat => {
            let fork_url = network
                .fork_url()?
                .ok_or_else(|| eyre!("{} has no fork source", network.network()))?;
            let anvil = Anvil::new()
                .fork(fork_url)
                .chain_id(network.chain_id())
                .try_spawn()
                .wrap_err("failed to spawn anvil")?;
            let provider = ProviderBuilder::new().connect_http(anvil.endpoint_url());
            let deployer = first_account(&provider).await?;
            deploy_with(&provider, deployer, module, layout, &raw, &artifact).await
        }
        KnownNetworks::Localhost => {
            let provider = ProviderBuilder::new().connect(network.rpc_url()).await?;
            let deployer = first_account(&provider).await?;
            deploy_with(&provider, deployer, module, layout, &raw, &artifact).await
        }
        KnownNetworks::Sepolia => {
            let signer =
                network.signer()?.ok_or_else(|| eyre!("no signer for {}", network.network()))?;
            let deployer = signer.address();
            let provider = ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect(network.checked_rpc_url()?)
                .await?;
            deploy_with(&provider, deployer, module, layout, &raw, &artifact).await
        }
    }
}

async fn deploy_with<P: Provider>(
    provider: &P,
    deployer: Address,
    module: &NftMarketplaceModule,
    layout: &DeploymentLayout,
    raw: &Value,
    artifact: &ContractArtifact,
) -> eyre::Result<()> {
    let chain_id = provider.get_chain_id().await?;
    let deployment = module.deploy(provider, deployer, artifact).await?;
    deployment.persist(layout, chain_id, raw)?;
    info!(
        chain_id,
        address = %deployment.address,
        record = %layout.addresses_path(chain_id).display(),
        "recorded deployment"
    );
    Ok(())
}

fn export(layout: &DeploymentLayout, request: &ExportRequest) {
    match export_contract_artifacts(layout, request) {
        Ok(exported) => info!(
            addresses = %exported.addresses_path.display(),
            artifacts = %exported.artifacts_path.display(),
            "export complete"
        ),
        Err(err) if err.is_missing_input() => warn!(%err, "nothing exported"),
        Err(err) => error!(%err, "export failed"),
    }
}

fn print_config(env: &EnvConfig) {
    for network in KnownNetworks::ALL {
        let config = env.network(network);
        println!("{network}: chain {} at {}", config.chain_id(), config.rpc_url());
        println!("  accounts: {:?}", config.accounts());
        // Fork URLs usually embed an API key.
        match config.fork_url() {
            Ok(Some(_)) => println!("  fork: <redacted>"),
            Err(err) => println!("  fork: {err}"),
            Ok(None) => {}
        }
    }
    let unset = env.unset_variables();
    if !unset.is_empty() {
        println!("unset: {}", unset.join(", "));
    }
}
