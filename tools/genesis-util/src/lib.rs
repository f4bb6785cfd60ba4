//! Genesis Util: init patch generator
//!
//! Builds the genesis patch that adds `init0..initN` accounts, block
//! producers and council entries, all keyed from one operator secret.
//!
//! ```text
//! generate-init-patch -s SECRET [-n 11] [-p] [-o OUT] [--key-tool PATH [--key-tool-arg ARG]..]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use genesis_patch::{
    AssemblerConfig, DevKeyDeriver, GenesisPatchApi, KeyDeriver, OutputTarget, PatchAssembler,
    SubprocessKeyDeriver, DEFAULT_VALIDATOR_COUNT,
};
use shared_crypto::DEFAULT_KEY_PREFIX;

/// Generate a patch file that adds init accounts
#[derive(Parser, Debug)]
#[command(name = "generate-init-patch")]
#[command(about = "Generate a patch file that adds init accounts")]
pub struct Args {
    /// Output filename (`-` for stdout)
    #[arg(short, long, value_name = "OUT", default_value = "-")]
    pub output: OutputTarget,

    /// Number of init validators
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_VALIDATOR_COUNT)]
    pub num: u32,

    /// Pretty print output
    #[arg(short, long)]
    pub pretty: bool,

    /// Private key generation secret
    #[arg(short, long, value_name = "SECRET", env = "GENESIS_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// External get_dev_key-compatible program to derive keys with
    /// (default: built-in derivation)
    #[arg(long, value_name = "PATH")]
    pub key_tool: Option<PathBuf>,

    /// Argument passed to the key tool before the secret and label
    /// (repeatable, e.g. `--key-tool python3 --key-tool-arg get_dev_key.py`)
    #[arg(long, value_name = "ARG", requires = "key_tool", allow_hyphen_values = true)]
    pub key_tool_arg: Vec<String>,

    /// Public key prefix for built-in derivation
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_KEY_PREFIX, conflicts_with = "key_tool")]
    pub key_prefix: String,

    /// Validator slots derived concurrently
    #[arg(short, long, value_name = "K", default_value_t = 1)]
    pub jobs: usize,

    /// Log filter (overrides GENESIS_LOG_LEVEL / RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

/// Pick the key deriver selected on the command line.
pub fn build_deriver(args: &Args) -> Arc<dyn KeyDeriver> {
    match &args.key_tool {
        Some(program) => {
            info!(program = %program.display(), "Deriving keys with external key tool");
            Arc::new(SubprocessKeyDeriver::new(program).with_args(&args.key_tool_arg))
        }
        None => Arc::new(DevKeyDeriver::with_prefix(&args.key_prefix)),
    }
}

/// Generate the patch and write it to the selected output.
///
/// Nothing is written unless the whole document was assembled.
pub async fn run(args: Args) -> Result<()> {
    let assembler = PatchAssembler::with_config(
        build_deriver(&args),
        AssemblerConfig::default().with_max_concurrent_slots(args.jobs),
    );

    let text = assembler
        .render(args.secret, args.num, args.pretty)
        .await
        .context("Failed to generate init patch")?;

    args.output.write(&text)?;
    Ok(())
}
