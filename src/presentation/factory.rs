//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{
    CheckUseCase, CleanUseCase, CompressOptions, CompressUseCase, HookContext, HookRegistry,
};
use crate::config::Config;
use crate::domain::ports::CompressEventSink;
use crate::error::AssetgzResult;
use crate::infrastructure::{GzipCodec, LocalAssetStore};

/// Type alias for the concrete CompressUseCase with all dependencies
pub type ConcreteCompressUseCase = CompressUseCase<LocalAssetStore, GzipCodec>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<LocalAssetStore, GzipCodec>;

/// Type alias for the concrete CleanUseCase with all dependencies
pub type ConcreteCleanUseCase = CleanUseCase<LocalAssetStore>;

fn asset_store(config: &Config) -> LocalAssetStore {
    LocalAssetStore::new().with_atomic_writes(config.compress.atomic_writes)
}

/// Create a compress use case honoring the configured level and write mode
pub fn create_compress_use_case(config: &Config) -> ConcreteCompressUseCase {
    CompressUseCase::new(asset_store(config), GzipCodec::new(config.compress.level))
}

/// Create a check use case; the codec is only used by `--verify`
pub fn create_check_use_case(config: &Config) -> ConcreteCheckUseCase {
    CheckUseCase::new(asset_store(config), GzipCodec::new(config.compress.level))
}

pub fn create_clean_use_case(config: &Config) -> ConcreteCleanUseCase {
    CleanUseCase::new(asset_store(config))
}

/// Register the compressor as a pre-action for every action in
/// `config.hooks.pre_actions`.
///
/// The callback ignores everything in the context but the project root,
/// against which `config.compress.root` is resolved.
pub fn register_compressor<'a>(
    registry: &mut HookRegistry<'a>,
    config: &'a Config,
    sink: &'a dyn CompressEventSink,
) -> AssetgzResult<()> {
    let options = CompressOptions::new().with_extensions(config.extension_set()?);

    for action in &config.hooks.pre_actions {
        let options = options.clone();
        registry.add_pre_action(action.as_str(), move |ctx: &HookContext| {
            let root = config.asset_root(&ctx.project_root);
            create_compress_use_case(config).execute(&root, &options, sink)?;
            Ok(())
        });
    }

    Ok(())
}
