use broker_etl::utils::logger;
use broker_etl::utils::validation::Validate;
use broker_etl::{EtlEngine, InspectConfig, InspectPipeline, LocalStorage};
use clap::Parser;

fn main() {
    let config = InspectConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting inspect-data CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 檢視工具永遠以成功收場，任何錯誤只印出訊息
    if let Err(e) = run(config) {
        tracing::error!("❌ Inspection failed: {}", e);
        println!("Error: {}", e);
    }
}

fn run(config: InspectConfig) -> broker_etl::Result<String> {
    config.validate()?;

    let out_file = config.out_file.clone();
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = InspectPipeline::new(storage, config);
    let mut engine = EtlEngine::new(pipeline);

    let output_path = engine.run()?;
    println!("Successfully wrote {}", out_file);
    Ok(output_path)
}
