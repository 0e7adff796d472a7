use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, enable_monitoring: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    pub fn run(&mut self) -> Result<String> {
        tracing::info!("🚀 Starting ETL process");
        self.monitor.log_stats("startup");

        // Extract
        tracing::info!("📥 Extracting data...");
        let table = self.pipeline.extract()?;
        tracing::info!(
            "📥 Extracted {} rows from sheet '{}'",
            table.rows.len(),
            table.sheet_name
        );
        self.monitor.log_stats("extract");

        // Transform
        tracing::info!("🔧 Transforming data...");
        let output = self.pipeline.transform(table)?;
        self.monitor.log_stats("transform");

        // Load
        tracing::info!("💾 Loading data...");
        let output_path = self.pipeline.load(output)?;
        tracing::info!("💾 Output saved to: {}", output_path);
        self.monitor.log_stats("load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
