use clap::Subcommand;

/// Analytics model commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModelCommands {
    /// List models.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Train a new model.
    Train {
        #[arg(long)]
        name: String,
        /// predictive, classification, clustering, regression, time-series, anomaly-detection
        #[arg(long = "type", default_value = "predictive")]
        model_type: String,
    },
}
