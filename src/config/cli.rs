use crate::adapters::linguist::DEFAULT_COLORS_URL;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "awesome-catalog")]
#[command(about = "Builds the static catalog artifact from project descriptors")]
pub struct CliConfig {
    #[arg(long, default_value = "data/awesome")]
    pub data_dir: String,

    #[arg(long, default_value = "./output/catalog.json")]
    pub output_path: String,

    #[arg(long, default_value = DEFAULT_COLORS_URL)]
    pub colors_url: String,

    #[arg(
        long,
        help = "Fail the build on a malformed descriptor instead of skipping it"
    )]
    pub strict: bool,

    #[arg(long, help = "Preview a filtered view, e.g. \"apis=gmail&languages=go\"")]
    pub query: Option<String>,

    #[arg(long, default_value = "12", help = "Page size for the query preview")]
    pub limit: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn colors_url(&self) -> &str {
        &self.colors_url
    }

    fn strict(&self) -> bool {
        self.strict
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("output_path", &self.output_path)?;
        validate_url("colors_url", &self.colors_url)?;
        Ok(())
    }
}
