use clap::ValueEnum;
use seqren_core::{ChainResolution, Preview};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    /// Aligned `prev | next` columns
    Plain,
    /// Bordered table
    Table,
    Json,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Plain => Self::Plain,
            PreviewArg::Table => Self::Table,
            PreviewArg::Json => Self::Json,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ChainArg {
    /// One promotion pass (renames blocked two levels deep are skipped)
    Single,
    /// Follow rename chains of any depth
    Full,
}

impl From<ChainArg> for ChainResolution {
    fn from(arg: ChainArg) -> Self {
        match arg {
            ChainArg::Single => Self::Single,
            ChainArg::Full => Self::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for seqren_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
