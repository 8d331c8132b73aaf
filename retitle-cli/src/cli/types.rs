use clap::ValueEnum;
use retitle_core::Preview;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    List,
    Table,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::List => Self::List,
            PreviewArg::Table => Self::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for retitle_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
