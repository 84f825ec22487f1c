use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "uuidv4")]
#[command(about = "Generate, format and validate RFC 4122 version 4 UUIDs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate random version 4 UUIDs
    Generate {
        /// How many to generate (defaults to UUIDV4_DEFAULT_COUNT, or 1)
        #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        count: Option<usize>,
    },
    /// Format 16 bytes, given as 32 hex digits, as a canonical UUID string
    Encode {
        /// 32 hex digits
        hex: String,
    },
    /// Decode a canonical UUID string into 32 hex digits
    Decode {
        /// Canonical UUID string
        uuid: String,
    },
    /// Check strings against the version 4 grammar
    Validate {
        /// Strings to check
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}
