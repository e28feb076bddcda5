use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hexgroup",
    version,
    about = "Packs 96 hex byte values into 32 three-byte row literals"
)]
pub struct Cli {}
