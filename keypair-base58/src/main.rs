use clap::Parser;
use keypair_base58::source_to_base58;

#[derive(Debug, Parser)]
#[command(name = "keypair-base58")]
#[command(about = "Generate base58 Solana private key from integer list")]
struct Cli {
    /// List literal or path to file
    source: String,
}

fn init_logger() {
    let _ = env_logger::builder().format_timestamp_micros().try_init();
}

fn main() {
    init_logger();

    let cli = Cli::parse();
    match source_to_base58(&cli.source) {
        Ok(encoded) => println!("{}", encoded),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
