use errors::KeypairResult;

mod encoder;
pub mod errors;
mod loader;
pub use encoder::*;
pub use loader::*;

/// Turns a keypair source, a list literal or a path to a file holding
/// the list, into the base58 encoding of its bytes.
pub fn source_to_base58(source: &str) -> KeypairResult<String> {
    let ints = load_list(source)?;
    list_to_base58(&ints)
}
