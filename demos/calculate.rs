//! Prints the statistics of the matrix [[1, 2, 3], [4, 5, 6], [7, 8, 9]].
//!
//! ```text
//! cargo run --example calculate
//! cargo run --example calculate --features serde
//! RUST_LOG=trace cargo run --example calculate
//! ```

use u_matstats::calculate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    let statistics = calculate(&data)?;
    println!("{statistics}");

    #[cfg(feature = "serde")]
    println!("{}", serde_json::to_string_pretty(&statistics)?);

    Ok(())
}
