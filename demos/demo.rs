//! Minimal interactive demo: pick one of three words, seeded with "tw".
//!
//! Run with `cargo run --example demo`.

use anyhow::Result;

fn main() -> Result<()> {
	let found = fzpick::find(["one", "two", "three"], "tw")?;
	match found {
		Some(choice) => println!("{choice}"),
		None => println!("nothing selected"),
	}
	Ok(())
}
