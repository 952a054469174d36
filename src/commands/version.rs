use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("govctl version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
