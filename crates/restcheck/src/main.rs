use anyhow::Result;
use restcheck::{cli, ux};

#[tokio::main]
async fn main() -> Result<()> {
    match cli::run().await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            ux::present_error(e);
            std::process::exit(1);
        }
    }
}
