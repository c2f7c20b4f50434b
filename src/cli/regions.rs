//! Region table listing (`idcard regions`).

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::cli::utils::print_json;

pub fn handle(global: &GlobalArgs) -> Result<()> {
    let response = global.service().list_regions();
    if global.json {
        print_json(&response)?;
    } else {
        for region in &response.regions {
            println!("{}  {}", region.code, region.name);
        }
    }
    Ok(())
}
