//! Site list reader
//!
//! Sites are read from a JSON array of `{ "name", "lon", "lat" }` objects,
//! in file order.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::vector::Site;

/// Read sites from a JSON file
pub fn read_sites<P: AsRef<Path>>(path: P) -> Result<Vec<Site>> {
    let file = File::open(path.as_ref())?;
    let sites = read_sites_from_reader(BufReader::new(file))?;
    debug!("Read {} sites from {}", sites.len(), path.as_ref().display());
    Ok(sites)
}

/// Read sites from any reader holding a JSON array
pub fn read_sites_from_reader<R: Read>(reader: R) -> Result<Vec<Site>> {
    Ok(serde_json::from_reader(reader)?)
}
