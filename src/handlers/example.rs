//! Handler for the `example` command.

use super::{serialize_as, write_output};
use crate::analyzer::cost_optimize::types::ProjectProfile;
use crate::cli::ProfileFormat;
use crate::error::Result;
use std::path::Path;

/// Print (or save) the example project profile.
pub fn handle_example(format: ProfileFormat, output: Option<&Path>) -> Result<()> {
    let extension = match format {
        ProfileFormat::Json => "json",
        ProfileFormat::Yaml => "yaml",
        ProfileFormat::Toml => "toml",
    };
    let rendered = serialize_as(&ProjectProfile::example(), extension)?;
    write_output(output, rendered.trim_end())
}
