//! Print the OpenAPI document as JSON.

use songbook::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
