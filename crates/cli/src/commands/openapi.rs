//! Print the generated API document.

use order_desk_api::openapi::api_doc;

/// Write the OpenAPI document to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized.
pub fn print(public_url: &str) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(&api_doc(public_url))?;

    #[allow(clippy::print_stdout)]
    {
        println!("{json}");
    }
    Ok(())
}
