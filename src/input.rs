//! Parsing raw player input into engine actions.
//!
//! Both parsers trim surrounding whitespace. Errors are recoverable: the
//! caller shows the message and prompts again.

use crate::error::InputError;
use crate::resolution::RoomResolution;
use crate::zones::Slot;

/// Parse the answer to "defer this room?".
///
/// Accepts `y`, `yes`, `n`, `no` in any case.
///
/// ```
/// use rust_scoundrel::input::parse_defer_response;
///
/// assert_eq!(parse_defer_response(" Y "), Ok(true));
/// assert_eq!(parse_defer_response("no"), Ok(false));
/// assert!(parse_defer_response("maybe").is_err());
/// ```
pub fn parse_defer_response(input: &str) -> Result<bool, InputError> {
    let answer = input.trim();
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(InputError::InvalidDeferResponse(answer.to_string())),
    }
}

/// Parse a 1-based card choice and validate it against the room in play.
pub fn parse_selection(input: &str, resolution: &RoomResolution) -> Result<Slot, InputError> {
    let choice = input.trim();
    let position: usize = choice
        .parse()
        .map_err(|_| InputError::NotANumber(choice.to_string()))?;
    Ok(resolution.validate(position)?)
}
