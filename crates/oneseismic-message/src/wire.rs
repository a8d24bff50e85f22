use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::task::CommonTask;

/// The pack/unpack contract every wire message honors.
///
/// Messages travel as self-describing JSON documents. Types bound to a query
/// function (tasks and fetches) advertise the expected tag through
/// [`Message::FUNCTION`]; [`Message::unpack`] refuses documents whose
/// embedded tag disagrees, so a slice worker can never be handed a curtain
/// payload by accident.
pub trait Message: Serialize + DeserializeOwned {
    /// The function tag this type is bound to on the wire, if any.
    const FUNCTION: Option<&'static str> = None;

    /// The function tag carried by this value, if its envelope has one.
    fn function(&self) -> Option<&str> {
        None
    }

    /// Serialize into the wire form.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying serializer does; values produced by the
    /// planner always serialize.
    fn pack(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode from the wire form, verifying the function tag when the type
    /// is bound to one.
    ///
    /// # Errors
    ///
    /// [`Error::Malformed`] if the document does not decode;
    /// [`Error::WrongFunction`] if the embedded tag names another function.
    fn unpack(doc: &[u8]) -> Result<Self> {
        let msg: Self = serde_json::from_slice(doc)?;
        if let Some(expected) = Self::FUNCTION {
            let got = msg.function().unwrap_or_default();
            if got != expected {
                return Err(Error::WrongFunction {
                    expected,
                    got: got.to_string(),
                });
            }
        }
        Ok(msg)
    }
}

/// Access to the request envelope shared by every task and fetch.
pub trait Envelope {
    fn common(&self) -> &CommonTask;
}
