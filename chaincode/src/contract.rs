//! The key/value chaincode.
//!
//! `invoke` reads the function name and parameters from the stub, routes
//! them to `put` or `get`, and converts the outcome into a `Response`.
//! Each handler validates its parameter count before touching state and
//! performs at most one state call.

use chaincode_primitives::Response;
use chaincode_shim::{success, Chaincode, ChaincodeStub};
use tracing::{debug, info};

use crate::error::ChaincodeError;
use crate::function::Function;

/// Chaincode storing text values under text keys.
///
/// Stateless: every call is served from the stub alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleChaincode;

impl SimpleChaincode {
    pub fn new() -> Self {
        Self
    }

    /// Route `function` to its handler.
    ///
    /// Returns the success payload, if any.
    pub fn dispatch(
        &self,
        stub: &mut dyn ChaincodeStub,
        function: &str,
        args: &[String],
    ) -> Result<Option<Vec<u8>>, ChaincodeError> {
        match function.parse::<Function>()? {
            Function::Put => self.put(stub, args).map(|()| None),
            Function::Get => self.get(stub, args).map(Some),
        }
    }

    /// `put <key> <value>`: store `value`'s bytes under `key`.
    pub fn put(
        &self,
        stub: &mut dyn ChaincodeStub,
        args: &[String],
    ) -> Result<(), ChaincodeError> {
        let [key, value] = args else {
            return Err(Function::Put.arity_error(args.len()));
        };
        stub.put_state(key, value.as_bytes())
            .map_err(ChaincodeError::PutState)
    }

    /// `get <key>`: return the bytes stored under `key`.
    pub fn get(
        &self,
        stub: &dyn ChaincodeStub,
        args: &[String],
    ) -> Result<Vec<u8>, ChaincodeError> {
        let [key] = args else {
            return Err(Function::Get.arity_error(args.len()));
        };
        match stub.get_state(key) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(ChaincodeError::StateNotFound { key: key.clone() }),
            Err(source) => Err(ChaincodeError::StateRead {
                key: key.clone(),
                source,
            }),
        }
    }
}

impl Chaincode for SimpleChaincode {
    fn init(&self, _stub: &mut dyn ChaincodeStub) -> Response {
        info!("========= Init =========");
        success(None)
    }

    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response {
        info!("========= Invoke =========");
        let (function, args) = stub.function_and_parameters();

        match self.dispatch(stub, &function, &args) {
            Ok(payload) => success(payload),
            Err(err) => {
                debug!(tx_id = stub.tx_id(), %function, error = ?err, "invocation failed");
                err.into()
            }
        }
    }
}
