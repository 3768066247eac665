//! Invocation input handed to a chaincode by the peer.

/// Arguments of a single chaincode invocation.
///
/// The peer delivers every argument as raw bytes. By convention the first
/// argument names the function to run and the rest are its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChaincodeInput {
    /// Ordered raw arguments, function name first.
    pub args: Vec<Vec<u8>>,
    /// True when the invocation is the chaincode's `init` call.
    pub is_init: bool,
}

impl ChaincodeInput {
    /// Create an invoke input from raw byte arguments.
    pub fn new(args: Vec<Vec<u8>>) -> Self {
        Self { args, is_init: false }
    }

    /// Create an invoke input from text arguments.
    pub fn from_strs<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(args.into_iter().map(|a| a.as_ref().as_bytes().to_vec()).collect())
    }

    /// Mark this input as an `init` invocation.
    pub fn into_init(mut self) -> Self {
        self.is_init = true;
        self
    }

    /// All arguments decoded as text.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected; the
    /// chaincode treats keys and values as opaque.
    pub fn string_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .collect()
    }

    /// Split the arguments into the function name and its parameters.
    ///
    /// An empty argument list yields an empty function name and no
    /// parameters.
    pub fn function_and_parameters(&self) -> (String, Vec<String>) {
        let mut args = self.string_args().into_iter();
        let function = args.next().unwrap_or_default();
        (function, args.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_and_parameters() {
        let input = ChaincodeInput::from_strs(["put", "a", "1"]);
        let (function, params) = input.function_and_parameters();
        assert_eq!(function, "put");
        assert_eq!(params, vec!["a".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_function_only() {
        let input = ChaincodeInput::from_strs(["get"]);
        let (function, params) = input.function_and_parameters();
        assert_eq!(function, "get");
        assert!(params.is_empty());
    }

    #[test]
    fn test_empty_args() {
        let input = ChaincodeInput::default();
        let (function, params) = input.function_and_parameters();
        assert_eq!(function, "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let input = ChaincodeInput::new(vec![b"get".to_vec(), vec![0xff, b'k']]);
        let (_, params) = input.function_and_parameters();
        assert_eq!(params, vec!["\u{fffd}k".to_string()]);
    }

    #[test]
    fn test_into_init() {
        let input = ChaincodeInput::from_strs(["init"]);
        assert!(!input.is_init);
        assert!(input.into_init().is_init);
    }
}
