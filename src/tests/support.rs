//! Scripted `ChainRpc` double: fixed answers per method (optionally per params)
//! and a log of every method called.

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use crate::rpc::ChainRpc;
use crate::utils::errors::{Result, RpcError};

#[derive(Clone)]
enum Outcome {
    Ok(Value),
    Fail(String),
}

#[derive(Default)]
pub struct ScriptedRpc {
    by_method: HashMap<String, Outcome>,
    by_params: HashMap<(String, String), Outcome>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, method: &str, result: Value) -> Self {
        self.by_method.insert(method.to_string(), Outcome::Ok(result));
        self
    }

    pub fn ok_with(mut self, method: &str, params: Value, result: Value) -> Self {
        self.by_params
            .insert((method.to_string(), params.to_string()), Outcome::Ok(result));
        self
    }

    pub fn fail(mut self, method: &str, message: &str) -> Self {
        self.by_method.insert(method.to_string(), Outcome::Fail(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ChainRpc for ScriptedRpc {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value> {
        self.calls.lock().push(method.to_string());

        let key = (method.to_string(), Value::Array(params).to_string());
        let outcome = self
            .by_params
            .get(&key)
            .or_else(|| self.by_method.get(method))
            .cloned()
            .unwrap_or_else(|| Outcome::Fail(format!("unscripted method {}", method)));

        match outcome {
            Outcome::Ok(v) => Ok(v),
            Outcome::Fail(msg) => Err(RpcError::Protocol(msg)),
        }
    }
}

#[test]
fn scripted_rpc_prefers_param_match() {
    use serde_json::json;

    let rpc = ScriptedRpc::new()
        .ok("getblockhash", json!("any"))
        .ok_with("getblockhash", json!([5]), json!("five"));
    let five = tokio_test::block_on(rpc.call("getblockhash", vec![json!(5)])).unwrap();
    let other = tokio_test::block_on(rpc.call("getblockhash", vec![json!(6)])).unwrap();
    assert_eq!(five, json!("five"));
    assert_eq!(other, json!("any"));
    assert!(tokio_test::block_on(rpc.call("getdifficulty", vec![])).is_err());
    assert_eq!(rpc.calls().len(), 3);
}
