
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/*
* descriptor embedded in a transaction selecting a contract method
*/
#[derive(Debug, Clone)]
pub struct TxDesc {
    pub module: String,
    pub method: String,
    pub args: JsonObject,
    pub tx: Arc<Transaction>,
}


impl TxDesc {

    pub fn new(method: &str, args: JsonObject, tx: Arc<Transaction>) -> TxDesc {
        TxDesc {
            module: s!("kernel"),
            method: s!(method),
            args,
            tx,
        }
    }

    // parse the descriptor json carried by one confirmed transaction
    pub fn from_tx(tx: Arc<Transaction>) -> Ret<TxDesc> {
        let jsonv: serde_json::Value = match serde_json::from_slice(&tx.desc) {
            Ok(v) => v,
            Err(e) => return errf!("tx desc parse error: {}", e),
        };
        let Some(obj) = jsonv.as_object() else {
            return errf!("tx desc format error")
        };
        let module = match obj.get("module") {
            Some(m) => {
                let Some(m) = m.as_str() else {
                    return errf!("the type of module should be string")
                };
                s!(m)
            },
            None => s!("kernel"),
        };
        let Some(method) = obj.get("method").and_then(|m| m.as_str()) else {
            return errf!("tx desc method is empty")
        };
        let args = match obj.get("args") {
            Some(a) => {
                let Some(a) = a.as_object() else {
                    return errf!("tx desc args format error")
                };
                a.clone()
            },
            None => JsonObject::new(),
        };
        Ok(TxDesc {
            module,
            method: s!(method),
            args,
            tx,
        })
    }

    pub fn arg(&self, name: &str) -> Ret<&serde_json::Value> {
        let Some(v) = self.args.get(name) else {
            return errf!("miss argument in contract: {}", name)
        };
        Ok(v)
    }

    pub fn arg_str(&self, name: &str) -> Ret<String> {
        let v = self.arg(name)?;
        let Some(v) = v.as_str() else {
            return errf!("the type of {} should be string", name)
        };
        Ok(s!(v))
    }

    // numeric arguments arrive as json floating point
    // and narrow to int64 with explicit range checking
    pub fn arg_i64(&self, name: &str) -> Ret<i64> {
        let v = self.arg(name)?;
        let Some(f) = v.as_f64() else {
            return errf!("invalid arg type: {}, expect number", name)
        };
        if ! f.is_finite() {
            return errf!("numeric argument {} is not finite", name)
        }
        if f < i64::MIN as f64 || f > i64::MAX as f64 {
            return errf!("numeric argument {} out of int64 range", name)
        }
        Ok(f as i64)
    }

    pub fn arg_list(&self, name: &str) -> Ret<Vec<serde_json::Value>> {
        let v = self.arg(name)?;
        let Some(l) = v.as_array() else {
            return errf!("the type of {} should be list", name)
        };
        Ok(l.clone())
    }

}
