use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use num_bigint::BigUint;
use serde::Deserialize;

use sys::*;


include!{"tx.rs"}
include!{"txhash.rs"}
include!{"block.rs"}
include!{"gas.rs"}
include!{"invoke.rs"}
include!{"descript.rs"}
