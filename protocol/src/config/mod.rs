use std::collections::HashSet;

use num_bigint::BigUint;

use sys::*;

use super::component::GasPrice;


include!{"kernel.rs"}
include!{"genesis.rs"}
include!{"permission.rs"}
