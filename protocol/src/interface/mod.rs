use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use sys::*;

use super::component::*;


include!{"state.rs"}
include!{"ledger.rs"}
include!{"register.rs"}
include!{"assemble.rs"}
include!{"contract.rs"}
